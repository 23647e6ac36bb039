use super::*;
use crate::drawable::SquigglyProgress;
use crate::foundation::core::Rgba8;

#[test]
fn empty_object_takes_defaults() {
    let cfg = ProgressConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, ProgressConfig::default());
    assert_eq!(cfg.wave_params(), WaveParams::default());
}

#[test]
fn parses_full_document() {
    let json = r##"{
        "wave_length": 40,
        "line_amplitude": 3.5,
        "phase_speed": -8,
        "stroke_width": 2,
        "transition_enabled": false,
        "animate": false,
        "tint": "#6750a4",
        "alpha": 200,
        "level": 0.3
    }"##;
    let cfg = ProgressConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.wave_length, 40.0);
    assert_eq!(cfg.phase_speed, -8.0);
    assert!(!cfg.transition_enabled);
    assert!(!cfg.animate);
    assert_eq!(cfg.tint.to_rgba8(), Rgba8::new(0x67, 0x50, 0xa4, 0xff));
    assert_eq!(cfg.alpha, 200);
    assert_eq!(cfg.level, 0.3);
}

#[test]
fn rejects_invalid_values() {
    for json in [
        r#"{"wave_length": 0}"#,
        r#"{"wave_length": -5}"#,
        r#"{"line_amplitude": -1}"#,
        r#"{"stroke_width": -0.5}"#,
        r#"{"level": 1.5}"#,
        r#"{"level": -0.1}"#,
    ] {
        let err = ProgressConfig::from_reader(json.as_bytes()).unwrap_err();
        assert!(
            err.to_string().contains("validation error:"),
            "{json}: {err}"
        );
    }
}

#[test]
fn rejects_malformed_json_and_unknown_fields() {
    let err = ProgressConfig::from_reader("{".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));

    let err = ProgressConfig::from_reader(r#"{"wavelength": 3}"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn tint_with_alpha_points_at_alpha_field() {
    let err = ProgressConfig::from_reader(r##"{"tint": "#ff000080"}"##.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("set `alpha` instead"), "{err}");

    let cfg =
        ProgressConfig::from_reader(r##"{"tint": [255, 0, 0], "alpha": 128}"##.as_bytes()).unwrap();
    let colors = SquigglyProgress::from_config(&cfg).colors();
    assert_eq!(colors.active(), Rgba8::new(255, 0, 0, 128));
}

#[test]
fn missing_file_is_reported() {
    let err = ProgressConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open progress config"));
}

#[test]
fn serializes_back_to_json() {
    let cfg = ProgressConfig::default();
    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["tint"], serde_json::json!("#ffffff"));
    let back: ProgressConfig = serde_json::from_value(v).unwrap();
    assert_eq!(back, cfg);
}
