use super::*;

fn scenario_profile(transition: bool) -> AmplitudeProfile {
    // 55px waves, 6px amplitude, half-way over 500px.
    AmplitudeProfile::new(6.0, 1.0, wave_progress_px(500.0, 0.5, transition), 55.0, transition)
}

#[test]
fn zero_at_and_beyond_transition_end() {
    let p = scenario_profile(true);
    let end = 250.0 + 1.5 * 55.0 / 2.0;
    assert_eq!(p.amplitude(end, 1.0), 0.0);
    for x in [end + 0.001, end + 10.0, 400.0, 500.0] {
        assert_eq!(p.amplitude(x, 1.0), 0.0);
        assert_eq!(p.amplitude(x, -1.0), 0.0);
    }
    // Everything within 1.5 wavelengths ahead of the progress point has decayed.
    assert_eq!(p.amplitude(250.0 + 82.5, 1.0), 0.0);
}

#[test]
fn full_amplitude_behind_transition_start() {
    let p = scenario_profile(true);
    let start = 250.0 - 1.5 * 55.0 / 2.0;
    for x in [-30.0, 0.0, 100.0, start] {
        assert!((p.amplitude(x, 1.0) - 6.0).abs() < 1e-12);
        assert!((p.amplitude(x, -1.0) + 6.0).abs() < 1e-12);
    }
}

#[test]
fn half_amplitude_at_progress_point() {
    let p = scenario_profile(true);
    assert!((p.amplitude(250.0, 1.0) - 3.0).abs() < 1e-12);
}

#[test]
fn continuous_across_zone_boundaries() {
    let p = scenario_profile(true);
    let half = 1.5 * 55.0 / 2.0;
    let eps = 1e-6;
    for edge in [250.0 - half, 250.0 + half] {
        let before = p.amplitude(edge - eps, 1.0);
        let after = p.amplitude(edge + eps, 1.0);
        assert!((before - after).abs() < 1e-3, "jump at {edge}: {before} vs {after}");
    }
}

#[test]
fn monotone_decay_through_zone() {
    let p = scenario_profile(true);
    let mut prev = f64::INFINITY;
    let mut x = 200.0;
    while x < 300.0 {
        let a = p.amplitude(x, 1.0);
        assert!(a <= prev);
        prev = a;
        x += 0.5;
    }
}

#[test]
fn disabled_transition_is_constant() {
    let p = AmplitudeProfile::new(6.0, 1.0, wave_progress_px(500.0, 0.3, false), 55.0, false);
    for x in [-50.0, 0.0, 149.0, 150.0, 151.0, 500.0] {
        assert_eq!(p.amplitude(x, 1.0), 6.0);
        assert_eq!(p.amplitude(x, -1.0), -6.0);
    }
}

#[test]
fn height_fraction_scales_envelope() {
    let p = AmplitudeProfile::new(6.0, 0.25, 250.0, 55.0, false);
    assert_eq!(p.amplitude(0.0, 1.0), 1.5);
    let hidden = AmplitudeProfile::new(6.0, 0.0, 250.0, 55.0, true);
    assert_eq!(hidden.amplitude(0.0, 1.0), 0.0);
}

#[test]
fn wave_progress_tracks_progress() {
    assert_eq!(wave_progress_px(500.0, 0.5, true), 250.0);
    assert_eq!(wave_progress_px(500.0, 0.3, false), 150.0);
    assert_eq!(wave_progress_px(500.0, 0.0, true), 0.0);
}
