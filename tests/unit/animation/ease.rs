use super::*;

const ALL: [Ease; 4] = [
    Ease::Linear,
    Ease::OutCubic,
    Ease::EMPHASIZED_DECELERATE,
    Ease::STANDARD_DECELERATE,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-2.0), 0.0);
        assert_eq!(ease.apply(3.0), 1.0);
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn decelerate_curves_lead_linear() {
    for ease in [Ease::EMPHASIZED_DECELERATE, Ease::STANDARD_DECELERATE] {
        assert!(ease.apply(0.3) > 0.3);
    }
}

#[test]
fn cubic_bezier_identity_is_linear() {
    let ease = Ease::CubicBezier {
        x1: 1.0 / 3.0,
        y1: 1.0 / 3.0,
        x2: 2.0 / 3.0,
        y2: 2.0 / 3.0,
    };
    for t in [0.1, 0.4, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-6);
    }
}
