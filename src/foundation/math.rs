/// Linear interpolation from `a` to `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `value` within `[a, b]` as a fraction; `0` for a degenerate interval.
pub fn lerp_inverse(a: f64, b: f64, value: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    (value - a) / (b - a)
}

/// Clamp into `[0, 1]`. NaN maps to `0`.
pub fn saturate(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

/// [`lerp_inverse`] clamped into `[0, 1]`.
pub fn lerp_inverse_saturate(a: f64, b: f64, value: f64) -> f64 {
    saturate(lerp_inverse(a, b, value))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
