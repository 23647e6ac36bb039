use crate::foundation::math::{lerp, lerp_inverse, lerp_inverse_saturate};
use crate::wave::params::{MATCHED_WAVE_ENDPOINT, MIN_WAVE_ENDPOINT, TRANSITION_PERIODS};

/// Inputs for evaluating the wave amplitude at a horizontal position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmplitudeProfile {
    /// Peak height from [`crate::WaveParams::line_amplitude`].
    pub line_amplitude: f64,
    /// Show/hide envelope in `[0, 1]`.
    pub height_fraction: f64,
    /// Pixel position the wave decays around.
    pub wave_progress_px: f64,
    /// Half-width of the decay zone, or `None` when transitions are off.
    pub transition_half_width: Option<f64>,
}

impl AmplitudeProfile {
    /// Profile for a wave of `wave_length`, with or without the decay zone.
    pub fn new(
        line_amplitude: f64,
        height_fraction: f64,
        wave_progress_px: f64,
        wave_length: f64,
        transition_enabled: bool,
    ) -> Self {
        Self {
            line_amplitude,
            height_fraction,
            wave_progress_px,
            transition_half_width: transition_enabled
                .then(|| TRANSITION_PERIODS * wave_length / 2.0),
        }
    }

    /// Signed amplitude at `x`. `sign` selects crest (+1) or trough (-1).
    ///
    /// With a transition zone the amplitude is full at and behind
    /// `wave_progress_px - half`, falls linearly, and is exactly zero from
    /// `wave_progress_px + half` onwards.
    pub fn amplitude(&self, x: f64, sign: f64) -> f64 {
        let peak = sign * self.height_fraction * self.line_amplitude;
        match self.transition_half_width {
            None => peak,
            Some(half) => {
                let coeff = lerp_inverse_saturate(
                    self.wave_progress_px + half,
                    self.wave_progress_px - half,
                    x,
                );
                peak * coeff
            }
        }
    }
}

/// Pixel position of the wave's decay point for a `progress` fraction over `total_width`.
pub fn wave_progress_px(total_width: f64, progress: f64, transition_enabled: bool) -> f64 {
    let fraction = if !transition_enabled || progress > MATCHED_WAVE_ENDPOINT {
        progress
    } else {
        lerp(
            MIN_WAVE_ENDPOINT,
            MATCHED_WAVE_ENDPOINT,
            lerp_inverse(0.0, MATCHED_WAVE_ENDPOINT, progress),
        )
    };
    total_width * fraction
}

#[cfg(test)]
#[path = "../../tests/unit/wave/amplitude.rs"]
mod tests;
