/// Number of wavelengths over which the amplitude decays around the progress point.
pub const TRANSITION_PERIODS: f64 = 1.5;
/// Progress position the wave end is pinned to while progress is below
/// [`MATCHED_WAVE_ENDPOINT`].
pub const MIN_WAVE_ENDPOINT: f64 = 0.0;
/// Progress above which the wave end tracks progress exactly.
pub const MATCHED_WAVE_ENDPOINT: f64 = 0.0;

/// Geometry and motion of the wave. All values are in pixels (or pixels per second).
///
/// Fields are kept valid by the setters on [`crate::SquigglyProgress`]; constructing one
/// directly goes through [`WaveParams::sanitized`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveParams {
    /// Full period of the wave.
    pub wave_length: f64,
    /// Peak height of the wave above the center line.
    pub line_amplitude: f64,
    /// Horizontal drift of the wave.
    pub phase_speed: f64,
    /// Width of both the wave and the remainder line.
    pub stroke_width: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_length: 55.0,
            line_amplitude: 6.0,
            phase_speed: 16.0,
            stroke_width: 4.0,
        }
    }
}

impl WaveParams {
    /// Clamp every field into its valid domain. Non-finite values fall back to defaults.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            wave_length: non_negative_or(self.wave_length, d.wave_length),
            line_amplitude: non_negative_or(self.line_amplitude, d.line_amplitude),
            phase_speed: if self.phase_speed.is_finite() {
                self.phase_speed
            } else {
                0.0
            },
            stroke_width: non_negative_or(self.stroke_width, d.stroke_width),
        }
    }
}

pub(crate) fn non_negative_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { fallback }
}
