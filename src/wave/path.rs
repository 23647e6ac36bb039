use kurbo::{BezPath, Point};

use crate::wave::amplitude::AmplitudeProfile;

/// Horizontal offset of each cubic control point from its segment endpoint, as a fraction of
/// the half-wavelength segment. Places the handles so a crest-to-trough cubic tracks a sine.
pub const SINE_CONTROL_RATIO: f64 = 0.36;

/// Half-wavelengths shorter than this draw as a flat line; they are finer than the raster.
pub const MIN_HALF_WAVE_PX: f64 = 0.5;

/// Upper bound on half-wavelength segments per frame. Only spans far wider than any real
/// surface reach it; they are drawn flat.
pub const MAX_WAVE_SEGMENTS: usize = 1 << 16;

/// Horizontal span of the wave, in coordinates relative to the bar's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSpan {
    /// x of the first crest; left of the visible area by at least half a wavelength.
    pub start: f64,
    /// x the wave must reach or pass.
    pub end: f64,
    /// Full wave period.
    pub wave_length: f64,
}

impl WaveSpan {
    /// Span for a wave shifted left by `phase_offset`, running to `end`.
    pub fn new(phase_offset: f64, wave_length: f64, end: f64) -> Self {
        Self {
            start: -phase_offset - wave_length / 2.0,
            end,
            wave_length,
        }
    }

    fn segment_count(&self) -> Option<usize> {
        let dist = self.wave_length / 2.0;
        if !(dist.is_finite() && dist >= MIN_HALF_WAVE_PX)
            || !self.start.is_finite()
            || !self.end.is_finite()
        {
            return None;
        }
        let needed = ((self.end - self.start) / dist).ceil().max(1.0);
        (needed <= MAX_WAVE_SEGMENTS as f64).then_some(needed as usize)
    }
}

/// Rebuild `path` in place as a sine-shaped run of cubic segments across `span`.
///
/// The path starts on the center line at `span.start`. Each segment covers half a wavelength
/// and alternates between crest and trough; heights come from `profile`. The buffer is
/// cleared, not reallocated, so steady-state frames do not allocate.
pub fn build_wave(path: &mut BezPath, span: WaveSpan, profile: &AmplitudeProfile) {
    path.truncate(0);

    let Some(segments) = span.segment_count() else {
        build_flat(path, span);
        return;
    };

    let dist = span.wave_length / 2.0;
    let handle = SINE_CONTROL_RATIO * dist;

    let mut x = span.start;
    let mut sign = 1.0;
    let mut amp = profile.amplitude(x, sign);
    path.move_to(Point::new(x, 0.0));

    for _ in 0..segments {
        if x >= span.end {
            break;
        }
        sign = -sign;
        let next_x = x + dist;
        let next_amp = profile.amplitude(next_x, sign);
        path.curve_to(
            Point::new(x + handle, amp),
            Point::new(next_x - handle, next_amp),
            Point::new(next_x, next_amp),
        );
        x = next_x;
        amp = next_amp;
    }
}

fn build_flat(path: &mut BezPath, span: WaveSpan) {
    let start = if span.start.is_finite() { span.start } else { 0.0 };
    let end = if span.end.is_finite() {
        span.end.max(start)
    } else {
        start
    };
    path.move_to(Point::new(start, 0.0));
    path.line_to(Point::new(end, 0.0));
}

#[cfg(test)]
#[path = "../../tests/unit/wave/path.rs"]
mod tests;
