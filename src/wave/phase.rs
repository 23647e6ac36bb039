use crate::foundation::core::Timestamp;

/// Advance `phase` by the distance the wave travels between `last` and `now`, wrapped into
/// `[0, wave_length)`.
///
/// Out-of-order timestamps give a negative advance, which still wraps into range.
/// A non-positive wave length pins the phase to `0`.
pub fn advance_phase(
    phase: f64,
    last: Timestamp,
    now: Timestamp,
    phase_speed: f64,
    wave_length: f64,
) -> f64 {
    let delta = now.millis_since(last) / 1000.0 * phase_speed;
    wrap_phase(phase + delta, wave_length)
}

/// Reduce `phase` into `[0, wave_length)`.
pub fn wrap_phase(phase: f64, wave_length: f64) -> f64 {
    if wave_length.is_nan() || wave_length <= 0.0 || !phase.is_finite() {
        return 0.0;
    }
    let wrapped = phase.rem_euclid(wave_length);
    // rem_euclid can round up to exactly `wave_length` for tiny negative inputs.
    if wrapped >= wave_length { 0.0 } else { wrapped }
}

/// Phase bookkeeping for the wave: the offset and the timestamp of the last animated frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseClock {
    offset: f64,
    last_frame: Option<Timestamp>,
}

impl PhaseClock {
    /// Phase in `[0, wave_length)`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Timestamp of the last animated step, `None` after a reset.
    pub fn last_frame(&self) -> Option<Timestamp> {
        self.last_frame
    }

    /// Record `now` and move the phase forward. The first call after a reset only records.
    pub fn step(&mut self, now: Timestamp, phase_speed: f64, wave_length: f64) {
        if let Some(last) = self.last_frame {
            self.offset = advance_phase(self.offset, last, now, phase_speed, wave_length);
        }
        self.last_frame = Some(now);
    }

    /// Forget the last frame time so the next [`PhaseClock::step`] does not jump.
    pub fn reset_time(&mut self) {
        self.last_frame = None;
    }

    /// Re-establish the phase invariant after the wave length changed.
    pub fn rewrap(&mut self, wave_length: f64) {
        self.offset = wrap_phase(self.offset, wave_length);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/phase.rs"]
mod tests;
