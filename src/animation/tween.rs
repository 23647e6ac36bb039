use crate::animation::ease::Ease;
use crate::foundation::math::lerp;

/// Timing of a single tween: how long to wait and how long to run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenTiming {
    /// Milliseconds before the value starts moving.
    pub delay_ms: f64,
    /// Milliseconds spent interpolating once the delay has passed.
    pub duration_ms: f64,
    /// Easing applied to normalized progress.
    pub ease: Ease,
}

/// Result of advancing a [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep {
    /// Current interpolated value.
    pub value: f64,
    /// `true` once the tween has reached its end value.
    pub done: bool,
}

/// Time-bounded interpolation of a scalar between two endpoints.
///
/// The tween owns its own clock; the caller feeds it elapsed milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    timing: TweenTiming,
    elapsed_ms: f64,
}

impl Tween {
    /// Tween from `from` to `to`. Negative or non-finite timings are treated as 0.
    pub fn new(from: f64, to: f64, timing: TweenTiming) -> Self {
        Self {
            from,
            to,
            timing: TweenTiming {
                delay_ms: sanitize_ms(timing.delay_ms),
                duration_ms: sanitize_ms(timing.duration_ms),
                ease: timing.ease,
            },
            elapsed_ms: 0.0,
        }
    }

    /// Start value.
    pub fn from_value(&self) -> f64 {
        self.from
    }

    /// End value.
    pub fn to_value(&self) -> f64 {
        self.to
    }

    /// Total lifetime including the start delay.
    pub fn total_ms(&self) -> f64 {
        self.timing.delay_ms + self.timing.duration_ms
    }

    /// Value at the current elapsed time, without advancing.
    pub fn sample(&self) -> TweenStep {
        let TweenTiming {
            delay_ms,
            duration_ms,
            ease,
        } = self.timing;

        let active = self.elapsed_ms - delay_ms;
        if active >= duration_ms {
            return TweenStep {
                value: self.to,
                done: true,
            };
        }
        if active <= 0.0 {
            return TweenStep {
                value: self.from,
                done: false,
            };
        }

        let t = ease.apply(active / duration_ms);
        TweenStep {
            value: lerp(self.from, self.to, t),
            done: false,
        }
    }

    /// Advance by `dt_ms` milliseconds. Negative or non-finite steps do not move the clock.
    pub fn tick(&mut self, dt_ms: f64) -> TweenStep {
        self.elapsed_ms += sanitize_ms(dt_ms);
        self.sample()
    }
}

fn sanitize_ms(ms: f64) -> f64 {
    if ms.is_finite() { ms.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
