use crate::animation::ease::Ease;
use crate::animation::tween::{Tween, TweenTiming};
use crate::foundation::math::saturate;

/// Timing used when the wave grows back in.
pub const APPEAR_TIMING: TweenTiming = TweenTiming {
    delay_ms: 60.0,
    duration_ms: 800.0,
    ease: Ease::EMPHASIZED_DECELERATE,
};

/// Timing used when the wave flattens out. Snappier than [`APPEAR_TIMING`].
pub const DISAPPEAR_TIMING: TweenTiming = TweenTiming {
    delay_ms: 0.0,
    duration_ms: 550.0,
    ease: Ease::STANDARD_DECELERATE,
};

/// Observable state of the [`HeightAnimator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightState {
    /// Settled at the given value (0 or 1 after any completed tween).
    Idle(f64),
    /// A tween is in flight.
    Animating {
        /// Value the tween started from.
        from: f64,
        /// Value the tween is heading to.
        to: f64,
    },
}

/// Drives the wave's overall amplitude envelope (the height fraction) between 0 and 1.
///
/// At most one tween is in flight; setting a new target drops the previous one without
/// completing it.
#[derive(Clone, Debug)]
pub struct HeightAnimator {
    value: f64,
    tween: Option<Tween>,
}

impl HeightAnimator {
    /// Start settled at `value`, clamped into `[0, 1]`.
    pub fn new(value: f64) -> Self {
        Self {
            value: saturate(value),
            tween: None,
        }
    }

    /// Current height fraction in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// `true` while a tween is in flight.
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Settled value, or the endpoints of the tween in flight.
    pub fn state(&self) -> HeightState {
        match &self.tween {
            None => HeightState::Idle(self.value),
            Some(tw) => HeightState::Animating {
                from: tw.from_value(),
                to: tw.to_value(),
            },
        }
    }

    /// Retarget towards 1 (`visible`) or 0, starting from the current value.
    pub fn set_visible(&mut self, visible: bool) {
        let (to, timing) = if visible {
            (1.0, APPEAR_TIMING)
        } else {
            (0.0, DISAPPEAR_TIMING)
        };

        if let Some(prev) = self.tween.take() {
            tracing::debug!(
                from = prev.from_value(),
                to = prev.to_value(),
                at = self.value,
                "height tween cancelled"
            );
        }
        self.tween = Some(Tween::new(self.value, to, timing));
        tracing::debug!(from = self.value, to, "height tween started");
    }

    /// Jump straight to `value` and drop any tween in flight.
    pub fn snap_to(&mut self, value: f64) {
        self.tween = None;
        self.value = saturate(value);
    }

    /// Advance the in-flight tween by `dt_ms`. Returns `true` if the value may have changed.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };

        let step = tween.tick(dt_ms);
        self.value = saturate(step.value);
        if step.done {
            self.tween = None;
            tracing::debug!(value = self.value, "height tween finished");
        }
        true
    }
}

impl Default for HeightAnimator {
    /// The wave starts fully visible.
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/height.rs"]
mod tests;
