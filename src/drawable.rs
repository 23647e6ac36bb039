use std::fmt;

use crate::animation::height::{HeightAnimator, HeightState};
use crate::config::ProgressConfig;
use crate::foundation::core::{BezPath, Rect, Rgba8, Timestamp};
use crate::foundation::math::saturate;
use crate::paint::tint::ColorState;
use crate::render::compositor::{CompositeFrame, composite};
use crate::render::surface::DrawSurface;
use crate::wave::amplitude::{AmplitudeProfile, wave_progress_px};
use crate::wave::params::{WaveParams, non_negative_or};
use crate::wave::path::{WaveSpan, build_wave};
use crate::wave::phase::PhaseClock;

/// Full scale of [`SquigglyProgress::set_level_fixed`].
pub const LEVEL_SCALE: u32 = 10_000;

/// What the host should do after a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Something is still moving; schedule another frame.
    Continue,
    /// Nothing will change until a setter is called.
    Idle,
}

impl FrameRequest {
    /// `true` for [`FrameRequest::Continue`].
    pub fn needs_more(self) -> bool {
        matches!(self, Self::Continue)
    }
}

/// An animated squiggly progress bar.
///
/// Owns all per-instance state: wave parameters, the phase clock, the height animator, the
/// derived colors and a path buffer reused across frames. The host calls
/// [`SquigglyProgress::draw`] once per frame and keeps calling while it returns
/// [`FrameRequest::Continue`].
pub struct SquigglyProgress {
    params: WaveParams,
    transition_enabled: bool,
    animate: bool,
    level: f64,
    bounds: Rect,
    phase: PhaseClock,
    height: HeightAnimator,
    last_tick: Option<Timestamp>,
    colors: ColorState,
    path: BezPath,
    invalidate: Option<Box<dyn FnMut()>>,
}

impl Default for SquigglyProgress {
    fn default() -> Self {
        Self::new(WaveParams::default())
    }
}

impl fmt::Debug for SquigglyProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SquigglyProgress")
            .field("params", &self.params)
            .field("transition_enabled", &self.transition_enabled)
            .field("animate", &self.animate)
            .field("level", &self.level)
            .field("bounds", &self.bounds)
            .field("phase", &self.phase)
            .field("height", &self.height)
            .field("colors", &self.colors)
            .field("has_invalidate", &self.invalidate.is_some())
            .finish()
    }
}

impl SquigglyProgress {
    /// A static, fully visible wave with transitions enabled and white tint.
    ///
    /// The height starts at `Idle(1.0)` even though animation is off, so a freshly built bar
    /// shows its wave without ever having been animated. Toggling never lands in this state:
    /// stopping always flattens to `Idle(0.0)`.
    pub fn new(params: WaveParams) -> Self {
        Self {
            params: params.sanitized(),
            transition_enabled: true,
            animate: false,
            level: 0.0,
            bounds: Rect::ZERO,
            phase: PhaseClock::default(),
            height: HeightAnimator::new(1.0),
            last_tick: None,
            colors: ColorState::default(),
            path: BezPath::new(),
            invalidate: None,
        }
    }

    /// Build from a loaded configuration. The wave starts fully visible; an animating config
    /// starts moving on the first draw without a grow-in tween.
    pub fn from_config(cfg: &ProgressConfig) -> Self {
        let mut this = Self::new(cfg.wave_params());
        this.transition_enabled = cfg.transition_enabled;
        this.animate = cfg.animate;
        this.level = saturate(cfg.level);
        this.colors = ColorState::derive(cfg.tint.to_rgba8(), cfg.alpha);
        this
    }

    /// Current wave parameters, already clamped.
    pub fn params(&self) -> WaveParams {
        self.params
    }

    /// Progress fraction in `[0, 1]`.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Current phase in `[0, wave_length)`.
    pub fn phase_offset(&self) -> f64 {
        self.phase.offset()
    }

    /// Current show/hide envelope in `[0, 1]`.
    pub fn height_fraction(&self) -> f64 {
        self.height.value()
    }

    /// Whether the height envelope is settled or tweening.
    pub fn height_state(&self) -> HeightState {
        self.height.state()
    }

    /// Active and inactive paint colors.
    pub fn colors(&self) -> ColorState {
        self.colors
    }

    /// Wave opacity, `0..=255`.
    pub fn alpha(&self) -> u8 {
        self.colors.alpha()
    }

    /// Whether the wave is moving.
    pub fn animate(&self) -> bool {
        self.animate
    }

    /// Whether the decay zone is drawn.
    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Bounds used by the most recent draw.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Path built by the most recent draw, in bar-local coordinates.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Register the callback used to request the next frame.
    pub fn set_invalidate_callback(&mut self, f: impl FnMut() + 'static) {
        self.invalidate = Some(Box::new(f));
    }

    /// Drop the callback; [`SquigglyProgress::draw`] still reports [`FrameRequest`].
    pub fn clear_invalidate_callback(&mut self) {
        self.invalidate = None;
    }

    /// Replace all wave parameters at once, clamped into range.
    pub fn set_params(&mut self, params: WaveParams) {
        self.params = params.sanitized();
        self.phase.rewrap(self.params.wave_length);
        self.invalidate();
    }

    /// Full wave period in pixels, clamped to `>= 0`. Non-finite values are ignored.
    ///
    /// Half-waves shorter than [`crate::MIN_HALF_WAVE_PX`] are finer than the raster and draw
    /// as a flat line, as does a wave length of 0.
    pub fn set_wave_length(&mut self, wave_length: f64) {
        if !wave_length.is_finite() {
            return;
        }
        self.params.wave_length = wave_length.max(0.0);
        self.phase.rewrap(self.params.wave_length);
        self.invalidate();
    }

    /// Peak wave height, clamped to `>= 0`.
    pub fn set_line_amplitude(&mut self, amplitude: f64) {
        self.params.line_amplitude = non_negative_or(amplitude, self.params.line_amplitude);
        self.invalidate();
    }

    /// Drift speed in pixels per second. Non-finite values are ignored.
    pub fn set_phase_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.params.phase_speed = speed;
        }
    }

    /// Stroke width shared by the wave and the remainder line.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.params.stroke_width = non_negative_or(width, self.params.stroke_width);
        self.invalidate();
    }

    /// Toggle the decay zone and the dimmed remainder wave.
    pub fn set_transition_enabled(&mut self, enabled: bool) {
        if self.transition_enabled != enabled {
            self.transition_enabled = enabled;
            self.invalidate();
        }
    }

    /// Start or stop the wave. Stopping freezes the phase and flattens the wave; starting
    /// grows it back in.
    pub fn set_animate(&mut self, enabled: bool) {
        if self.animate == enabled {
            return;
        }
        tracing::debug!(enabled, "squiggly animate toggled");
        self.animate = enabled;
        self.phase.reset_time();
        self.last_tick = None;
        self.height.set_visible(enabled);
        self.invalidate();
    }

    /// `None` keeps the current colors.
    pub fn set_tint(&mut self, tint: Option<Rgba8>) {
        if tint.is_none() {
            return;
        }
        self.colors = self.colors.with_tint(tint);
        self.invalidate();
    }

    /// Opacity of the wave; the remainder is scaled down from it.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.colors = self.colors.with_alpha(alpha);
        self.invalidate();
    }

    /// Alpha as a `[0, 1]` opacity.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.colors = self.colors.with_opacity(opacity);
        self.invalidate();
    }

    /// Progress fraction, clamped into `[0, 1]`. NaN is ignored.
    pub fn set_level(&mut self, level: f64) {
        if level.is_nan() {
            return;
        }
        let level = saturate(level);
        if level != self.level {
            self.level = level;
            self.invalidate();
        }
    }

    /// Progress on a `0..=10000` scale.
    pub fn set_level_fixed(&mut self, level: u32) {
        self.set_level(f64::from(level.min(LEVEL_SCALE)) / f64::from(LEVEL_SCALE));
    }

    /// Advance the height tween and (while animating) the phase to `now`, without drawing.
    pub fn advance(&mut self, now: Timestamp) -> FrameRequest {
        let dt = self.last_tick.map_or(0.0, |last| now.millis_since(last));
        self.last_tick = Some(now);
        self.height.tick(dt);

        if self.animate {
            self.phase
                .step(now, self.params.phase_speed, self.params.wave_length);
        }

        if self.animate || self.height.is_animating() {
            FrameRequest::Continue
        } else {
            FrameRequest::Idle
        }
    }

    /// Render one frame into `bounds` on `surface` at host time `now`.
    ///
    /// Invokes the invalidation callback when another frame is needed, and reports the same
    /// through the returned [`FrameRequest`].
    pub fn draw<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        bounds: Rect,
        now: Timestamp,
    ) -> FrameRequest {
        self.bounds = bounds.abs();
        let request = self.advance(now);

        let frame = self.build_frame();
        composite(surface, &frame, &self.path, &self.colors);

        tracing::trace!(
            now = now.0,
            phase = self.phase.offset(),
            height = self.height.value(),
            ?request,
            "squiggly frame"
        );

        if request.needs_more() {
            self.invalidate();
        }
        request
    }

    fn build_frame(&mut self) -> CompositeFrame {
        let WaveParams {
            wave_length,
            line_amplitude,
            stroke_width,
            ..
        } = self.params;
        let width = self.bounds.width();
        let progress_px = width * self.level;
        let wave_px = wave_progress_px(width, self.level, self.transition_enabled);
        let wave_end = if self.transition_enabled {
            width
        } else {
            wave_px
        };

        let profile = AmplitudeProfile::new(
            line_amplitude,
            self.height.value(),
            wave_px,
            wave_length,
            self.transition_enabled,
        );
        let span = WaveSpan::new(self.phase.offset(), wave_length, wave_end);
        build_wave(&mut self.path, span, &profile);

        CompositeFrame {
            bounds: self.bounds,
            progress_px,
            wave_start: span.start,
            wave_length,
            line_amplitude,
            height_fraction: self.height.value(),
            stroke_width,
            transition_enabled: self.transition_enabled,
        }
    }

    fn invalidate(&mut self) {
        if let Some(f) = self.invalidate.as_mut() {
            f();
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/drawable.rs"]
mod tests;
