//! Squiggly is a time-driven renderer for an animated wavy progress bar.
//!
//! The filled part of the bar is a sine-like wave that drifts over time and decays into a
//! flat line around the progress point; the wave's height grows in and flattens out with a
//! short tween when animation is toggled. Hosts drive it frame by frame:
//!
//! - Configure a [`SquigglyProgress`] (directly or from a [`ProgressConfig`])
//! - Call [`SquigglyProgress::draw`] with a [`DrawSurface`] once per frame
//! - Keep scheduling frames while it returns [`FrameRequest::Continue`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves, tweens and the show/hide height animator.
pub mod animation;
/// JSON configuration of a progress indicator.
pub mod config;
/// The [`SquigglyProgress`] renderer instance.
pub mod drawable;
mod foundation;
/// Tint parsing and the derived paint colors.
pub mod paint;
/// Drawing surfaces and the frame compositor.
pub mod render;
/// Wave geometry: parameters, phase, amplitude envelope and path building.
pub mod wave;

pub use crate::foundation::core::{
    Affine, BezPath, Point, Rect, Rgba8, Rgba8Premul, Timestamp, Vec2,
};
pub use crate::foundation::error::{SquigglyError, SquigglyResult};
pub use crate::foundation::math::{lerp, lerp_inverse, lerp_inverse_saturate, saturate};

pub use crate::animation::ease::Ease;
pub use crate::animation::height::{HeightAnimator, HeightState};
pub use crate::animation::tween::{Tween, TweenStep, TweenTiming};
pub use crate::config::ProgressConfig;
pub use crate::drawable::{FrameRequest, LEVEL_SCALE, SquigglyProgress};
pub use crate::paint::color::TintDef;
pub use crate::paint::tint::{ColorState, DISABLED_ALPHA};
pub use crate::render::compositor::{CompositeFrame, composite};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::recording::{DrawOp, RecordedDraw, RecordingSurface};
pub use crate::render::surface::{DrawSurface, SaveGuard, StrokePaint};
pub use crate::wave::amplitude::{AmplitudeProfile, wave_progress_px};
pub use crate::wave::params::{
    MATCHED_WAVE_ENDPOINT, MIN_WAVE_ENDPOINT, TRANSITION_PERIODS, WaveParams,
};
pub use crate::wave::path::{
    MAX_WAVE_SEGMENTS, MIN_HALF_WAVE_PX, SINE_CONTROL_RATIO, WaveSpan, build_wave,
};
pub use crate::wave::phase::{PhaseClock, advance_phase, wrap_phase};
