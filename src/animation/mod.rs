/// Easing functions.
pub mod ease;
/// Show/hide envelope state machine.
pub mod height;
/// Scalar tween value type.
pub mod tween;
