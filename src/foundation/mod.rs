/// Core value types.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Scalar interpolation helpers.
pub mod math;
