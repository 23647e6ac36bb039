/// Opaque tint as configured.
pub mod color;
/// Active and inactive colors derived from tint and alpha.
pub mod tint;
