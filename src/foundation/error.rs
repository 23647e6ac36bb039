/// Convenience result type used across squiggly.
pub type SquigglyResult<T> = Result<T, SquigglyError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The per-frame engine never fails: setters clamp and degenerate geometry is normalized.
/// Errors only surface while loading configuration or creating raster surfaces.
#[derive(thiserror::Error, Debug)]
pub enum SquigglyError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while creating or reading back a raster surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SquigglyError {
    /// Build a [`SquigglyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SquigglyError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SquigglyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
