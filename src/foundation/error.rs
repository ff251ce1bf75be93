/// Convenience result type used across the crate.
pub type GridResult<T> = Result<T, GridError>;

/// Top-level error taxonomy used by the generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Canvas smaller than 3x3 on either axis.
    #[error("invalid canvas size: {0}")]
    InvalidCanvasSize(String),

    /// Density that cannot be turned into a finite attempt count.
    #[error("invalid density: {0}")]
    InvalidDensity(String),

    /// Interval whose start lies after its end.
    #[error("invalid span: {0}")]
    InvalidSpan(String),

    /// Errors when serializing or deserializing settings or output.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridError {
    /// Build a [`GridError::InvalidCanvasSize`] value.
    pub fn invalid_canvas_size(msg: impl Into<String>) -> Self {
        Self::InvalidCanvasSize(msg.into())
    }

    /// Build a [`GridError::InvalidDensity`] value.
    pub fn invalid_density(msg: impl Into<String>) -> Self {
        Self::InvalidDensity(msg.into())
    }

    /// Build a [`GridError::InvalidSpan`] value.
    pub fn invalid_span(msg: impl Into<String>) -> Self {
        Self::InvalidSpan(msg.into())
    }

    /// Build a [`GridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
