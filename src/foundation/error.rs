/// Convenience result type used across bitsprite.
pub type BitSpriteResult<T> = Result<T, BitSpriteError>;

/// Top-level error taxonomy used by the rendering APIs.
///
/// Configuration mistakes (bad sheet width, bad upscale, bad hex colors) never surface here; they
/// are replaced by defaults when [`SheetConfig::resolve`](crate::SheetConfig::resolve) runs.
#[derive(thiserror::Error, Debug)]
pub enum BitSpriteError {
    /// Structurally invalid input (empty template, mismatched role buffer, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// The template bytes could not be decoded into pixels.
    #[error("decode error: {0}")]
    Decode(String),

    /// Reading a template or writing an output image failed.
    #[error("io error: {0}")]
    Io(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BitSpriteError {
    /// Build a [`BitSpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BitSpriteError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`BitSpriteError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`BitSpriteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
