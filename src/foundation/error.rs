/// Convenience result type used across artpost.
pub type ArtpostResult<T> = Result<T, ArtpostError>;

/// Top-level error taxonomy used by the processing pipelines.
#[derive(thiserror::Error, Debug)]
pub enum ArtpostError {
    /// Invalid user-provided options or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// An input file could not be read or decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// An output file could not be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem failures outside of image codecs.
    #[error("io error: {0}")]
    Io(String),

    /// Any other propagated failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArtpostError {
    /// Build an [`ArtpostError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArtpostError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an [`ArtpostError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`ArtpostError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
