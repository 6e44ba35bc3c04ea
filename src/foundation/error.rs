/// Convenience result type used across folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy used by library APIs.
///
/// Contact-form validation problems are not errors in this sense; they are
/// reported as [`FieldErrors`](crate::FieldErrors) values and rendered inline.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid configuration or caller-provided input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Reference to content that does not exist in the static tables.
    #[error("content error: {0}")]
    Content(String),

    /// Durable key-value store failures. Preference stores swallow these.
    #[error("storage error: {0}")]
    Storage(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`FolioError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
