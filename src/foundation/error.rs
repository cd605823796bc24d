/// Convenience result type used across stripsort.
pub type StripsortResult<T> = Result<T, StripsortError>;

/// Top-level error taxonomy for the fallible surfaces around the engine.
///
/// Sorting itself never fails: empty input is a trivial success and bogo sort's safety
/// limit is reported through [`crate::Outcome`]. Errors only arise while selecting an
/// algorithm or assembling a [`crate::SortConfig`].
#[derive(thiserror::Error, Debug)]
pub enum StripsortError {
    /// Invalid user-provided data (unknown algorithm id, empty strip set, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration values that parse but are out of range.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StripsortError {
    /// Build a [`StripsortError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StripsortError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StripsortError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
