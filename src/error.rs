use thiserror::Error;

use crate::types::Key;

/// Convenience result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error type returned by filters.
///
/// This is a single error enum shared by every filter, the declarative configuration layer and
/// the JSON record codec. Filters never recover from errors internally: whatever a filter (or a
/// caller-supplied key mutator) returns is surfaced unchanged to the caller of `filter`.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A caller-supplied key mutator failed for `key`.
    #[error("key mutation failed for key '{key}': {message}")]
    KeyMutation { key: Key, message: String },

    /// Generic failure raised by caller-defined filters.
    #[error("filter failed: {message}")]
    Failed { message: String },

    /// A declarative filter configuration is invalid.
    #[error("invalid filter config: {message}")]
    Config { message: String },

    /// Malformed JSON (configuration or record input).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON input was well-formed but does not describe a record.
    #[error("invalid record: {message}")]
    InvalidRecord { message: String },
}

impl FilterError {
    /// Shorthand for [`FilterError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Shorthand for [`FilterError::KeyMutation`].
    pub fn key_mutation(key: &Key, message: impl Into<String>) -> Self {
        Self::KeyMutation {
            key: key.clone(),
            message: message.into(),
        }
    }
}
