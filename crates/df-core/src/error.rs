//! Error types for the reading engine.

use thiserror::Error;

/// Result type for reading engine operations.
pub type DfResult<T> = Result<T, DfError>;

/// Errors that can occur while loading the catalog, composing a reading,
/// or persisting state.
#[derive(Debug, Error)]
pub enum DfError {
    /// Free-text input was empty or only whitespace.
    #[error("input is empty")]
    EmptyInput,

    /// The dream catalog has no `default` entry.
    #[error("catalog has no \"default\" dream entry")]
    MissingDefault,

    /// Two catalog entries share an identifier.
    #[error("duplicate catalog entry: \"{0}\"")]
    DuplicateSubject(String),

    /// A catalog entry is missing a field the composer needs, or carries an
    /// out-of-range value.
    #[error("invalid catalog entry \"{id}\": {reason}")]
    InvalidSubject {
        /// Identifier of the offending entry.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A required catalog collection is empty.
    #[error("catalog section is empty: {0}")]
    EmptyCatalog(&'static str),

    /// No zodiac sign matches the requested name or date.
    #[error("unknown zodiac sign: {0}")]
    UnknownZodiac(String),

    /// A fortune was requested without a sign and none was saved.
    #[error("no zodiac sign selected")]
    NoZodiacSelected,

    /// The key-value backend refused a read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// File system error from a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in catalog data or persisted state.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DfError {
    /// Build an [`DfError::InvalidSubject`] from anything string-like.
    pub fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSubject {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
