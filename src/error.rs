//! Error types for parlance.

use thiserror::Error;

/// Result type for parlance operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for parlance operations.
///
/// Well-formed documents never produce errors from the linguistic core:
/// unresolved pronouns, empty documents and documents without nouns are
/// normal outcomes. Errors signal collaborator failures or contract
/// violations by the tagging adapter.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The tagging adapter reported a failure.
    #[error("Tagger error: {0}")]
    Tagger(String),

    /// The tagging adapter broke its output contract (an ancestor index
    /// pointing outside its sentence, non-increasing token indices).
    /// Indicates an upstream bug, not a linguistic edge case; never retried.
    #[error("Tagger contract violation: {0}")]
    ContractViolation(String),

    /// The storage collaborator reported a failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error (lexicon loading).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tagger error.
    pub fn tagger(msg: impl Into<String>) -> Self {
        Error::Tagger(msg.into())
    }

    /// Create a contract violation error.
    pub fn contract_violation(msg: impl Into<String>) -> Self {
        Error::ContractViolation(msg.into())
    }

    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }
}
