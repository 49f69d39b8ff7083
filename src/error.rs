//! Errors raised while converting an export.

use thiserror::Error;

/// Failure modes of [`crate::format`].
///
/// Everything not listed here degrades gracefully: absent fields render as
/// nothing and an empty document renders the "No workout found!" message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// An exercise header has no `Sets <N>` count.
    #[error("exercise header {header:?} has no `Sets <N>` count")]
    MissingSetCount { header: String },
    /// Strict mode only: the set-data tokens do not split evenly into rows.
    #[error("{tokens} set-data tokens in {data:?} do not divide into {sets} sets")]
    UnevenSetData {
        data: String,
        tokens: usize,
        sets: usize,
    },
}

/// Result alias for the conversion pipeline.
pub type Result<T> = std::result::Result<T, FormatError>;
