use thiserror::Error;

/// Raised when a raw string fails validation, at construction or on
/// reassignment. Never raised lazily during query operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSequence {
    #[error("Sequence is invalid. That's not DNA.")]
    NotDna,

    #[error("Sequence is invalid. That's not an open reading frame.")]
    NotReadingFrame,
}
