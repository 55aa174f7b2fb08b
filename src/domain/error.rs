//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations.
///
/// The `Display` text of the two rejection kinds is the exact message shown
/// to the user on stdout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid Input")]
    InvalidInput { input: String },

    #[error("Error: Too many numbers requested, system cannot allocate memory.")]
    AllocationFailure { requested: usize },

    #[error("value out of range 0 - 999: {0}")]
    ValueOutOfRange(u16),

    #[error("unknown sort strategy: {0} (expected 'bubble' or 'builtin')")]
    UnknownSortStrategy(String),
}

impl DomainError {
    /// True for errors that end the program normally after printing their message.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidInput { .. } | DomainError::AllocationFailure { .. }
        )
    }
}
