//! Ledger error types.

use chama_shared::AppError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The named member has not been added to the ledger.
    #[error("Unknown member: {0}")]
    UnknownMember(String),

    /// A member name is empty after trimming.
    #[error("Member name cannot be empty")]
    EmptyMemberName,
}

impl LedgerError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMember(_) | Self::EmptyMemberName => "INVALID_ARGUMENT",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
