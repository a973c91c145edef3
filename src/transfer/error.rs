//! Transfer Error Types

use thiserror::Error;

/// Transfer error types
///
/// The `Display` text of each variant is the message carried by the
/// failure-shaped [`TransferResult`](super::TransferResult) the API returns,
/// so the wording is part of the wire contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    // === Validation Errors ===
    #[error("invalid amount, must be positive")]
    InvalidAmount,

    #[error("cannot transfer to the same account")]
    SameAccount,

    // === Account Errors ===
    #[error("Source account not found")]
    SourceAccountNotFound,

    #[error("Destination account not found")]
    DestinationAccountNotFound,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("amount would overflow destination balance")]
    Overflow,
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::SourceAccountNotFound => "ACCOUNT_NOT_FOUND",
            TransferError::DestinationAccountNotFound => "ACCOUNT_NOT_FOUND",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::Overflow => "OVERFLOW",
        }
    }
}
