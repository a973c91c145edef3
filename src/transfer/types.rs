//! Transfer request/result types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::AccountView;

use super::error::TransferError;

/// A request to move `amount` from one account to another.
///
/// Wire shape: `{"from": string, "to": string, "amount": number}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

/// Outcome of a transfer, success or failure.
///
/// This is the canonical description of what happened: on success it carries
/// post-transfer snapshots of both accounts; on failure the snapshots are
/// absent and `message` carries the rejection reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<AccountView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<AccountView>,
}

impl TransferResult {
    /// Success result with both post-transfer snapshots.
    pub fn completed(from: AccountView, to: AccountView) -> Self {
        Self {
            success: true,
            message: "Transfer completed successfully".to_string(),
            from: Some(from),
            to: Some(to),
        }
    }

    /// Failure-shaped result carrying the rejection reason.
    pub fn rejected(err: &TransferError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            from: None,
            to: None,
        }
    }
}
