//! Gateway request/response DTOs
//!
//! The transfer wire types ([`TransferRequest`](crate::transfer::TransferRequest),
//! [`TransferResult`](crate::transfer::TransferResult)) and the account
//! snapshot ([`AccountView`](crate::account::AccountView)) live with their
//! modules; this file holds the DTOs that exist only at the HTTP boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub username: String,
    pub balance: Decimal,
}

/// Error body for non-transfer failures (unknown account, duplicate name).
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            msg: msg.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
