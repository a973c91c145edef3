//! HTTP handlers for accounts and transfers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::account::AccountView;
use crate::money;
use crate::transfer::{TransferRequest, TransferResult};

use super::state::AppState;
use super::types::{CreateAccountRequest, ErrorResponse, HealthResponse};

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /accounts
pub async fn list_accounts(State(state): State<Arc<AppState>>) -> Json<Vec<AccountView>> {
    let accounts = state
        .registry
        .list()
        .iter()
        .map(|account| account.snapshot())
        .collect();
    Json(accounts)
}

/// GET /accounts/{username}
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<AccountView>, (StatusCode, Json<ErrorResponse>)> {
    match state.registry.lookup(&username) {
        Some(account) => Ok(Json(account.snapshot())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("ACCOUNT_NOT_FOUND", "account not found")),
        )),
    }
}

/// POST /accounts
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountView>), (StatusCode, Json<ErrorResponse>)> {
    // 1. Validate the initial balance (zero is a legal starting point)
    let initial_balance = money::to_minor_units_allow_zero(req.balance).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("INVALID_AMOUNT", e.to_string())),
        )
    })?;

    // 2. Register the account
    let account = state
        .registry
        .create(&req.username, initial_balance)
        .map_err(|e| {
            (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("ACCOUNT_EXISTS", e.to_string())),
            )
        })?;

    tracing::info!("Created account {}", account.username());

    // 3. Return the created snapshot
    Ok((StatusCode::CREATED, Json(account.snapshot())))
}

/// POST /transfer
///
/// Business failures come back as 400 with a failure-shaped
/// [`TransferResult`] carrying the engine's message; the result body, not the
/// status code alone, is the canonical description of what happened.
pub async fn transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransferRequest>,
) -> (StatusCode, Json<TransferResult>) {
    match state.engine.transfer(&req) {
        Ok(result) => {
            tracing::info!("Transfer {} -> {} completed", req.from, req.to);
            (StatusCode::OK, Json(result))
        }
        Err(err) => {
            tracing::warn!(
                "Transfer {} -> {} rejected: {} ({})",
                req.from,
                req.to,
                err,
                err.code()
            );
            (StatusCode::BAD_REQUEST, Json(TransferResult::rejected(&err)))
        }
    }
}
