//! Money Transfer Service
//!
//! An in-memory account registry with a concurrency-safe transfer engine and
//! a thin HTTP gateway.
//!
//! # Modules
//!
//! - [`money`] - Decimal ↔ minor-unit conversion (all amounts pass through it)
//! - [`account`] - Account cell, per-account lock, and the name registry
//! - [`transfer`] - The atomic two-account transfer engine
//! - [`gateway`] - axum HTTP binding (routes, handlers, DTOs)
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing initialization

pub mod account;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod money;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountView, Registry};
pub use gateway::AppState;
pub use transfer::{TransferEngine, TransferError, TransferRequest, TransferResult};
