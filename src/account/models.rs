//! Account model and single-account operations.
//!
//! The balance lives behind a `Mutex` owned by the account itself, so one
//! account can be mutated in isolation while a higher-level operation (the
//! transfer engine) can hold guards on two accounts across a multi-step
//! critical section.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

use super::error::AccountError;

/// A named balance cell with its own exclusive-access lock.
///
/// # Invariants
///
/// - `username` is immutable after creation
/// - the balance (u64 minor units) is only ever mutated while the account's
///   lock is held by the mutating operation
/// - the balance never goes below zero: every debit is validated under the
///   lock before it is applied
#[derive(Debug)]
pub struct Account {
    username: String,
    balance: Mutex<u64>,
}

impl Account {
    /// Create an account with an initial balance in minor units.
    pub fn new(username: impl Into<String>, initial_balance: u64) -> Self {
        Self {
            username: username.into(),
            balance: Mutex::new(initial_balance),
        }
    }

    /// Read-only access to the account name.
    #[inline(always)]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Deposit funds into the account.
    ///
    /// # Errors
    /// * `InvalidAmount` - if the amount is zero
    /// * `Overflow` - if the balance would overflow
    pub fn deposit(&self, amount: u64) -> Result<(), AccountError> {
        if amount == 0 {
            return Err(AccountError::InvalidAmount);
        }
        let mut balance = self.lock();
        *balance = balance.checked_add(amount).ok_or(AccountError::Overflow)?;
        Ok(())
    }

    /// Withdraw funds from the account.
    ///
    /// The funds check happens under the lock, so a concurrent withdraw can
    /// never drive the balance below zero.
    ///
    /// # Errors
    /// * `InvalidAmount` - if the amount is zero
    /// * `InsufficientFunds` - if the amount exceeds the current balance
    pub fn withdraw(&self, amount: u64) -> Result<(), AccountError> {
        if amount == 0 {
            return Err(AccountError::InvalidAmount);
        }
        let mut balance = self.lock();
        *balance = balance
            .checked_sub(amount)
            .ok_or(AccountError::InsufficientFunds)?;
        Ok(())
    }

    /// Current balance in minor units.
    ///
    /// Takes and releases the lock around the read, so the value is a
    /// consistent snapshot, never a balance mid-mutation.
    pub fn balance(&self) -> u64 {
        *self.lock()
    }

    /// Acquire this account's lock for external composition.
    ///
    /// The returned guard releases on drop, on every exit path, so a caller
    /// holding guards on two accounts cannot leak a lock through an early
    /// return.
    ///
    /// A poisoned lock is recovered rather than propagated: mutations through
    /// the guard are single assignments validated up front, so a panicking
    /// holder cannot have left a half-applied update behind.
    pub fn lock(&self) -> MutexGuard<'_, u64> {
        self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot the account for the API: username plus decimal balance.
    pub fn snapshot(&self) -> AccountView {
        AccountView {
            username: self.username.clone(),
            balance: money::to_decimal(self.balance()),
        }
    }
}

/// Client-facing account state: `{"username": ..., "balance": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub username: String,
    pub balance: Decimal,
}
