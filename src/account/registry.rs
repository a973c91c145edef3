//! In-memory account registry.
//!
//! Maps usernames to shared [`Account`] handles. The map has its own
//! `RwLock`, independent of any account's lock; every operation here releases
//! the registry lock before the caller touches an account lock, so the two
//! lock layers never nest.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::error::RegistryError;
use super::models::Account;

/// Name → account mapping for the lifetime of the process.
///
/// # Invariant
///
/// Each username maps to at most one [`Account`] instance, forever. Lookups
/// always hand back a clone of the same `Arc`, so locking the returned
/// account serializes correctly against every other operation on it.
#[derive(Debug, Default)]
pub struct Registry {
    accounts: RwLock<HashMap<String, Arc<Account>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new account with an initial balance in minor units.
    ///
    /// # Errors
    /// * `AlreadyExists` - if the username is already registered
    pub fn create(
        &self,
        username: &str,
        initial_balance: u64,
    ) -> Result<Arc<Account>, RegistryError> {
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if accounts.contains_key(username) {
            return Err(RegistryError::AlreadyExists);
        }
        let account = Arc::new(Account::new(username, initial_balance));
        accounts.insert(username.to_string(), account.clone());
        Ok(account)
    }

    /// Look up an account by username.
    ///
    /// The registry lock is released before this returns; callers take
    /// account locks only after the lookup completes.
    pub fn lookup(&self, username: &str) -> Option<Arc<Account>> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(username)
            .cloned()
    }

    /// All accounts, ordered by username for deterministic listings.
    pub fn list(&self) -> Vec<Arc<Account>> {
        let mut accounts: Vec<Arc<Account>> = self
            .accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.username().cmp(b.username()));
        accounts
    }

    /// Sum of all balances in minor units.
    ///
    /// Collects the handles first so no account lock is taken while the
    /// registry lock is held. The sum is exact only when no transfers are in
    /// flight; concurrent tests quiesce before calling it.
    pub fn total_balance(&self) -> u64 {
        self.list().iter().map(|account| account.balance()).sum()
    }
}
