//! Account management
//!
//! An [`Account`] is a named balance cell that owns its own lock. The
//! [`Registry`] maps usernames to shared account handles and guards that map
//! with its own, independent lock.
//!
//! Locking discipline: registry lookups complete and release the registry
//! lock before any account lock is taken. Multi-account critical sections are
//! composed from the scoped guards returned by [`Account::lock`].

pub mod error;
pub mod models;
pub mod registry;

pub use error::{AccountError, RegistryError};
pub use models::{Account, AccountView};
pub use registry::Registry;
