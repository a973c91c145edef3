//! The transfer engine: validation, deadlock-free locking, atomic mutation.

use std::sync::Arc;

use crate::account::{AccountView, Registry};
use crate::money;

use super::error::TransferError;
use super::types::{TransferRequest, TransferResult};

/// Executes atomic transfers against the account registry.
///
/// Cheap to clone; clones share the same registry.
#[derive(Debug, Clone)]
pub struct TransferEngine {
    registry: Arc<Registry>,
}

impl TransferEngine {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Move `req.amount` from `req.from` to `req.to`.
    ///
    /// Validation short-circuits before any lock is taken, in a fixed order:
    /// amount, self-transfer, source lookup, destination lookup. The
    /// authoritative funds check happens once both account locks are held.
    ///
    /// Either both balance changes apply or neither does; a failed transfer
    /// leaves both accounts exactly as they were.
    ///
    /// # Errors
    /// * `InvalidAmount` - amount is not a positive value with at most two
    ///   fractional digits
    /// * `SameAccount` - source and destination name the same account
    /// * `SourceAccountNotFound` / `DestinationAccountNotFound`
    /// * `InsufficientFunds` - source balance below the amount at lock time
    /// * `Overflow` - destination balance cannot hold the amount
    pub fn transfer(&self, req: &TransferRequest) -> Result<TransferResult, TransferError> {
        // 1. Validate the amount before anything else
        let amount =
            money::to_minor_units(req.amount).map_err(|_| TransferError::InvalidAmount)?;

        // 2. Reject self-transfers
        if req.from == req.to {
            return Err(TransferError::SameAccount);
        }

        // 3. Resolve both accounts. The registry lock is taken and released
        //    inside each lookup, never across an account lock.
        let from = self
            .registry
            .lookup(&req.from)
            .ok_or(TransferError::SourceAccountNotFound)?;
        let to = self
            .registry
            .lookup(&req.to)
            .ok_or(TransferError::DestinationAccountNotFound)?;

        // 4. Lock both accounts in lexicographic username order. Every
        //    transfer orders the pair the same way, whichever side is the
        //    source, so a reversed acquisition of the same pair cannot exist
        //    and circular wait is structurally impossible.
        let from_is_first = from.username() < to.username();
        let (first, second) = if from_is_first {
            (&from, &to)
        } else {
            (&to, &from)
        };
        let first_guard = first.lock();
        let second_guard = second.lock();
        let (mut from_balance, mut to_balance) = if from_is_first {
            (first_guard, second_guard)
        } else {
            (second_guard, first_guard)
        };

        // 5. Authoritative funds check, now that both locks are held. The
        //    balance may have changed between lookup and lock acquisition.
        let debited = from_balance
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientFunds)?;
        let credited = to_balance
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;

        // 6. Apply both sides inside the same critical section. Both guards
        //    drop on return, on every path out of this function.
        *from_balance = debited;
        *to_balance = credited;

        Ok(TransferResult::completed(
            AccountView {
                username: from.username().to_string(),
                balance: money::to_decimal(*from_balance),
            },
            AccountView {
                username: to.username().to_string(),
                balance: money::to_decimal(*to_balance),
            },
        ))
    }
}
