//! Money Conversion Module
//!
//! Unified conversion between the internal u64 minor-unit representation and
//! the client-facing `Decimal` representation. All conversions MUST go through
//! this module.
//!
//! ## Internal Representation
//! - All balances and amounts are stored as `u64` minor units (cents)
//! - The scale factor is `10^SCALE` (10^2, so 1.00 = 100 minor units)
//!
//! ## Usage
//! ```rust
//! use money_transfer::money::{to_decimal, to_minor_units};
//! use rust_decimal::Decimal;
//!
//! // Client sends 1.5
//! let internal = to_minor_units(Decimal::new(15, 1)).unwrap();
//! assert_eq!(internal, 150);
//!
//! // Display balance to client
//! assert_eq!(to_decimal(150), Decimal::new(150, 2));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Fractional digits carried by every balance and amount.
pub const SCALE: u32 = 2;

/// Minor units per whole currency unit (`10^SCALE`).
pub const MINOR_UNITS_PER_UNIT: u64 = 100;

// ============================================================================
// Error Types
// ============================================================================

/// Money conversion errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("amount must be positive")]
    NotPositive,

    #[error("amount must not be negative")]
    Negative,

    #[error("amount precision exceeds 2 decimal places")]
    PrecisionOverflow,

    #[error("amount too large, would overflow")]
    Overflow,
}

// ============================================================================
// Parse: Client → Internal (Decimal → u64)
// ============================================================================

/// Convert a client amount to internal minor units.
///
/// # Errors
/// * `NotPositive` - if the amount is zero or negative
/// * `PrecisionOverflow` - if the amount has more than [`SCALE`] fractional digits
/// * `Overflow` - if the result would overflow u64
pub fn to_minor_units(amount: Decimal) -> Result<u64, MoneyError> {
    if amount <= Decimal::ZERO {
        return Err(MoneyError::NotPositive);
    }
    scale_up(amount)
}

/// Convert a client amount to internal minor units, permitting zero.
///
/// Used for initial balances, where an empty account is legal.
///
/// # Errors
/// * `Negative` - if the amount is below zero
/// * `PrecisionOverflow` / `Overflow` - as for [`to_minor_units`]
pub fn to_minor_units_allow_zero(amount: Decimal) -> Result<u64, MoneyError> {
    if amount < Decimal::ZERO {
        return Err(MoneyError::Negative);
    }
    scale_up(amount)
}

fn scale_up(amount: Decimal) -> Result<u64, MoneyError> {
    let scaled = amount
        .checked_mul(Decimal::from(MINOR_UNITS_PER_UNIT))
        .ok_or(MoneyError::Overflow)?;
    if !scaled.fract().is_zero() {
        return Err(MoneyError::PrecisionOverflow);
    }
    scaled.to_u64().ok_or(MoneyError::Overflow)
}

// ============================================================================
// Format: Internal → Client (u64 → Decimal)
// ============================================================================

/// Convert internal minor units back to the client-facing decimal value.
///
/// Exact inverse of [`to_minor_units`]: every u64 fits in Decimal's 96-bit
/// mantissa, so this cannot fail or round.
pub fn to_decimal(minor_units: u64) -> Decimal {
    Decimal::from_i128_with_scale(minor_units as i128, SCALE)
}
