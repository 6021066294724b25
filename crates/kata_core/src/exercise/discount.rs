//! Tiered discount calculator.
//!
//! # Invariants
//! - Tier boundaries are inclusive on the upper end: exactly 1000 gets no
//!   discount, exactly 5000 gets 10 %.

use thiserror::Error;

const NO_DISCOUNT_LIMIT: f64 = 1000.0;
const TEN_PERCENT_LIMIT: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DiscountError {
    #[error("amount must be a finite, non-negative number, got {0}")]
    InvalidAmount(f64),
}

/// Returns the discount rate for `amount` as a fraction (`0.1` is 10 %).
///
/// # Errors
/// - `DiscountError::InvalidAmount` for negative, NaN or infinite amounts.
pub fn discount_rate(amount: f64) -> Result<f64, DiscountError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DiscountError::InvalidAmount(amount));
    }

    let rate = if amount <= NO_DISCOUNT_LIMIT {
        0.0
    } else if amount <= TEN_PERCENT_LIMIT {
        0.1
    } else {
        0.2
    };
    Ok(rate)
}

/// Applies the tier discount to `amount`.
pub fn discounted_price(amount: f64) -> Result<f64, DiscountError> {
    let rate = discount_rate(amount)?;
    Ok(amount * (1.0 - rate))
}
