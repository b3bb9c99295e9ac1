use chrono::NaiveTime;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ShiftError, ValidationError};

/// Largest amount a single ledger entry may carry, in whole units.
/// Keeps every sum over a user's ledger far below `Decimal::MAX`.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

pub fn max_amount() -> Decimal {
    Decimal::from(MAX_AMOUNT_UNITS)
}

/// Parses the amount field of the ledger form.
///
/// A blank field is zero. A comma is taken as the decimal separator when the
/// text has no dot, so `"12,50"` reads as 12.50. Amounts above
/// [`max_amount`] are rejected.
pub fn parse_amount(text: &str) -> Result<Decimal, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let amount = Decimal::from_str(&normalized)
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;

    if amount.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if amount.is_sign_negative() {
        return Err(ValidationError::NegativeAmount(trimmed.to_string()));
    }
    if amount > max_amount() {
        return Err(ValidationError::AmountTooLarge(trimmed.to_string()));
    }

    Ok(amount)
}

/// Parses a time-of-day field. Blank means the field was left empty.
pub fn parse_time_of_day(text: &str) -> Result<Option<NaiveTime>, ShiftError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| ShiftError::InvalidTime(trimmed.to_string()))
}
