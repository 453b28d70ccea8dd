use rust_decimal::Decimal;

use crate::errors::MarketError;

/// Field-level validation of a request object
///
/// Request objects are validated by the service before anything is written;
/// commands only check arity.
pub trait Validate {
    fn validate(&self) -> Result<(), MarketError>;
}

/// Titles must contain at least one non-whitespace character
pub fn validate_title(title: &str) -> Result<(), MarketError> {
    if title.trim().is_empty() {
        return Err(MarketError::InvalidTitle {
            reason: "Title cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty(field: &str, value: &str) -> Result<(), MarketError> {
    if value.trim().is_empty() {
        return Err(MarketError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub fn validate_price(field: &str, value: Decimal) -> Result<(), MarketError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(MarketError::NegativePrice {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub fn validate_block_range(block_start: i64, block_end: i64) -> Result<(), MarketError> {
    if block_start > block_end {
        return Err(MarketError::InvalidBlockRange {
            block_start,
            block_end,
        });
    }
    Ok(())
}
