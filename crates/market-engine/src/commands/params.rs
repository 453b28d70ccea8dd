//! Positional param coercion
//!
//! RPC params arrive as a flat JSON array. Numbers may be sent as JSON
//! numbers or numeric strings; text must be a JSON string.

use std::str::FromStr;

use market_core::MarketError;
use rust_decimal::Decimal;
use serde_json::Value;

pub fn require_arity(params: &[Value], required: usize) -> Result<(), MarketError> {
    if params.len() < required {
        return Err(MarketError::NotEnoughParams {
            required,
            given: params.len(),
        });
    }
    Ok(())
}

fn invalid(index: usize, field: &str, reason: impl Into<String>) -> MarketError {
    MarketError::InvalidParam {
        index,
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn get<'p>(params: &'p [Value], index: usize, field: &str) -> Result<&'p Value, MarketError> {
    params
        .get(index)
        .ok_or_else(|| invalid(index, field, "missing"))
}

pub fn param_i64(params: &[Value], index: usize, field: &str) -> Result<i64, MarketError> {
    match get(params, index, field)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| invalid(index, field, format!("expected an integer, got {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| invalid(index, field, format!("expected an integer, got {:?}", s))),
        other => Err(invalid(
            index,
            field,
            format!("expected an integer, got {}", other),
        )),
    }
}

/// Text param; a bare number is accepted as its decimal rendering
pub fn param_string(params: &[Value], index: usize, field: &str) -> Result<String, MarketError> {
    match get(params, index, field)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(invalid(index, field, format!("expected text, got {}", other))),
    }
}

pub fn param_decimal(params: &[Value], index: usize, field: &str) -> Result<Decimal, MarketError> {
    let text = match get(params, index, field)? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(invalid(
                index,
                field,
                format!("expected a decimal, got {}", other),
            ))
        }
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| invalid(index, field, format!("expected a decimal, got {:?}", text)))
}

/// Absent or null reads as false
pub fn param_bool(params: &[Value], index: usize, field: &str) -> Result<bool, MarketError> {
    match params.get(index) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            _ => Err(invalid(index, field, format!("expected a flag, got {:?}", s))),
        },
        Some(Value::Number(n)) => match n.as_i64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(invalid(index, field, format!("expected a flag, got {}", n))),
        },
        Some(other) => Err(invalid(index, field, format!("expected a flag, got {}", other))),
    }
}

/// Absent, null and empty text read as `None`; any other text, even
/// whitespace, is kept as given
pub fn optional_string(
    params: &[Value],
    index: usize,
    field: &str,
) -> Result<Option<String>, MarketError> {
    match params.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(invalid(index, field, format!("expected text, got {}", other))),
    }
}
