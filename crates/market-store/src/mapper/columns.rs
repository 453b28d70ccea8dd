//! Column conversions shared by the mappers

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::corrupt_column;

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

pub fn decimal_text(value: &Decimal) -> String {
    value.to_string()
}

pub fn parse_decimal(column: &str, text: &str) -> rusqlite::Result<Decimal> {
    Decimal::from_str(text).map_err(|_| corrupt_column(column, text))
}

/// Parse a text column holding an enum written with `as_str()`
pub fn parse_enum<T: FromStr>(column: &str, text: &str) -> rusqlite::Result<T> {
    text.parse().map_err(|_| corrupt_column(column, text))
}
