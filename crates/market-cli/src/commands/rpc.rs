//! RPC command
//!
//! Usage: market rpc <resource> <action> [params...]

use anyhow::Context;
use clap::Args;
use market_engine::{CommandRegistry, RpcRequest, Services};
use serde_json::Value;

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct RpcArgs {
    /// Resource, e.g. `template`
    pub resource: String,

    /// Action, e.g. `add`
    pub action: String,

    /// Positional params, passed through as text
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub params: Vec<String>,
}

/// Read one CLI word as a param
///
/// Words stay text; commands coerce ids, flags and prices from their text
/// so titles and decimals reach them exactly as typed.
pub fn parse_param(raw: &str) -> Value {
    Value::String(raw.to_string())
}

/// Execute an RPC call; returns the process exit code
pub fn execute(args: RpcArgs, config: &AppConfig) -> anyhow::Result<i32> {
    let conn = market_store::db::open_migrated(&config.database_path).with_context(|| {
        format!(
            "failed to open database at {}",
            config.database_path.display()
        )
    })?;

    let services = Services::new(&conn);
    let registry = CommandRegistry::with_services(&services);
    let request = RpcRequest::new(
        format!("{} {}", args.resource, args.action),
        args.params.iter().map(|p| parse_param(p)).collect(),
    );

    let response = market_engine::handle(&registry, &request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(if response.is_error() { 2 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_engine::commands::params::{param_bool, param_decimal, param_i64, param_string};
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    fn params(words: &[&str]) -> Vec<Value> {
        words.iter().map(|w| parse_param(w)).collect()
    }

    #[test]
    fn test_parse_param_keeps_text() {
        assert_eq!(parse_param("1"), json!("1"));
        assert_eq!(parse_param("0.25"), json!("0.25"));
        assert_eq!(parse_param("TEST-MARKET"), json!("TEST-MARKET"));
        assert_eq!(parse_param(""), json!(""));
    }

    #[test]
    fn test_numeric_looking_titles_are_not_rewritten() {
        let params = params(&["1.50", "1e3", "007"]);
        assert_eq!(param_string(&params, 0, "title").unwrap(), "1.50");
        assert_eq!(param_string(&params, 1, "title").unwrap(), "1e3");
        assert_eq!(param_string(&params, 2, "title").unwrap(), "007");
    }

    #[test]
    fn test_prices_keep_full_precision() {
        let params = params(&["0.123456789012345678", "12345678901234567890.5"]);
        assert_eq!(
            param_decimal(&params, 0, "base_price").unwrap(),
            Decimal::from_str("0.123456789012345678").unwrap()
        );
        assert_eq!(
            param_decimal(&params, 1, "base_price").unwrap(),
            Decimal::from_str("12345678901234567890.5").unwrap()
        );
    }

    #[test]
    fn test_ids_and_flags_coerce_from_text() {
        let params = params(&["42", "true"]);
        assert_eq!(param_i64(&params, 0, "profile_id"), Ok(42));
        assert_eq!(param_bool(&params, 1, "default"), Ok(true));
    }
}
