// Shared setup for market-engine integration tests

#![allow(dead_code)]

use market_engine::{CommandRegistry, RpcRequest, RpcResponse, Services};
use rusqlite::Connection;
use serde_json::Value;

pub fn setup_test_db() -> Connection {
    let mut conn = market_store::db::open_in_memory().expect("open in-memory db");
    market_store::migrations::apply_migrations(&mut conn).expect("apply migrations");
    conn
}

/// Run one request against a fresh registry over `conn`
pub fn call(conn: &Connection, method: &str, params: Vec<Value>) -> RpcResponse {
    let services = Services::new(conn);
    let registry = CommandRegistry::with_services(&services);
    market_engine::handle(&registry, &RpcRequest::new(method, params))
}

/// Result of a request expected to succeed
pub fn call_ok(conn: &Connection, method: &str, params: Vec<Value>) -> Value {
    let response = call(conn, method, params);
    assert!(
        !response.is_error(),
        "{} failed: {:?}",
        method,
        response.error
    );
    response.result.unwrap_or(Value::Null)
}

/// Error code of a request expected to fail
pub fn call_err(conn: &Connection, method: &str, params: Vec<Value>) -> i64 {
    let response = call(conn, method, params);
    response
        .error
        .unwrap_or_else(|| panic!("{} unexpectedly succeeded", method))
        .code
}
