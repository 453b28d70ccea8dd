//! RPC boundary
//!
//! Dispatches a request through the registry and turns the outcome into a
//! JSON-RPC style response. Every `ExError` kind maps to one numeric code.

use std::time::Instant;

use market_core::{log_op_end, log_op_error, log_op_start, ExError, ExErrorKind};
use market_core_types::schema::{FIELD_ENTITY_ID, FIELD_KIND_CODE, FIELD_REQUEST_ID};
use market_core_types::{RequestContext, RequestId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::commands::{CommandRegistry, RpcRequest};

pub const INVALID_PARAMS: i64 = -32602;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INTERNAL_ERROR: i64 = -32603;
pub const NOT_FOUND: i64 = -32004;
pub const ALREADY_EXISTS: i64 = -32009;
pub const DATABASE_ERROR: i64 = -32010;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Response code for an error kind
pub fn error_code(kind: ExErrorKind) -> i64 {
    match kind {
        ExErrorKind::NotEnoughParams | ExErrorKind::InvalidInput | ExErrorKind::MissingField => {
            INVALID_PARAMS
        }
        ExErrorKind::MethodNotFound => METHOD_NOT_FOUND,
        ExErrorKind::NotFound => NOT_FOUND,
        ExErrorKind::AlreadyExists => ALREADY_EXISTS,
        ExErrorKind::Database | ExErrorKind::Persistence => DATABASE_ERROR,
        ExErrorKind::Serialization | ExErrorKind::Io | ExErrorKind::Config | ExErrorKind::Internal => {
            INTERNAL_ERROR
        }
    }
}

impl From<&ExError> for RpcError {
    fn from(err: &ExError) -> Self {
        let mut data = json!({});
        data[FIELD_KIND_CODE] = json!(err.code());
        if let Some(entity_id) = err.entity_id() {
            data[FIELD_ENTITY_ID] = json!(entity_id);
        }
        if let Some(request_id) = err.request_id() {
            data[FIELD_REQUEST_ID] = json!(request_id.as_str());
        }
        Self {
            code: error_code(err.kind()),
            message: err.message().to_string(),
            data,
        }
    }
}

/// Handle one request end to end
///
/// A string request id is reused as the correlation id; otherwise a fresh
/// one is generated.
pub fn handle(registry: &CommandRegistry<'_>, request: &RpcRequest) -> RpcResponse {
    let context = match &request.id {
        Some(Value::String(id)) => RequestContext::with_request_id(RequestId::from_string(id)),
        _ => RequestContext::new(),
    };
    let request_id = context.request_id.as_str();
    let method = request.method.as_str();

    let started = Instant::now();
    log_op_start!("rpc_handle", method = method, request_id = request_id);
    let outcome = registry.dispatch(request);
    let duration_ms = started.elapsed().as_millis() as u64;

    let id = request.id.clone().unwrap_or(Value::Null);
    match outcome {
        Ok(result) => {
            log_op_end!("rpc_handle", duration_ms = duration_ms, method = method);
            RpcResponse {
                jsonrpc: "2.0".to_string(),
                id,
                result: Some(result),
                error: None,
            }
        }
        Err(err) => {
            let err = err.with_request_id(context.request_id.clone());
            log_op_error!("rpc_handle", err, duration_ms = duration_ms, method = method);
            RpcResponse {
                jsonrpc: "2.0".to_string(),
                id,
                result: None,
                error: Some(RpcError::from(&err)),
            }
        }
    }
}
