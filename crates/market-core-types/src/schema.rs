//! Canonical schema constants for structured logging
//!
//! Every log line emitted through the logging macros uses these keys.

// Fields every operation event carries
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Error fields on end_error events
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Keys of the RPC error `data` object
pub const FIELD_KIND_CODE: &str = "kind_code";
pub const FIELD_ENTITY_ID: &str = "entity_id";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
