//! Marketplace Engine - services, RPC commands and the RPC boundary
//!
//! Requests flow through four layers:
//!
//! ```text
//! RpcRequest -> Command (arity, positional params -> request object)
//!            -> Service (validation, orchestration)
//!            -> Repository (lookup semantics, error translation)
//!            -> DataMapper (SQL)
//! ```
//!
//! Collaborators are passed explicitly: services borrow a connection,
//! commands borrow a service, and the registry owns the commands.

pub mod commands;
pub mod rpc;
pub mod services;

pub use commands::{CommandRegistry, RpcRequest};
pub use rpc::{handle, RpcError, RpcResponse};
pub use services::Services;
