//! RPC commands
//!
//! A command turns a flat positional param list into a typed request
//! object and hands it to exactly one service call. Arity is checked before
//! anything else so a short request never reaches the service.

pub mod market;
pub mod params;
pub mod profile;
pub mod proposal;
pub mod registry;
pub mod template;

pub use market::{MarketAddCommand, MarketListCommand, MarketRemoveCommand};
pub use profile::{ProfileAddCommand, ProfileGetCommand, ProfileListCommand};
pub use proposal::{ProposalAddCommand, ProposalGetCommand, ProposalListCommand};
pub use registry::CommandRegistry;
pub use template::{
    ListingItemTemplateAddCommand, ListingItemTemplateGetCommand,
    ListingItemTemplateRemoveCommand, ListingItemTemplateSearchCommand,
};

use market_core::{ExError, ExErrorKind, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One RPC call: a method name and its positional params
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            id: None,
            method: method.into(),
            params,
        }
    }

    pub fn with_id(mut self, id: Value) -> Self {
        self.id = Some(id);
        self
    }
}

/// A typed RPC command
pub trait Command {
    type Output: Serialize;

    /// Method name, e.g. `template add`
    const METHOD: &'static str;

    /// Fewest positional params `execute` accepts
    const MIN_PARAMS: usize;

    /// # Errors
    /// `NotEnoughParams` when fewer than `MIN_PARAMS` params are given; any
    /// coercion, validation or service error otherwise.
    fn execute(&self, request: &RpcRequest) -> Result<Self::Output>;

    /// One-line positional signature
    fn usage(&self) -> &'static str;

    /// Per-argument description, one line each
    fn help(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// A literal invocation with sample values
    fn example(&self) -> &'static str;
}

/// Object-safe view of a command used by the registry
pub trait RegisteredCommand {
    fn method(&self) -> &'static str;
    fn min_params(&self) -> usize;
    fn dispatch(&self, request: &RpcRequest) -> Result<Value>;
    fn usage(&self) -> &'static str;
    fn help(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn example(&self) -> &'static str;
}

impl<C: Command> RegisteredCommand for C {
    fn method(&self) -> &'static str {
        C::METHOD
    }

    fn min_params(&self) -> usize {
        C::MIN_PARAMS
    }

    fn dispatch(&self, request: &RpcRequest) -> Result<Value> {
        let output = self.execute(request)?;
        serde_json::to_value(output).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op(C::METHOD)
                .with_message(e.to_string())
        })
    }

    fn usage(&self) -> &'static str {
        Command::usage(self)
    }

    fn help(&self) -> &'static str {
        Command::help(self)
    }

    fn description(&self) -> &'static str {
        Command::description(self)
    }

    fn example(&self) -> &'static str {
        Command::example(self)
    }
}
