//! Command registry
//!
//! Owns the commands by method name, dispatches requests and renders help.

use std::collections::BTreeMap;
use std::fmt::Write;

use market_core::{ExError, ExErrorKind, Result};
use serde_json::Value;

use super::{
    Command, ListingItemTemplateAddCommand, ListingItemTemplateGetCommand,
    ListingItemTemplateRemoveCommand, ListingItemTemplateSearchCommand, MarketAddCommand,
    MarketListCommand, MarketRemoveCommand, ProfileAddCommand, ProfileGetCommand,
    ProfileListCommand, ProposalAddCommand, ProposalGetCommand, ProposalListCommand,
    RegisteredCommand, RpcRequest,
};
use crate::services::Services;

#[derive(Default)]
pub struct CommandRegistry<'a> {
    commands: BTreeMap<&'static str, Box<dyn RegisteredCommand + 'a>>,
}

impl<'a> CommandRegistry<'a> {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Registry with every command wired to the given services
    pub fn with_services(services: &'a Services<'_>) -> Self {
        let mut registry = Self::new();
        registry.register(ProfileAddCommand::new(&services.profiles));
        registry.register(ProfileGetCommand::new(&services.profiles));
        registry.register(ProfileListCommand::new(&services.profiles));
        registry.register(MarketAddCommand::new(&services.markets));
        registry.register(MarketListCommand::new(&services.markets));
        registry.register(MarketRemoveCommand::new(&services.markets));
        registry.register(ListingItemTemplateAddCommand::new(&services.templates));
        registry.register(ListingItemTemplateGetCommand::new(&services.templates));
        registry.register(ListingItemTemplateSearchCommand::new(&services.templates));
        registry.register(ListingItemTemplateRemoveCommand::new(&services.templates));
        registry.register(ProposalAddCommand::new(&services.proposals));
        registry.register(ProposalGetCommand::new(&services.proposals));
        registry.register(ProposalListCommand::new(&services.proposals));
        registry
    }

    /// Register a command under its method name, replacing any previous one
    pub fn register<C: Command + 'a>(&mut self, command: C) {
        self.commands.insert(C::METHOD, Box::new(command));
    }

    pub fn get(&self, method: &str) -> Option<&(dyn RegisteredCommand + 'a)> {
        self.commands.get(method).map(|c| c.as_ref())
    }

    /// Method names in sorted order
    pub fn methods(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// # Errors
    /// `MethodNotFound` for an unknown method; otherwise whatever the
    /// command returns.
    pub fn dispatch(&self, request: &RpcRequest) -> Result<Value> {
        let command = self
            .get(request.method.trim())
            .ok_or_else(|| method_not_found(&request.method))?;
        command.dispatch(request)
    }

    /// Help for one method, or a summary of all methods
    ///
    /// # Errors
    /// `MethodNotFound` when `method` names no command.
    pub fn help(&self, method: Option<&str>) -> Result<String> {
        let mut out = String::new();
        match method {
            Some(method) => {
                let command = self.get(method).ok_or_else(|| method_not_found(method))?;
                let _ = writeln!(out, "{}", command.usage());
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", command.description());
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", command.help());
                let _ = writeln!(out);
                let _ = writeln!(out, "Example:");
                let _ = writeln!(out, "    {}", command.example());
            }
            None => {
                let width = self.methods().map(str::len).max().unwrap_or(0);
                for (method, command) in &self.commands {
                    let _ = writeln!(
                        out,
                        "{:width$}  {}",
                        method,
                        command.description(),
                        width = width
                    );
                }
            }
        }
        Ok(out)
    }
}

fn method_not_found(method: &str) -> ExError {
    ExError::new(ExErrorKind::MethodNotFound)
        .with_op("dispatch")
        .with_entity_id(method)
        .with_message(format!("Method not found: {}", method))
}
