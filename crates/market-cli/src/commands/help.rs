//! Help command
//!
//! Usage: market help [<resource> <action>]

use clap::Args;
use market_engine::{CommandRegistry, Services};

#[derive(Debug, Args)]
pub struct HelpArgs {
    /// Method words, e.g. `template add`; omit for a summary
    pub method: Vec<String>,
}

pub fn execute(args: HelpArgs) -> anyhow::Result<i32> {
    // Help only needs command metadata; an in-memory store backs the registry
    let conn = market_store::db::open_in_memory()?;
    let services = Services::new(&conn);
    let registry = CommandRegistry::with_services(&services);

    let method = args.method.join(" ");
    let text = registry.help((!method.is_empty()).then_some(method.as_str()))?;
    print!("{}", text);
    Ok(0)
}
