//! Marketplace CLI
//!
//! Runs one RPC command against the local store per invocation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "market")]
#[command(about = "Marketplace - profiles, markets, listing templates and proposals", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database path, overrides configuration
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one RPC command and print the response
    Rpc(commands::rpc::RpcArgs),
    /// Show RPC command help
    Help(commands::help::HelpArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = AppConfig::load(cli.config.as_deref(), cli.db.clone())
        .map_err(anyhow::Error::from)
        .and_then(|config| {
            market_core::logging_facility::init(config.profile()?);
            match cli.command {
                Commands::Rpc(args) => commands::rpc::execute(args, &config),
                Commands::Help(args) => commands::help::execute(args),
            }
        });

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
