//! geotimelog library root.
//! Exposes the CLI parser, the high-level run() function, the presence
//! engine (`core`) and the input/output collaborators around it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Intervals { .. } => cli::commands::intervals::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (defaults when the file is missing)
    let cfg_path = Config::resolve_path(cli.config.as_deref());
    let cfg = match &cli.command {
        // `init` must work even if the existing file is broken
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&cfg_path)?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
