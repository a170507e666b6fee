//! dlverify library root.
//! Exposes the CLI parser, the high-level run() function, the fetch
//! pipeline and the report aggregation.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod geotab;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Fetch { .. } => cli::commands::fetch::handle(cli, cfg).await,
        Commands::Report { .. } => cli::commands::report::handle(cli),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg).await,
        Commands::Drivers { .. } => cli::commands::drivers::handle(cli, cfg).await,
        Commands::Groups { .. } => cli::commands::groups::handle(cli, cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    // `init` must work even when the existing file is broken
    if matches!(cli.command, Commands::Init { .. }) {
        return cli::commands::init::handle(&cli);
    }

    let cfg = Config::load_from(Some(&cli.config_path()))?;
    dispatch(&cli, &cfg).await
}
