//! rDietTracker library root.
//! Exposes the plan catalog, the progress tracker, the CLI parser and the
//! high-level run() function.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands as cmd;

    match &cli.command {
        Commands::Init => cmd::init::handle(cli),
        Commands::Config { .. } => cmd::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cmd::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cmd::log::handle(&cli.command, cfg),
        Commands::Dashboard => cmd::dashboard::handle(&cli.command, cfg),
        Commands::Menu { .. } => cmd::menu::handle(&cli.command, cfg),
        Commands::Toggle { .. } => cmd::toggle::handle(&cli.command, cfg),
        Commands::Weight { .. } => cmd::weight::handle(&cli.command, cfg),
        Commands::Day { .. } => cmd::day::handle(&cli.command, cfg),
        Commands::Cycle { .. } => cmd::cycle::handle(&cli.command, cfg),
        Commands::Tips => cmd::tips::handle(&cli.command, cfg),
        Commands::Reduction => cmd::reduction::handle(&cli.command, cfg),
        Commands::Costs { .. } => cmd::costs::handle(&cli.command, cfg),
        Commands::Backup { .. } => cmd::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cmd::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (test runs never read the user's file)
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // 3️⃣ command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_db_path(custom_db);
    }

    dispatch(&cli, &cfg)
}
