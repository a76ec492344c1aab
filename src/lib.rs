//! punchclock library root.
//! Exposes the CLI parser, the `run()` entry point and the core modules
//! (punch state machine, calendar projection, record store).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use store::RecordStore;

use crate::core::clock::SystemClock;
use crate::core::state::AppState;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(&*cfg.path_provider(cli.data.as_deref()));
    let data_exists = store.exists();
    let mut state = AppState::open(store, Box::new(SystemClock));

    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg, &state, data_exists),
        Commands::Punch => commands::punch::handle(cfg, &mut state),
        Commands::Status { .. } => commands::status::handle(&cli.command, cfg, &state),
        Commands::Calendar { .. } => commands::calendar::handle(&cli.command, cfg, &mut state),
        Commands::History { .. } => commands::history::handle(&cli.command, cfg, &state),
        Commands::Day { .. } => commands::day::handle(&cli.command, cfg, &state),
        Commands::Rates { .. } => commands::rates::handle(&cli.command, cfg, &mut state),
        Commands::Export { .. } => commands::export::handle(&cli.command, &state),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load()?;

    utils::logging::enable_logging(&cfg.log_level);

    dispatch(&cli, &cfg)
}
