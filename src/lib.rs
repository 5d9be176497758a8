//! sitecrew library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use context::AppContext;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &mut AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(&cli.command, ctx),
        Commands::Config { .. } => commands::config::handle(&cli.command, ctx),
        Commands::Dashboard { .. } => commands::dashboard::handle(&cli.command, ctx),
        Commands::Crew => commands::crew::handle(ctx),
        Commands::Contractors => commands::contractors::handle(ctx),
        Commands::Attendance { .. } => commands::attendance::handle(&cli.command, ctx),
        Commands::Payments { .. } => commands::payments::handle(&cli.command, ctx),
        Commands::Worker { .. } => commands::worker::handle(&cli.command, ctx),
        Commands::Brief => commands::brief::handle(ctx),
        Commands::Session { .. } => commands::session::handle(&cli.command, ctx),
        Commands::Log { .. } => commands::log::handle(&cli.command, ctx),
        Commands::Export { .. } => commands::export::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);

    // config, store and "today" are resolved once per process
    let mut ctx = AppContext::from_cli(&cli)?;

    dispatch(&cli, &mut ctx)
}
