//! Spalla CLI application
//!
//! Terminal front end for the Spalla task board core.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands, ScopeArgs};
use clap::Parser;
use log::info;
use spalla_core::cache::{DirStore, LocalCache};
use spalla_core::{BoardBuilder, ReminderBook};

use cli::Cli;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        cache_dir,
        offline,
        no_color,
        command,
    } = Args::parse();

    let store_path = if offline {
        None
    } else {
        match database_file {
            Some(path) => Some(path),
            None => Some(
                BoardBuilder::default_store_path()
                    .context("Failed to resolve the default store path")?,
            ),
        }
    };

    let cache = match cache_dir {
        Some(dir) => LocalCache::new(Arc::new(DirStore::new(dir))),
        None => LocalCache::default_location(),
    };

    let board = BoardBuilder::new()
        .with_store_path(store_path.as_ref())
        .with_cache(cache.clone())
        .build()
        .await
        .context("Failed to load the task board")?;
    let reminders = ReminderBook::load(cache);
    let renderer = TerminalRenderer::new(!no_color);

    info!("Spalla board loaded ({} tasks)", board.tasks().len());

    let mut cli = Cli::new(board, reminders, renderer, store_path);

    let outcome = match command {
        Some(Commands::Task { command }) => cli.handle_task_command(command),
        Some(Commands::Board(scope)) => cli.show_board(scope),
        Some(Commands::Gantt(args)) => cli.show_gantt(args),
        Some(Commands::Stats) => cli.show_stats(),
        Some(Commands::Reminder { command }) => cli.handle_reminder_command(command),
        Some(Commands::Mentee { command }) => cli.handle_mentee_command(command).await,
        None => cli.show_board(ScopeArgs::default()),
    };

    // Let fire-and-forget syncs land before the process exits.
    cli.shutdown().await;

    outcome
}
