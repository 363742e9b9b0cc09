//! Vinyl Cabinet CLI
//!
//! Command-line front end for cataloguing and reviewing a record collection.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::{OutputMode, TerminalRenderer};
use vinyl_core::CabinetBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let cabinet = CabinetBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize cabinet")?;

    info!("using cabinet at {}", cabinet.database_path().display());

    let cli = Cli::new(cabinet, TerminalRenderer::new(OutputMode::from_flags(no_color, json)));

    match command {
        Some(User { command }) => cli.handle_user_command(command).await,
        Some(Album { command }) => cli.handle_album_command(command).await,
        Some(Genre { command }) => cli.handle_genre_command(command).await,
        Some(Review { command }) => cli.handle_review_command(command).await,
        Some(Favorite { command }) => cli.handle_favorite_command(command).await,
        None => cli.list_albums().await,
    }
}
