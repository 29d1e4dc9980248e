use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod infrastructure;
mod modules;
mod state;
mod ui;

use crate::config::settings::AppConfig;
use crate::modules::movie::model::MovieId;
use crate::ui::edit_movie::EditMovieDialog;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Logs go to stderr, prompts to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let movie_id: MovieId = std::env::args()
        .nth(1)
        .context("usage: movie-editor <movie-id>")?
        .parse()
        .context("movie id must be an integer")?;

    let config = AppConfig::new().context("Failed to load configuration")?;
    let state = app::create_app(config).await?;

    let movies = state.movies();
    let movie = movies
        .get_movie(movie_id)
        .await
        .with_context(|| format!("Failed to load movie {}", movie_id))?;

    let mut dialog = EditMovieDialog::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    match dialog.run(movie, state.auth(), movies).await? {
        Some(true) => info!("Editor closed after update"),
        _ => info!("Editor closed without changes"),
    }

    Ok(())
}
