mod config;
mod error;
mod models;
mod services;

use crate::config::Config;
use crate::services::{
    run_pipeline, Classifier, NoopRefiner, RunLogger, SpotifyClient, DEFAULT_FETCH_LIMIT,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sort your Spotify liked songs into vibe-based playlists.
#[derive(Parser, Debug)]
#[command(name = "vibepilot")]
struct Args {
    /// Optional custom vibe prompt for the text-generation refinement hook
    #[arg(long)]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vibepilot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    if config.openai_api_key.is_some() && args.prompt.is_some() {
        // The refinement hook is an inert strategy for now; the credential
        // and prompt plumb through unused.
        tracing::debug!("Text-generation refinement is inactive; using rule-based classification");
    }

    let client = SpotifyClient::new(config.spotify_access_token.clone());
    let classifier = Classifier::new(Box::new(NoopRefiner), args.prompt.clone());

    let run = run_pipeline(&client, &classifier, DEFAULT_FETCH_LIMIT).await?;

    let path = RunLogger::default().write(&run)?;

    tracing::info!(
        "Processed {} tracks into {} playlists; run log at {}",
        run.tracks_processed,
        run.playlists.len(),
        path.display()
    );

    Ok(())
}
