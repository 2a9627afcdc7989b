//! Cadence - terminal music player mock-up
use cadence_cli::{config::CliConfig, repl};
use cadence_core::{CatalogProvider, StaticCatalog, UserId};
use cadence_playback::{PlaybackController, PlaybackSession};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Cadence playback controller", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    /// JSON catalog (built-in sample when omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Acting user ID
    #[arg(short, long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence_cli=info,cadence_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration, command line wins
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    if let Some(user) = cli.user {
        config.user.id = user;
    }
    config.validate()?;

    let catalog = match &config.catalog.path {
        Some(path) => StaticCatalog::load(path)?,
        None => StaticCatalog::sample(),
    };

    tracing::info!("Starting Cadence");
    tracing::info!("User: {}", config.user.id);
    tracing::info!(
        "Catalog: {} tracks, {} playlists",
        catalog.tracks().len(),
        catalog.playlists().len()
    );

    let controller = PlaybackController::new(
        config.playback.clone(),
        &catalog,
        UserId::new(config.user.id.clone()),
    );
    let mut session = PlaybackSession::new(controller, config.playback.tick_interval());

    println!("{}", cadence_cli::render::help());
    repl::run(&mut session, tokio::io::stdin(), tokio::io::stdout()).await?;

    session.shutdown();
    tracing::info!("Bye");
    Ok(())
}
