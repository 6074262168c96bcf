//! dino-ui - Dinosaur comparison infographic
//!
//! Loads the dino data file once at startup, then serves the input form and
//! renders the comparison grid on each submission.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dino_common::config::{resolve_config_path, ConfigOverrides, TomlConfig};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dino_ui::{build_router, AppState};

/// Command-line arguments for dino-ui
#[derive(Parser, Debug)]
#[command(name = "dino-ui")]
#[command(about = "Dinosaur comparison infographic")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "DINO_CONFIG")]
    config: Option<PathBuf>,

    /// Dino data file (JSON)
    #[arg(short, long, env = "DINO_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Directory served under /images
    #[arg(short, long, env = "DINO_IMAGES_DIR")]
    images_dir: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "DINO_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config first: the log level comes from it
    let config = TomlConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(ConfigOverrides {
            data_file: args.data_file,
            images_dir: args.images_dir,
            port: args.port,
        });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting dino-ui v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match resolve_config_path(args.config.as_deref()) {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("Config file: none (compiled defaults)"),
    }
    info!("Data file: {}", config.data_file.display());
    info!("Images directory: {}", config.images_dir.display());

    // Data load failure is fatal: no point serving an empty grid
    let dinos = match dino_common::loader::load_dinos(&config.data_file).await {
        Ok(dinos) => {
            info!("✓ Loaded {} dinos", dinos.len());
            dinos
        }
        Err(e) => {
            error!("Failed to load dino data from {}: {}", config.data_file.display(), e);
            return Err(e).context("Failed to load dino data");
        }
    };

    let state = AppState::new(dinos, config.images_dir.clone());
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("dino-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
