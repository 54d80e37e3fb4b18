//! leafid-cs - Leaf Classification Service
//!
//! **Module Identity:**
//! - Name: leafid-cs (Classification Service)
//! - Port: 5730
//!
//! Classifies uploaded leaf photos into one of the catalog's plant species,
//! records every classification per anonymous session and serves
//! aggregate analytics over the recorded history.

use std::fs::OpenOptions;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use leafid_common::config::{
    default_config_path, load_toml_config, LoggingConfig, RootFolderInitializer, TomlConfig,
};
use leafid_cs::catalog::LabelCatalog;
use leafid_cs::config::{ConfigOverrides, ServiceConfig, MODULE_NAME};
use leafid_cs::inference::TractClassifier;
use leafid_cs::AppState;

/// Command-line arguments for leafid-cs
#[derive(Parser, Debug)]
#[command(name = "leafid-cs")]
#[command(about = "Leaf image classification service")]
#[command(version)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, env = "LEAFID_CS_CONFIG")]
    config: Option<PathBuf>,

    /// Root folder holding the database and model
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "LEAFID_CS_PORT")]
    port: Option<u16>,

    /// Path to the ONNX model
    #[arg(short, long = "model", env = "LEAFID_MODEL_PATH")]
    model: Option<PathBuf>,

    /// Label file, one label per line (defaults to the built-in species table)
    #[arg(short, long)]
    labels: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Step 1: Bootstrap TOML (before tracing, so its logging section applies)
    let config_path = args
        .config
        .clone()
        .or_else(|| default_config_path(MODULE_NAME));
    let toml_config = match &config_path {
        Some(path) => load_toml_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => TomlConfig::default(),
    };

    // Step 2: Tracing
    init_tracing(&toml_config.logging)?;

    info!(
        "Starting leafid-cs (Classification Service) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE"),
    );
    match &config_path {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => warn!("Config file not found: {} (using defaults)", path.display()),
        None => warn!("No config directory available (using defaults)"),
    }

    // Step 3: Resolve configuration and prepare the root folder
    let config = ServiceConfig::resolve(
        &toml_config,
        ConfigOverrides {
            root_folder: args.root_folder,
            port: args.port,
            model_path: args.model,
            labels_path: args.labels,
        },
    );
    let initializer = RootFolderInitializer::new(config.root_folder.clone());
    initializer
        .ensure_directory_exists()
        .context("Failed to initialize root folder")?;
    info!("Root folder: {}", initializer.root_folder().display());

    // Step 4: Database
    info!("Database: {}", config.database_path.display());
    let db_pool = leafid_common::db::init_database(&config.database_path)
        .await
        .context("Failed to open database")?;
    info!("Database connection established");

    // Step 5: Label catalog
    let catalog = load_catalog(config.labels_path.as_deref())?;
    info!("Label catalog: {} classes", catalog.len());

    // Step 6: Model
    let classifier = TractClassifier::load(&config.model_path)
        .with_context(|| format!("Failed to load model {}", config.model_path.display()))?;
    info!("Model loaded: {}", classifier.model_path().display());

    // Step 7: Router
    let state = AppState::new(db_pool, Arc::new(catalog), Arc::new(classifier))
        .with_max_upload_bytes(config.max_upload_bytes);
    let app = leafid_cs::build_router(state);

    // Step 8: Serve
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; optional file output
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, stderr_layer) = match &logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => (None, Some(tracing_subscriber::fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn load_catalog(labels_path: Option<&Path>) -> Result<LabelCatalog> {
    match labels_path {
        Some(path) => {
            info!("Labels: {}", path.display());
            LabelCatalog::load(path)
                .with_context(|| format!("Failed to load labels {}", path.display()))
        }
        None => Ok(LabelCatalog::plant_species()),
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
