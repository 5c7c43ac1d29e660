//! Expert Directory server binary.
//!
//! Loads configuration from the environment, reads the directory documents
//! once, and serves the pages until interrupted.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use expert_directory::adapters::http::{build_router, DirectoryAppState};
use expert_directory::adapters::FsDirectorySource;
use expert_directory::application::LoadDirectoryHandler;
use expert_directory::config::{AppConfig, ValidationError};
use expert_directory::domain::foundation::DomainError;

/// Errors that abort startup.
#[derive(Debug, Error)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load directory data: {0}")]
    Data(#[from] DomainError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate()?;

    let source = Arc::new(FsDirectorySource::new(
        &config.data.profiles_path,
        &config.data.tags_path,
    ));
    let directory = LoadDirectoryHandler::new(source).handle().await?;

    let addr = config.server.socket_addr()?;
    let state = DirectoryAppState::new(Arc::new(directory), config.site.clone());
    let app = build_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        environment = ?config.server.environment,
        "Listening on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
