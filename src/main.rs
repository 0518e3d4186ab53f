use std::sync::Arc;

use tracing::info;

use mojo::mail::ResendMailer;
use mojo::web::WebServer;
use mojo::{Config, Database};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = mojo::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        mojo::logging::init_console_only(&config.logging.level);
    }

    info!("Mojo tag service");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    let mailer = Arc::new(ResendMailer::new(&config.mail));

    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    let server = WebServer::new(&config, db, mailer);
    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {}", e);
        return std::process::ExitCode::FAILURE;
    }

    std::process::ExitCode::SUCCESS
}
