use acct_server::error::Result as ServerErrorResult;
use acct_server::{AppState, Metrics, build_router, logger};

use acct_config::Config;
use acct_core::AccountService;
use acct_db::AccountRepository;

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting acct-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = acct_db::connect(&database_path, config.database.max_connections).await?;

    info!("Running database migrations...");
    acct_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let store = Arc::new(AccountRepository::new(pool.clone()));
    let notifier = acct_mail::notifier_from_config(&config.mail)?;
    if !config.mail.enabled {
        info!("Mail disabled - verification links will be logged");
    }

    let app_state = AppState {
        pool,
        service: AccountService::new(store, notifier),
        metrics: Metrics::new(),
        verification_redirect_url: config.verification.redirect_url.clone(),
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Actual address matters when port is 0 (auto-assigned)
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
