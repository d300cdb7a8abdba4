mod model;
mod server;

use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::membership_expiry,
    service::mail::Mailer, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let mailer = Mailer::new(http_client, config.mail.clone());

    if matches!(mailer, Mailer::Log) {
        tracing::warn!("MAIL_API_URL/MAIL_API_KEY not set, expiry emails will only be logged");
    }

    startup::ensure_superadmin(&db, config.superadmin.as_ref()).await?;

    let _scheduler = membership_expiry::start_scheduler(
        db.clone(),
        mailer.clone(),
        config.app_url.clone(),
        &config.expiry_sweep_schedule,
    )
    .await?;

    let state = AppState::new(
        db,
        mailer,
        config.app_url.clone(),
        config.cron_secret.clone(),
        PathBuf::from(&config.upload_dir),
    );
    let app = router::app(state, &PathBuf::from(&config.public_dir), session);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
