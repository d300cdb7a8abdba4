use tower_sessions::{
    cookie::SameSite, session_store::ExpiredDeletion, Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, SuperadminConfig},
    error::AppError,
    service::auth::AuthService,
};

/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// How often expired session rows are purged.
const SESSION_CLEANUP_INTERVAL_SECS: u64 = 60 * 60;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on a SQLite store sharing the application pool.
///
/// Creates the session table if needed and spawns a background task that purges
/// expired sessions. Cookies are marked secure when the app is served over HTTPS.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    tokio::task::spawn(store.clone().continuously_delete_expired(
        tokio::time::Duration::from_secs(SESSION_CLEANUP_INTERVAL_SECS),
    ));

    Ok(SessionManagerLayer::new(store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}

/// HTTP client for the mail API. Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Creates the configured SUPERADMIN account on first startup.
///
/// Does nothing when no credentials are configured or the account already exists.
pub async fn ensure_superadmin(
    db: &sea_orm::DatabaseConnection,
    superadmin: Option<&SuperadminConfig>,
) -> Result<(), AppError> {
    let Some(superadmin) = superadmin else {
        tracing::warn!("SUPERADMIN_EMAIL/SUPERADMIN_PASSWORD not set, skipping superadmin bootstrap");
        return Ok(());
    };

    if AuthService::new(db).ensure_superadmin(superadmin).await? {
        tracing::info!("Created superadmin account {}", superadmin.email);
    }

    Ok(())
}
