//! Application state shared across all request handlers.
//!
//! Built once at startup and cloned into each handler through axum's `State`
//! extractor. Every field is cheap to clone: the connection pool, the HTTP client and
//! the mailer share their internals behind `Arc`s.

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::service::mail::Mailer;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the application database.
    pub db: DatabaseConnection,

    /// Outgoing mail backend used by the expiry sweep.
    pub mailer: Mailer,

    /// Public base URL, used for links in outgoing mail.
    pub app_url: String,

    /// Bearer secret expected by the HTTP cron trigger.
    pub cron_secret: Arc<str>,

    /// Directory uploaded files are written to and served from.
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        mailer: Mailer,
        app_url: String,
        cron_secret: String,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            db,
            mailer,
            app_url,
            cron_secret: Arc::from(cron_secret),
            upload_dir,
        }
    }
}
