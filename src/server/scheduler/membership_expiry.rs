use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{expiry::ExpirySweepService, mail::Mailer},
};

/// Starts the membership expiry scheduler.
///
/// Runs the expiry sweep on `schedule`, a six-field cron expression (seconds first).
/// Failed runs are logged; unsent notifications are retried on the next run.
///
/// # Arguments
/// - `db`: Database connection
/// - `mailer`: Backend for the expiry emails
/// - `app_url`: Application URL for links in the emails
/// - `schedule`: Cron expression, e.g. `0 0 6 * * *`
pub async fn start_scheduler(
    db: DatabaseConnection,
    mailer: Mailer,
    app_url: String,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let mailer = mailer.clone();
        let app_url = app_url.clone();

        Box::pin(async move {
            match ExpirySweepService::new(&db, &mailer, &app_url)
                .sweep(Utc::now())
                .await
            {
                Ok(notified) => {
                    tracing::debug!("Expiry sweep finished, {} notified", notified)
                }
                Err(e) => tracing::error!("Error running membership expiry sweep: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Membership expiry scheduler started ({})", schedule);

    Ok(scheduler)
}
