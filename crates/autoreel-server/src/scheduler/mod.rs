//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and registers the
//! recurring maintenance jobs.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Daily at 03:00 UTC.
const LOG_RETENTION_SCHEDULE: &str = "0 0 3 * * *";

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process. Dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// a job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    pool: PgPool,
    config: Arc<autoreel_core::AppConfig>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_log_retention_job(&scheduler, pool, config.log_retention_days).await?;

    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_log_retention_job(
    scheduler: &JobScheduler,
    pool: PgPool,
    retention_days: u32,
) -> Result<(), JobSchedulerError> {
    let pool = Arc::new(pool);

    let job = Job::new_async(LOG_RETENTION_SCHEDULE, move |_uuid, _lock| {
        let pool = Arc::clone(&pool);

        Box::pin(async move {
            tracing::info!(retention_days, "scheduler: starting log retention run");
            run_log_retention(&pool, retention_days, Utc::now()).await;
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}

fn retention_cutoff(now: DateTime<Utc>, retention_days: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(retention_days))
}

/// Deletes application logs older than the retention window. Failures are
/// logged and the next scheduled run tries again.
async fn run_log_retention(pool: &PgPool, retention_days: u32, now: DateTime<Utc>) {
    let cutoff = retention_cutoff(now, retention_days);
    match autoreel_db::delete_logs_older_than(pool, cutoff).await {
        Ok(deleted) => {
            tracing::info!(deleted, %cutoff, "scheduler: log retention run complete");
        }
        Err(e) => {
            tracing::error!(error = %e, "scheduler: log retention run failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn retention_cutoff_subtracts_whole_days() {
        let now = Utc.with_ymd_and_hms(2025, 3, 31, 3, 0, 0).unwrap();
        assert_eq!(
            retention_cutoff(now, 30),
            Utc.with_ymd_and_hms(2025, 3, 1, 3, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn retention_schedule_parses() {
        assert!(Job::new_async(LOG_RETENTION_SCHEDULE, |_, _| Box::pin(async {})).is_ok());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn run_log_retention_removes_only_expired_rows(pool: sqlx::PgPool) {
        let now = Utc.with_ymd_and_hms(2025, 3, 31, 3, 0, 0).unwrap();
        autoreel_db::insert_log(&pool, "INFO", "old", None, now - Duration::days(45))
            .await
            .unwrap();
        autoreel_db::insert_log(&pool, "INFO", "fresh", None, now - Duration::days(2))
            .await
            .unwrap();

        run_log_retention(&pool, 30, now).await;

        let remaining = autoreel_db::list_logs(&pool, None, 10).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "fresh");
    }
}
