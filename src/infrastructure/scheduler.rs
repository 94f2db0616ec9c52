// src/infrastructure/scheduler.rs
use std::sync::Arc;

use thiserror::Error;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::application::{
    ApplicationResult, commands::generation::ArticleGenerationService, dto::ArticleDto,
    error::ApplicationError,
};

/// Daily at 02:00 UTC. Six fields, seconds first.
pub const DEFAULT_CADENCE: &str = "0 0 2 * * *";

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("invalid cadence expression {expression:?}: {source}")]
    InvalidCadence {
        expression: String,
        source: JobSchedulerError,
    },
    #[error("scheduler failure: {0}")]
    Scheduler(#[from] JobSchedulerError),
}

/// Owns the recurring generation job. Dropping the handle without calling
/// [`GenerationScheduler::shutdown`] leaves the job running until the runtime stops.
pub struct GenerationScheduler {
    inner: JobScheduler,
    cadence: String,
}

impl GenerationScheduler {
    /// Arm one recurring job that runs `service` on `cadence` (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidCadence`] for an unparsable expression
    /// and [`SchedulerError::Scheduler`] when the scheduler cannot start.
    pub async fn start(
        service: Arc<ArticleGenerationService>,
        cadence: &str,
    ) -> Result<Self, SchedulerError> {
        let scheduler = JobScheduler::new().await?;

        let job = Job::new_async(cadence, move |_id, _scheduler| {
            let service = Arc::clone(&service);
            Box::pin(async move {
                run_scheduled(&service).await;
            })
        })
        .map_err(|source| SchedulerError::InvalidCadence {
            expression: cadence.to_string(),
            source,
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;
        tracing::info!(cadence, "generation cadence armed");

        Ok(Self {
            inner: scheduler,
            cadence: cadence.to_string(),
        })
    }

    #[must_use]
    pub fn cadence(&self) -> &str {
        &self.cadence
    }

    /// # Errors
    ///
    /// Returns [`SchedulerError::Scheduler`] when the scheduler fails to stop.
    pub async fn shutdown(mut self) -> Result<(), SchedulerError> {
        self.inner.shutdown().await?;
        tracing::info!(cadence = %self.cadence, "generation cadence stopped");
        Ok(())
    }
}

/// Body of every cadence firing. Never propagates: a failed run must not
/// stop the next one from firing.
pub async fn run_scheduled(service: &ArticleGenerationService) {
    tracing::info!("scheduled generation triggered");
    log_outcome(&service.run().await);
}

/// Logging sink for generation results at the trigger boundary.
pub fn log_outcome(outcome: &ApplicationResult<ArticleDto>) {
    match outcome {
        Ok(article) => {
            tracing::info!(article_id = article.id, title = %article.title, "scheduled generation succeeded");
        }
        Err(ApplicationError::Conflict(reason)) => {
            tracing::warn!(%reason, "scheduled generation skipped");
        }
        Err(err) => {
            tracing::error!(error = %err, "scheduled generation failed");
        }
    }
}
