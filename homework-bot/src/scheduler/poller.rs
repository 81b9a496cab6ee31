//! Status poller
//!
//! One cycle: fetch statuses since the watermark, check the response shape,
//! parse the newest homework and notify the user. Failures are reported to
//! the user once per distinct error; the loop then sleeps for the retry
//! period whatever happened.

use homework_core::{Homework, HomeworkStatuses};
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use super::error::{PollError, ReportedError};
use crate::repository::HomeworkRepository;
use crate::service::Notifier;

/// State carried from one cycle to the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopState {
    /// Unix timestamp passed as `from_date` on the next request
    pub watermark: i64,

    /// Last error the user was told about
    pub last_error: Option<ReportedError>,
}

impl LoopState {
    pub fn new(watermark: i64) -> Self {
        Self {
            watermark,
            last_error: None,
        }
    }
}

/// What a single cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A homework status was found and sent
    Notified { homework: Homework, delivered: bool },

    /// The response listed no homeworks
    NoChanges,

    /// The cycle failed; `notified` tells whether the user was told now
    Failed { error: ReportedError, notified: bool },
}

/// Newest homework plus the server time of the answer
struct StatusUpdate {
    homework: Homework,
    current_date: Option<i64>,
}

/// Polls the review API and forwards status changes
pub struct StatusPoller {
    retry_period: Duration,
    homeworks: Arc<dyn HomeworkRepository>,
    notifier: Notifier,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        retry_period: Duration,
        homeworks: Arc<dyn HomeworkRepository>,
        notifier: Notifier,
    ) -> Self {
        Self {
            retry_period,
            homeworks,
            notifier,
        }
    }

    /// Runs cycles forever, sleeping `retry_period` after each one
    ///
    /// Never returns; the process ends it from outside.
    pub async fn run(&self, mut state: LoopState) {
        info!(
            "Starting status poller (retry period: {:?}, from_date: {})",
            self.retry_period, state.watermark
        );

        loop {
            debug!("Polling homework statuses from {}", state.watermark);

            match self.run_cycle(&mut state).await {
                CycleOutcome::Notified { homework, delivered } => {
                    info!(
                        "Homework \"{}\" is now {} (delivered: {})",
                        homework.name, homework.status, delivered
                    );
                }
                CycleOutcome::NoChanges => debug!("No homework status changes"),
                CycleOutcome::Failed { error, notified } => {
                    debug!("Cycle failed with {} error (notified: {})", error.kind, notified);
                }
            }

            time::sleep(self.retry_period).await;
        }
    }

    /// Performs a single poll cycle and updates `state`
    ///
    /// The watermark moves to the server's `current_date` only when a status
    /// was found and delivered. Any successful cycle clears the last error.
    pub async fn run_cycle(&self, state: &mut LoopState) -> CycleOutcome {
        match self.check_statuses(state.watermark).await {
            Ok(Some(update)) => {
                state.last_error = None;

                let delivered = self
                    .notifier
                    .notify(&update.homework.status_message())
                    .await;

                if delivered {
                    match update.current_date {
                        Some(current_date) => state.watermark = current_date,
                        None => warn!(
                            "Response has no current_date, keeping from_date {}",
                            state.watermark
                        ),
                    }
                }

                CycleOutcome::Notified {
                    homework: update.homework,
                    delivered,
                }
            }
            Ok(None) => {
                state.last_error = None;
                CycleOutcome::NoChanges
            }
            Err(e) => self.report_failure(state, e).await,
        }
    }

    async fn check_statuses(&self, from_date: i64) -> Result<Option<StatusUpdate>, PollError> {
        let body = self.homeworks.fetch_statuses(from_date).await?;
        let statuses = HomeworkStatuses::from_body(&body)?;

        let Some(newest) = statuses.newest() else {
            return Ok(None);
        };

        let homework = Homework::from_record(newest)?;

        Ok(Some(StatusUpdate {
            homework,
            current_date: statuses.current_date,
        }))
    }

    async fn report_failure(&self, state: &mut LoopState, e: PollError) -> CycleOutcome {
        error!("Poll cycle failed: {}", e);
        let report = e.report();

        if state.last_error.as_ref() == Some(&report) {
            debug!("Error already reported, not notifying again");
            return CycleOutcome::Failed {
                error: report,
                notified: false,
            };
        }

        let notified = self.notifier.notify(&report.notification()).await;

        // An undelivered report is retried on the next failing cycle.
        if notified {
            state.last_error = Some(report.clone());
        }

        CycleOutcome::Failed {
            error: report,
            notified,
        }
    }
}
