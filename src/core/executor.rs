//! Throttled, strictly sequential execution of a fetch plan.

use crate::core::cancel::FetchController;
use crate::core::filter::absorb_batch;
use crate::core::planner::{CHUNK_DAYS, DRIVER_BATCH_SIZE, FetchPlan};
use crate::errors::{AppError, AppResult};
use crate::geotab::{Transport, request};
use crate::models::{DateRange, Driver, DutyStatusLog};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Pause between consecutive multi-calls; the backend rate-limits bursts.
pub const BATCH_DELAY_MS: u64 = 100;
/// Per sub-request cap on returned logs.
pub const RESULTS_LIMIT: u32 = 50_000;

const PROGRESS_TEXT: &str = "Fetching duty status logs...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
    pub chunk_days: u32,
    pub batch_size: usize,
    pub batch_delay: Duration,
    pub results_limit: u32,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            chunk_days: CHUNK_DAYS,
            batch_size: DRIVER_BATCH_SIZE,
            batch_delay: Duration::from_millis(BATCH_DELAY_MS),
            results_limit: RESULTS_LIMIT,
        }
    }
}

impl FetchSettings {
    pub fn validate(self) -> AppResult<Self> {
        if self.chunk_days == 0 {
            return Err(AppError::Config("chunk_days must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(AppError::Config("batch_size must be at least 1".into()));
        }
        if self.results_limit == 0 {
            return Err(AppError::Config("results_limit must be at least 1".into()));
        }
        Ok(self)
    }
}

/// Progress after a completed unit.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
    pub text: String,
}

impl FetchProgress {
    pub fn new(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            100.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Self {
            completed,
            total,
            percent,
            text: format!("{PROGRESS_TEXT} {}%", percent.round()),
        }
    }
}

/// How a fetch ended. A cancelled fetch carries no logs at all, so it can
/// never be mistaken for a range that legitimately has none.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Completed(Vec<DutyStatusLog>),
    Cancelled,
}

impl FetchOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchOutcome::Cancelled)
    }

    pub fn into_logs(self) -> Option<Vec<DutyStatusLog>> {
        match self {
            FetchOutcome::Completed(logs) => Some(logs),
            FetchOutcome::Cancelled => None,
        }
    }
}

/// Runs `plan` one unit at a time.
///
/// Every unit after the first waits `settings.batch_delay` first. The token
/// is checked before and after that wait; once it is cancelled the executor
/// stops and drops what it has accumulated. Any transport error aborts the
/// whole run.
pub async fn execute<T, F>(
    transport: &T,
    plan: &FetchPlan<'_>,
    settings: &FetchSettings,
    token: &CancellationToken,
    mut on_progress: F,
) -> AppResult<FetchOutcome>
where
    T: Transport + ?Sized,
    F: FnMut(&FetchProgress),
{
    let total = plan.total_units();
    let mut completed = 0;
    let mut logs = Vec::new();

    for unit in plan.units() {
        if token.is_cancelled() {
            return Ok(FetchOutcome::Cancelled);
        }
        if completed > 0 {
            tokio::time::sleep(settings.batch_delay).await;
        }
        if token.is_cancelled() {
            return Ok(FetchOutcome::Cancelled);
        }

        let calls = unit
            .drivers
            .iter()
            .map(|d| request::duty_status_logs(&d.id, &unit.window, settings.results_limit))
            .collect();
        let results = transport.multi_call(calls).await?;
        let kept = absorb_batch(results, unit.drivers, &mut logs)?;

        completed += 1;
        debug!(
            window = unit.window_index,
            batch = unit.batch_index,
            drivers = unit.drivers.len(),
            logs = kept,
            completed,
            total,
            "unit done"
        );
        on_progress(&FetchProgress::new(completed, total));
    }

    Ok(FetchOutcome::Completed(logs))
}

/// Fetches duty-status logs for a driver selection, one fetch at a time.
pub struct LogFetcher<T> {
    transport: T,
    settings: FetchSettings,
    controller: Arc<FetchController>,
}

impl<T: Transport> LogFetcher<T> {
    pub fn new(transport: T, settings: FetchSettings) -> Self {
        Self {
            transport,
            settings,
            controller: Arc::new(FetchController::new()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Shared handle so another task (e.g. a Ctrl+C watcher) can cancel.
    pub fn controller(&self) -> Arc<FetchController> {
        Arc::clone(&self.controller)
    }

    /// Starts a fetch, superseding any fetch still running on this fetcher.
    pub async fn fetch<F>(
        &self,
        drivers: &[Driver],
        range: &DateRange,
        on_progress: F,
    ) -> AppResult<FetchOutcome>
    where
        F: FnMut(&FetchProgress),
    {
        let token = self.controller.begin();
        let plan = FetchPlan::new(
            range,
            drivers,
            self.settings.chunk_days,
            self.settings.batch_size,
        );
        info!(
            drivers = drivers.len(),
            windows = plan.windows().len(),
            batches = plan.batches().len(),
            units = plan.total_units(),
            "starting duty-status log fetch"
        );

        let outcome = execute(&self.transport, &plan, &self.settings, &token, on_progress).await?;
        if outcome.is_cancelled() {
            info!("fetch stopped before completion; results discarded");
        }
        Ok(outcome)
    }
}
