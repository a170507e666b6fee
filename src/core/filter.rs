use crate::errors::{AppError, AppResult};
use crate::models::{Driver, DutyStatusLog, EntityRef};
use serde_json::Value;
use tracing::warn;

/// Keeps `log` only if its status is a verifiable duty status, stamping
/// `driver_id` on it when the payload carries no driver.
pub fn tag_log(mut log: DutyStatusLog, driver_id: &str) -> Option<DutyStatusLog> {
    log.duty_status()?;
    if log.driver.is_none() {
        log.driver = Some(EntityRef::new(driver_id));
    }
    Some(log)
}

/// Filters and tags one page of logs fetched for `driver_id`.
pub fn tag_page(
    logs: impl IntoIterator<Item = DutyStatusLog>,
    driver_id: &str,
    into: &mut Vec<DutyStatusLog>,
) -> usize {
    let before = into.len();
    into.extend(logs.into_iter().filter_map(|log| tag_log(log, driver_id)));
    into.len() - before
}

/// Absorbs the raw multi-call results of one batch.
///
/// `results[i]` holds the logs requested for `batch[i]`. A result that is
/// not an array is skipped, and so is an entry that does not decode as a
/// log. Returns the number of logs kept.
pub fn absorb_batch(
    results: Vec<Value>,
    batch: &[Driver],
    into: &mut Vec<DutyStatusLog>,
) -> AppResult<usize> {
    if results.len() != batch.len() {
        return Err(AppError::Response(format!(
            "expected {} results for the batch, got {}",
            batch.len(),
            results.len()
        )));
    }

    let mut kept = 0;
    for (result, driver) in results.into_iter().zip(batch) {
        let Value::Array(items) = result else {
            continue;
        };
        let logs = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<DutyStatusLog>(item) {
                Ok(log) => Some(log),
                Err(e) => {
                    warn!(driver = %driver.id, error = %e, "skipping malformed duty-status log");
                    None
                }
            });
        kept += tag_page(logs, &driver.id, into);
    }
    Ok(kept)
}
