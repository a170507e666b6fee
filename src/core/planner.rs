use crate::models::{DateRange, Driver};
use chrono::{DateTime, TimeDelta, Utc};

/// Days covered by one request window.
pub const CHUNK_DAYS: u32 = 14;
/// Drivers per multi-call.
pub const DRIVER_BATCH_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Splits `range` into contiguous windows of `chunk_days`; the last one is
/// clipped to the range end.
pub fn time_windows(range: &DateRange, chunk_days: u32) -> Vec<TimeWindow> {
    let step = TimeDelta::days(i64::from(chunk_days.max(1)));
    let end = range.to();

    let mut windows = Vec::new();
    let mut cursor = range.from();
    while cursor < end {
        let to = (cursor + step).min(end);
        windows.push(TimeWindow { from: cursor, to });
        cursor = to;
    }
    windows
}

/// Contiguous slices of at most `batch_size`, input order preserved.
pub fn driver_batches<T>(drivers: &[T], batch_size: usize) -> Vec<&[T]> {
    drivers.chunks(batch_size.max(1)).collect()
}

/// One (window, batch) pair.
#[derive(Debug, Clone, Copy)]
pub struct WorkUnit<'a> {
    pub window_index: usize,
    pub batch_index: usize,
    pub window: TimeWindow,
    pub drivers: &'a [Driver],
}

/// Cartesian product of windows and batches, consumed window-major: every
/// batch of a window runs before the next window starts.
#[derive(Debug, Clone)]
pub struct FetchPlan<'a> {
    windows: Vec<TimeWindow>,
    batches: Vec<&'a [Driver]>,
}

impl<'a> FetchPlan<'a> {
    pub fn new(range: &DateRange, drivers: &'a [Driver], chunk_days: u32, batch_size: usize) -> Self {
        Self {
            windows: time_windows(range, chunk_days),
            batches: driver_batches(drivers, batch_size),
        }
    }

    pub fn windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    pub fn batches(&self) -> &[&'a [Driver]] {
        &self.batches
    }

    pub fn total_units(&self) -> usize {
        self.windows.len() * self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_units() == 0
    }

    pub fn units(&self) -> impl Iterator<Item = WorkUnit<'a>> + '_ {
        self.windows
            .iter()
            .enumerate()
            .flat_map(move |(window_index, window)| {
                self.batches
                    .iter()
                    .enumerate()
                    .map(move |(batch_index, drivers)| WorkUnit {
                        window_index,
                        batch_index,
                        window: *window,
                        drivers: *drivers,
                    })
            })
    }
}
