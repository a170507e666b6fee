use crate::models::{FleetRow, LogRow};
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FleetSortKey {
    #[value(name = "driverName")]
    DriverName,
    Total,
    Verified,
    Unverified,
    #[value(name = "verifiedPct")]
    VerifiedPct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogSortKey {
    #[value(name = "driverName")]
    DriverName,
    #[value(name = "dateTime")]
    DateTime,
    Status,
    #[value(name = "isVerified")]
    IsVerified,
    #[value(name = "coDriverName")]
    CoDriverName,
    Hours,
    Device,
    Annotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VerificationFilter {
    #[default]
    All,
    Verified,
    Unverified,
}

impl VerificationFilter {
    fn keeps(self, row: &LogRow) -> bool {
        match self {
            VerificationFilter::All => true,
            VerificationFilter::Verified => row.is_verified,
            VerificationFilter::Unverified => !row.is_verified,
        }
    }
}

/// Stable sort; ties keep their aggregation order.
pub fn sort_fleet(rows: &mut [FleetRow], key: FleetSortKey, dir: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = match key {
            FleetSortKey::DriverName => cmp_text(&a.driver_name, &b.driver_name),
            FleetSortKey::Total => a.total.cmp(&b.total),
            FleetSortKey::Verified => a.verified.cmp(&b.verified),
            FleetSortKey::Unverified => a.unverified.cmp(&b.unverified),
            FleetSortKey::VerifiedPct => cmp_f64(Some(a.verified_pct), Some(b.verified_pct)),
        };
        dir.apply(ord)
    });
}

/// Verification filter, then a case-insensitive substring search over
/// driver, status, device, annotation and co-driver.
pub fn filter_logs(rows: Vec<LogRow>, filter: VerificationFilter, search: Option<&str>) -> Vec<LogRow> {
    let needle = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    rows.into_iter()
        .filter(|r| filter.keeps(r))
        .filter(|r| match &needle {
            Some(n) => matches_search(r, n),
            None => true,
        })
        .collect()
}

fn matches_search(row: &LogRow, needle: &str) -> bool {
    [
        &row.driver_name,
        &row.status,
        &row.device,
        &row.annotation,
        &row.co_driver_name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

pub fn sort_logs(rows: &mut [LogRow], key: LogSortKey, dir: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = match key {
            LogSortKey::DriverName => cmp_text(&a.driver_name, &b.driver_name),
            LogSortKey::DateTime => cmp_text(
                a.date_time.as_deref().unwrap_or_default(),
                b.date_time.as_deref().unwrap_or_default(),
            ),
            LogSortKey::Status => cmp_text(&a.status, &b.status),
            LogSortKey::IsVerified => a.is_verified.cmp(&b.is_verified),
            LogSortKey::CoDriverName => cmp_text(&a.co_driver_name, &b.co_driver_name),
            // "--" parses to None and sorts lowest
            LogSortKey::Hours => cmp_f64(a.hours.parse().ok(), b.hours.parse().ok()),
            LogSortKey::Device => cmp_text(&a.device, &b.device),
            LogSortKey::Annotation => cmp_text(&a.annotation, &b.annotation),
        };
        dir.apply(ord)
    });
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn cmp_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}
