// src/core/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::DateRange;
use crate::utils::date::parse_day;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use clap::ValueEnum;

/// Date range presets offered by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Yesterday, midnight to 23:59:59
    Yesterday,
    /// Seven days ago at midnight up to the end of today
    #[value(name = "7days")]
    Last7Days,
    /// Thirty days ago at midnight up to the end of today
    #[value(name = "30days")]
    Last30Days,
    /// Explicit --from / --to days
    Custom,
}

impl Preset {
    pub fn parse(s: &str) -> AppResult<Self> {
        <Preset as ValueEnum>::from_str(s, true).map_err(|_| {
            AppError::InvalidPreset(format!(
                "'{s}' (use one of: yesterday, 7days, 30days, custom)"
            ))
        })
    }
}

/// Resolves a preset against `now`, in `now`'s timezone.
///
/// - `yesterday` → yesterday 00:00:00 .. 23:59:59
/// - `7days` / `30days` → N days ago 00:00:00 .. today 23:59:59
/// - `custom` → `from` 00:00:00 (default: now - 30 days) .. `to` 23:59:59
///   (default: today 23:59:59), days given as YYYY-MM-DD
pub fn resolve_range<Tz: TimeZone>(
    preset: Preset,
    from: Option<&str>,
    to: Option<&str>,
    now: &DateTime<Tz>,
) -> AppResult<DateRange> {
    let tz = now.timezone();
    let today = now.date_naive();
    let end_of_today = end_of_day(&tz, today)?;

    let (start, end) = match preset {
        Preset::Yesterday => {
            let y = days_before(today, 1)?;
            (start_of_day(&tz, y)?, end_of_day(&tz, y)?)
        }
        Preset::Last7Days => (start_of_day(&tz, days_before(today, 7)?)?, end_of_today),
        Preset::Last30Days => (start_of_day(&tz, days_before(today, 30)?)?, end_of_today),
        Preset::Custom => {
            let start = match from {
                Some(d) => start_of_day(&tz, parse_day(d)?)?,
                None => now.with_timezone(&Utc) - TimeDelta::days(30),
            };
            let end = match to {
                Some(d) => end_of_day(&tz, parse_day(d)?)?,
                None => end_of_today,
            };
            (start, end)
        }
    };

    DateRange::new(start, end)
}

fn days_before(day: NaiveDate, n: u64) -> AppResult<NaiveDate> {
    day.checked_sub_days(Days::new(n))
        .ok_or_else(|| AppError::InvalidDate(format!("{day} minus {n} days")))
}

fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> AppResult<DateTime<Utc>> {
    at_local(tz, day, NaiveTime::MIN)
}

fn end_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> AppResult<DateTime<Utc>> {
    let t = NaiveTime::from_hms_opt(23, 59, 59)
        .ok_or_else(|| AppError::InvalidDate("23:59:59".into()))?;
    at_local(tz, day, t)
}

fn at_local<Tz: TimeZone>(tz: &Tz, day: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
    tz.from_local_datetime(&day.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(format!("{day} {time} does not exist locally")))
}
