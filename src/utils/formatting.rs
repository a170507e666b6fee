//! Formatting utilities used for CLI and export outputs.

use crate::utils::date::parse_timestamp;
use chrono::Datelike;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// One decimal, halves rounded up (`1.25` → `1.3`).
///
/// `{:.1}` alone rounds exact halves to the even digit.
pub fn format_one_decimal(x: f64) -> String {
    format!("{:.1}", (x * 10.0).round() / 10.0)
}

/// One decimal and a percent sign, e.g. `87.5%`.
pub fn format_pct(pct: f64) -> String {
    format!("{}%", format_one_decimal(pct))
}

/// `M/D/YYYY` in local time. Missing or unparseable values become `--`.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.and_then(parse_timestamp) {
        Some(dt) => format!("{}/{}/{}", dt.month(), dt.day(), dt.year()),
        None => "--".to_string(),
    }
}

/// `M/D/YYYY HH:MM` in local time, for the terminal table.
pub fn format_date_time(raw: Option<&str>) -> String {
    match raw.and_then(parse_timestamp) {
        Some(dt) => format!(
            "{}/{}/{} {}",
            dt.month(),
            dt.day(),
            dt.year(),
            dt.format("%H:%M")
        ),
        None => "--".to_string(),
    }
}
