/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// GREY for the missing-value placeholder, nothing otherwise.
pub fn color_for_optional_field(value: &str) -> Option<&'static str> {
    let v = value.trim();
    if v.is_empty() || v == "--" {
        Some(GREY)
    } else {
        None
    }
}

pub fn color_for_verified(verified: bool) -> &'static str {
    if verified { GREEN } else { RED }
}

/// 100% → green, above half → yellow, otherwise red.
pub fn color_for_pct(pct: f64) -> &'static str {
    if pct >= 100.0 {
        GREEN
    } else if pct >= 50.0 {
        YELLOW
    } else {
        RED
    }
}

/// Unverified count: zero is good news.
pub fn color_for_unverified(count: u32) -> &'static str {
    if count == 0 { GREEN } else { RED }
}

pub fn paint(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}
