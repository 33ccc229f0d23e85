//! Short human-readable date formatting ("Jan 1st 24")

use chrono::{Datelike, NaiveDate};

/// English ordinal suffix for a day of month.
///
/// 11, 12 and 13 take "th" regardless of their last digit.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Format a date as abbreviated month, ordinal day and two-digit year,
/// e.g. "Dec 23rd 24".
pub fn short_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{} {}",
        date.format("%b"),
        day,
        ordinal_suffix(day),
        date.format("%y")
    )
}
