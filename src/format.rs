//! Display strings for day cells and headers.

use crate::models::YearMonth;
use chrono::NaiveDate;

/// Short weekday name, e.g. "Thu"
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Two-digit day of month, e.g. "05"
pub fn date_label(date: NaiveDate) -> String {
    date.format("%d").to_string()
}

/// Headline for the selected day, e.g. "Thursday, Apr 10, 2025"
pub fn selected_day_label(date: NaiveDate) -> String {
    date.format("%A, %b %-d, %Y").to_string()
}

pub fn month_label(month: YearMonth) -> String {
    month.name().to_string()
}
