// file: src/models/day.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of the day strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub has_content_available: bool,
    // false for alignment padding after today
    pub is_available: bool,
}

impl DayRecord {
    pub fn real(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            has_content_available: false,
            is_available: true,
        }
    }

    pub fn padding(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            has_content_available: false,
            is_available: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        !self.is_available
    }
}
