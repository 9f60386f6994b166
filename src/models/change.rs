// file: src/models/change.rs
use super::day::DayRecord;
use serde::{Deserialize, Serialize};

/// A single cell whose contents changed since the last drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayChange {
    pub index: usize,
    pub record: DayRecord,
}

/// Outcome of a successful tap on a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub previous: usize,
    pub current: usize,
    /// False when the move touches the last cell of the strip
    pub animated: bool,
}

impl SelectionChange {
    pub fn is_reselect(&self) -> bool {
        self.previous == self.current
    }
}
