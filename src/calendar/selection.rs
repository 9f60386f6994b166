use super::sequence::DaySequence;
use crate::models::SelectionChange;
use log::debug;

/// Index of the single selected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    index: usize,
}

impl SelectionState {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves the selection to `index`. Padding and out-of-range cells are
    /// ignored. Re-selecting the current cell succeeds without touching
    /// any record.
    pub fn select(&mut self, days: &mut DaySequence, index: usize) -> Option<SelectionChange> {
        let Some(target) = days.get(index) else {
            debug!("Ignoring tap on out-of-range day {}", index);
            return None;
        };
        if !target.is_available {
            debug!("Ignoring tap on unavailable day {}", target.date);
            return None;
        }

        let previous = self.index;
        if previous != index {
            days.set_selected(previous, false);
            days.set_selected(index, true);
            self.index = index;
        }

        // Moves touching the final cell are not animated
        let last = days.last_index();
        let animated = last != Some(previous) && last != Some(index);

        Some(SelectionChange {
            previous,
            current: index,
            animated,
        })
    }
}
