use crate::config::MINIMUM_DAYS;
use crate::error::{CalendarError, CalendarResult};
use crate::models::{DayChange, DayRecord};
use chrono::{Datelike, NaiveDate, Weekday};
use log::{debug, warn};

pub const DAYS_PER_WEEK: usize = 7;

/// Every date from `from` to `to`, both inclusive. Empty when `from > to`.
pub fn dates_between(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    from.iter_days().take_while(|date| *date <= to).collect()
}

/// Position of `date` inside a week that starts on `first_weekday`,
/// numbered 1 through 7.
pub fn relative_weekday(date: NaiveDate, first_weekday: Weekday) -> u32 {
    let raw = date.weekday().num_days_from_monday();
    let first = first_weekday.num_days_from_monday();
    (raw + 7 - first) % 7 + 1
}

/// Ordered day cells, start date through today, followed by any padding
/// needed to finish the last week row.
///
/// Records are only ever mutated in place; every mutation is remembered by
/// index until the renderer drains it.
#[derive(Debug, Clone, Default)]
pub struct DaySequence {
    days: Vec<DayRecord>,
    real_len: usize,
    changed: Vec<usize>,
}

impl DaySequence {
    /// Builds the sequence and selects today.
    pub fn build(
        start: NaiveDate,
        today: NaiveDate,
        first_weekday: Weekday,
    ) -> CalendarResult<Self> {
        if start > today {
            return Err(CalendarError::StartDateInFuture { start, today });
        }

        let mut days: Vec<DayRecord> = dates_between(start, today)
            .into_iter()
            .map(DayRecord::real)
            .collect();
        if days.len() < MINIMUM_DAYS {
            return Err(CalendarError::too_few_days(days.len(), MINIMUM_DAYS));
        }

        let real_len = days.len();
        days[real_len - 1].is_selected = true;

        let mut sequence = Self {
            days,
            real_len,
            changed: Vec::new(),
        };
        sequence.pad_to_week_end(first_weekday);
        debug!(
            "Built day sequence: {} real days, {} padding",
            sequence.real_len,
            sequence.days.len() - sequence.real_len
        );
        Ok(sequence)
    }

    /// Appends unavailable days after today so the final row ends on the
    /// last day of a week.
    fn pad_to_week_end(&mut self, first_weekday: Weekday) {
        let seventh_last = self.days[self.days.len() - DAYS_PER_WEEK];
        let weekday = relative_weekday(seventh_last.date, first_weekday);
        if weekday == 1 {
            return;
        }

        let padding = DAYS_PER_WEEK as u32 - weekday + 1;
        for _ in 0..padding {
            let Some(next) = self.days.last().and_then(|day| day.date.succ_opt()) else {
                warn!("Ran out of representable dates while padding the day sequence");
                return;
            };
            self.days.push(DayRecord::padding(next));
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of selectable days (everything before the padding)
    pub fn real_len(&self) -> usize {
        self.real_len
    }

    pub fn get(&self, index: usize) -> Option<&DayRecord> {
        self.days.get(index)
    }

    pub fn as_slice(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn real_days(&self) -> &[DayRecord] {
        &self.days[..self.real_len]
    }

    pub fn last_index(&self) -> Option<usize> {
        self.days.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.iter()
    }

    pub(crate) fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(day) = self.days.get_mut(index) {
            if day.is_selected != selected {
                day.is_selected = selected;
                self.changed.push(index);
            }
        }
    }

    pub(crate) fn set_content_available(&mut self, index: usize, available: bool) {
        if let Some(day) = self.days.get_mut(index) {
            if day.has_content_available != available {
                day.has_content_available = available;
                self.changed.push(index);
            }
        }
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    /// Cells changed since the last drain, oldest first, one entry per cell
    /// carrying its current contents.
    pub fn drain_changes(&mut self) -> Vec<DayChange> {
        let mut seen = Vec::with_capacity(self.changed.len());
        for index in self.changed.drain(..) {
            if !seen.contains(&index) {
                seen.push(index);
            }
        }
        seen.into_iter()
            .filter_map(|index| {
                self.days
                    .get(index)
                    .map(|record| DayChange { index, record: *record })
            })
            .collect()
    }
}
