use super::sequence::DaySequence;
use crate::models::YearMonth;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Month with the strictly highest day count among `dates`.
///
/// Months are scanned in chronological order and only a strictly larger
/// count replaces the leader, so on a tie the earliest month wins.
pub fn plurality_month<I>(dates: I) -> Option<YearMonth>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut counts: BTreeMap<YearMonth, usize> = BTreeMap::new();
    for date in dates {
        *counts.entry(YearMonth::of(date)).or_default() += 1;
    }

    let mut best: Option<(YearMonth, usize)> = None;
    for (month, count) in counts {
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((month, count)),
        }
    }
    best.map(|(month, _)| month)
}

/// Tracks which cells are on screen and the month they mostly show.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    visible: HashSet<usize>,
    viewport_width: usize,
    published: Option<YearMonth>,
}

impl VisibilityTracker {
    pub fn new(viewport_width: usize) -> Self {
        Self {
            visible: HashSet::new(),
            viewport_width,
            published: None,
        }
    }

    /// Seeds the published month from a vote over `dates`, before any cell
    /// has been reported visible.
    pub fn seed<I>(&mut self, dates: I) -> Option<YearMonth>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        if let Some(month) = plurality_month(dates) {
            self.published = Some(month);
        }
        self.published
    }

    pub fn published(&self) -> Option<YearMonth> {
        self.published
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    /// Returns the month published by the re-evaluation, if it ran.
    pub fn appear(&mut self, index: usize, days: &DaySequence) -> Option<YearMonth> {
        self.visible.insert(index);
        self.evaluate(days)
    }

    pub fn disappear(&mut self, index: usize, days: &DaySequence) -> Option<YearMonth> {
        self.visible.remove(&index);
        self.evaluate(days)
    }

    // Cells mount one by one in no particular order; voting on a partial
    // viewport would flash the wrong month.
    fn evaluate(&mut self, days: &DaySequence) -> Option<YearMonth> {
        if self.visible.len() != self.viewport_width {
            return None;
        }
        let dates = self
            .visible
            .iter()
            .filter_map(|&index| days.get(index))
            .map(|day| day.date);
        let winner = plurality_month(dates)?;
        self.published = Some(winner);
        Some(winner)
    }
}
