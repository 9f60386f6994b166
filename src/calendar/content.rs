use super::sequence::DaySequence;
use crate::clock::StartOfDay;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

/// Date to position lookup, built once over the finished sequence.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    positions: HashMap<NaiveDate, usize>,
}

impl ContentIndex {
    pub fn build(days: &DaySequence) -> Self {
        let positions = days
            .iter()
            .enumerate()
            .map(|(index, day)| (day.date, index))
            .collect();
        Self { positions }
    }

    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.positions.get(&date).copied()
    }

    /// Flags every matching day as having content. Dates outside the
    /// sequence are skipped. Returns how many dates matched.
    pub fn mark<I>(&self, days: &mut DaySequence, dates: I) -> usize
    where
        I: IntoIterator,
        I::Item: StartOfDay,
    {
        let mut matched = 0;
        for date in dates {
            let day = date.start_of_day();
            match self.position(day) {
                Some(index) => {
                    days.set_content_available(index, true);
                    matched += 1;
                }
                None => debug!("No day cell for {}, content flag skipped", day),
            }
        }
        matched
    }

    /// Clears the content flag on the day matching `date`, found by scanning
    /// the sequence rather than the index.
    pub fn clear<D: StartOfDay>(days: &mut DaySequence, date: D) -> bool {
        let day = date.start_of_day();
        let found = days.as_slice().iter().position(|record| record.date == day);
        match found {
            Some(index) => {
                days.set_content_available(index, false);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sequence() -> DaySequence {
        DaySequence::build(date(2024, 3, 1), date(2024, 3, 15), Weekday::Sun).unwrap()
    }

    #[test]
    fn test_index_covers_padding() {
        let days = sequence();
        let index = ContentIndex::build(&days);
        assert_eq!(index.position(date(2024, 3, 1)), Some(0));
        assert_eq!(index.position(date(2024, 3, 16)), Some(15));
        assert_eq!(index.position(date(2024, 2, 29)), None);
    }

    #[test]
    fn test_mark_normalizes_time_of_day() {
        let mut days = sequence();
        let index = ContentIndex::build(&days);
        let evening = date(2024, 3, 12).and_hms_opt(21, 15, 0).unwrap();

        let matched = index.mark(&mut days, [evening]);

        assert_eq!(matched, 1);
        assert!(days.get(11).unwrap().has_content_available);
    }

    #[test]
    fn test_mark_skips_unknown_dates() {
        let mut days = sequence();
        let index = ContentIndex::build(&days);

        let matched = index.mark(&mut days, vec![date(2023, 1, 1), date(2024, 3, 2)]);

        assert_eq!(matched, 1);
        assert_eq!(days.iter().filter(|d| d.has_content_available).count(), 1);
    }

    #[test]
    fn test_clear_round_trip() {
        let mut days = sequence();
        let index = ContentIndex::build(&days);
        index.mark(&mut days, [date(2024, 3, 5)]);

        assert!(ContentIndex::clear(&mut days, date(2024, 3, 5)));
        assert!(!days.get(4).unwrap().has_content_available);
        assert!(!ContentIndex::clear(&mut days, date(2030, 1, 1)));
    }

    #[test]
    fn test_clear_normalizes_time_of_day() {
        let mut days = sequence();
        let index = ContentIndex::build(&days);
        index.mark(&mut days, [date(2024, 3, 10)]);
        let last_minute = date(2024, 3, 10).and_hms_opt(23, 59, 0).unwrap();

        assert!(ContentIndex::clear(&mut days, last_minute));
        assert!(!days.get(9).unwrap().has_content_available);
        assert_eq!(days.iter().filter(|d| d.has_content_available).count(), 0);
    }
}
