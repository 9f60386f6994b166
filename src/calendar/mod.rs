// Day strip state engine
// Builds the week-aligned day sequence and tracks selection, visibility and
// content flags for a horizontally scrolling day picker.

use crate::clock::{Clock, StartOfDay};
use crate::config::CalendarConfig;
use crate::error::CalendarResult;
use crate::format;
use crate::models::{DayChange, DayRecord, SelectionChange, YearMonth};
use crate::scheduler::Scheduler;
use crate::utils::logging::log_config_error;
use chrono::NaiveDate;
use log::{debug, info};
use std::rc::{Rc, Weak};

pub mod content;
pub mod latch;
pub mod observer;
pub mod selection;
pub mod sequence;
pub mod visibility;

pub use content::ContentIndex;
pub use latch::OneShot;
pub use observer::{CalendarObserver, ObserverSlot};
pub use selection::SelectionState;
pub use sequence::{dates_between, relative_weekday, DaySequence, DAYS_PER_WEEK};
pub use visibility::{plurality_month, VisibilityTracker};

pub struct HorizontalCalendar {
    days: DaySequence,
    selection: Option<SelectionState>,
    visibility: VisibilityTracker,
    content: ContentIndex,
    height_latch: OneShot,
    observer: ObserverSlot,
    scheduler: Rc<dyn Scheduler>,
    today: NaiveDate,
    selected_day_text: String,
    prominent_month_text: String,
}

impl HorizontalCalendar {
    /// Builds the day strip from `start` through the clock's today.
    ///
    /// Fails when the start date is after today or leaves fewer than eight
    /// days, or when the config does not validate.
    pub fn new<D: StartOfDay>(
        start: D,
        config: &CalendarConfig,
        clock: &dyn Clock,
        scheduler: Rc<dyn Scheduler>,
    ) -> CalendarResult<Self> {
        config.validate()?;
        let today = clock.today();
        let days = DaySequence::build(start.start_of_day(), today, config.first_weekday)?;

        let mut calendar = Self::empty(config, today, scheduler);
        calendar.content = ContentIndex::build(&days);

        let today_index = days.real_len() - 1;
        calendar.selection = Some(SelectionState::new(today_index));
        calendar.selected_day_text = format::selected_day_label(today);

        // No cell is on screen yet: vote over the final week of real days
        let last_week = days
            .real_days()
            .iter()
            .rev()
            .take(DAYS_PER_WEEK)
            .map(|day| day.date);
        if let Some(month) = calendar.visibility.seed(last_week) {
            calendar.prominent_month_text = format::month_label(month);
        }
        calendar.days = days;

        info!(
            "Calendar built: {} days ({} selectable), today {}, month {}",
            calendar.days.len(),
            calendar.days.real_len(),
            today,
            calendar.prominent_month_text
        );
        Ok(calendar)
    }

    /// Like `new`, but a configuration failure is logged and yields the
    /// empty calendar instead of an error.
    pub fn new_or_empty<D: StartOfDay>(
        start: D,
        config: &CalendarConfig,
        clock: &dyn Clock,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let start = start.start_of_day();
        match Self::new(start, config, clock, scheduler.clone()) {
            Ok(calendar) => calendar,
            Err(e) => {
                log_config_error(&e, start);
                Self::empty(config, clock.today(), scheduler)
            }
        }
    }

    /// A calendar with no days and no selection. Every operation on it is a
    /// no-op.
    pub fn empty(config: &CalendarConfig, today: NaiveDate, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            days: DaySequence::default(),
            selection: None,
            visibility: VisibilityTracker::new(config.viewport_width),
            content: ContentIndex::default(),
            height_latch: OneShot::default(),
            observer: ObserverSlot::default(),
            scheduler,
            today,
            selected_day_text: String::new(),
            prominent_month_text: String::new(),
        }
    }

    // ===== Observer =====

    /// Replaces the observer. Attaching one immediately reports the day
    /// that was auto-selected when the strip was built.
    pub fn set_observer(&mut self, observer: Option<Weak<dyn CalendarObserver>>) {
        self.observer.set(observer);
        let Some(observer) = self.observer.get() else {
            return;
        };
        if let Some(date) = self.initial_date() {
            observer.on_initial_day_auto_selected(date);
        }
    }

    pub fn attach_observer<O: CalendarObserver + 'static>(&mut self, observer: &Rc<O>) {
        let observer: Rc<dyn CalendarObserver> = observer.clone();
        self.set_observer(Some(Rc::downgrade(&observer)));
    }

    pub fn clear_observer(&mut self) {
        self.observer.clear();
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_attached()
    }

    // ===== Renderer input =====

    /// Handles a tap on the cell at `index`. Taps on padding or
    /// out-of-range cells are ignored.
    pub fn select_day(&mut self, index: usize) -> Option<SelectionChange> {
        let selection = self.selection.as_mut()?;
        let change = selection.select(&mut self.days, index)?;
        let date = self.days.get(index)?.date;

        self.selected_day_text = format::selected_day_label(date);
        debug!("Selected {} (from index {})", date, change.previous);
        if let Some(observer) = self.observer.get() {
            observer.on_day_selected(date);
        }
        Some(change)
    }

    pub fn day_appeared(&mut self, index: usize) {
        let Some(date) = self.days.get(index).map(|day| day.date) else {
            debug!("Ignoring appearance of out-of-range day {}", index);
            return;
        };
        let published = self.visibility.appear(index, &self.days);
        self.publish_month(published);
        if let Some(observer) = self.observer.get() {
            observer.on_day_appeared(date);
        }
    }

    pub fn day_disappeared(&mut self, index: usize) {
        if index >= self.days.len() {
            debug!("Ignoring disappearance of out-of-range day {}", index);
            return;
        }
        let published = self.visibility.disappear(index, &self.days);
        self.publish_month(published);
    }

    /// Forwards the first measured height to the observer on the next turn
    /// of the scheduler. Later reports are dropped.
    pub fn report_measured_height(&mut self, height: f64) {
        if !self.height_latch.fire() {
            return;
        }
        debug!("Initial height {} measured, notifying on next turn", height);
        let observer = self.observer.clone();
        self.scheduler.post(Box::new(move || {
            if let Some(observer) = observer.get() {
                observer.on_initial_height_available(height);
            }
        }));
    }

    // ===== Host input =====

    /// Flags the given days as having content. Dates outside the strip are
    /// ignored. Returns how many dates matched a cell.
    pub fn mark_content_available<I>(&mut self, dates: I) -> usize
    where
        I: IntoIterator,
        I::Item: StartOfDay,
    {
        self.content.mark(&mut self.days, dates)
    }

    pub fn clear_content_available<D: StartOfDay>(&mut self, date: D) -> bool {
        ContentIndex::clear(&mut self.days, date)
    }

    // ===== Queries =====

    pub fn days(&self) -> &[DayRecord] {
        self.days.as_slice()
    }

    pub fn day(&self, index: usize) -> Option<&DayRecord> {
        self.days.get(index)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }

    pub fn index_of<D: StartOfDay>(&self, date: D) -> Option<usize> {
        self.content.position(date.start_of_day())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.map(|selection| selection.index())
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_index()
            .and_then(|index| self.days.get(index))
            .map(|day| day.date)
    }

    pub fn selected_day_text(&self) -> &str {
        &self.selected_day_text
    }

    pub fn prominent_month(&self) -> Option<YearMonth> {
        self.visibility.published()
    }

    pub fn prominent_month_text(&self) -> &str {
        &self.prominent_month_text
    }

    pub fn visible_count(&self) -> usize {
        self.visibility.visible_count()
    }

    /// Cells changed since the previous call, one entry per cell.
    pub fn drain_changes(&mut self) -> Vec<DayChange> {
        self.days.drain_changes()
    }

    // ===== Private =====

    // Today, as selected during the build
    fn initial_date(&self) -> Option<NaiveDate> {
        self.days.real_days().last().map(|day| day.date)
    }

    fn publish_month(&mut self, month: Option<YearMonth>) {
        let Some(month) = month else {
            return;
        };
        let text = format::month_label(month);
        if text != self.prominent_month_text {
            info!("Prominent month is now {}", month);
            self.prominent_month_text = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::observer::MockCalendarObserver;
    use super::*;
    use crate::clock::FixedClock;
    use crate::scheduler::MainQueue;
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn build(start: NaiveDate, today: NaiveDate) -> (HorizontalCalendar, MainQueue) {
        let queue = MainQueue::new();
        let calendar = HorizontalCalendar::new(
            start,
            &CalendarConfig::default(),
            &FixedClock(today),
            Rc::new(queue.clone()),
        )
        .unwrap();
        (calendar, queue)
    }

    #[test]
    fn test_new_selects_today() {
        let (calendar, _) = build(date(2024, 1, 1), date(2024, 3, 15));
        assert_eq!(calendar.selected_date(), Some(date(2024, 3, 15)));
        assert_eq!(calendar.selected_day_text(), "Friday, Mar 15, 2024");
        assert_eq!(calendar.prominent_month_text(), "March");
        assert_eq!(calendar.days().iter().filter(|d| d.is_selected).count(), 1);
    }

    #[test]
    fn test_initial_month_ignores_padding() {
        // Tue Jan 2: last real week is Dec 27..Jan 2 (5 December days),
        // padding adds Jan 3..6
        let (calendar, _) = build(date(2023, 11, 1), date(2024, 1, 2));
        assert_eq!(calendar.len() - calendar.days.real_len(), 4);
        assert_eq!(calendar.prominent_month(), Some(YearMonth { year: 2023, month: 12 }));
        assert_eq!(calendar.prominent_month_text(), "December");
    }

    #[test]
    fn test_new_or_empty_degrades() {
        let queue = MainQueue::new();
        let calendar = HorizontalCalendar::new_or_empty(
            date(2024, 3, 12),
            &CalendarConfig::default(),
            &FixedClock(date(2024, 3, 15)),
            Rc::new(queue),
        );
        assert!(calendar.is_empty());
        assert_eq!(calendar.selected_index(), None);
        assert_eq!(calendar.prominent_month_text(), "");
    }

    #[test]
    fn test_empty_calendar_ignores_input() {
        let queue = MainQueue::new();
        let config = CalendarConfig::default();
        let scheduler = Rc::new(queue.clone());
        let mut calendar = HorizontalCalendar::empty(&config, date(2024, 3, 15), scheduler);
        let mut observer = MockCalendarObserver::new();
        observer.expect_on_initial_day_auto_selected().never();
        observer.expect_on_day_selected().never();
        let observer = Rc::new(observer);
        calendar.attach_observer(&observer);

        assert!(calendar.select_day(0).is_none());
        calendar.day_appeared(0);
        calendar.day_disappeared(0);
        assert_eq!(calendar.mark_content_available([date(2024, 3, 15)]), 0);
        assert!(!calendar.clear_content_available(date(2024, 3, 15)));
        assert!(calendar.drain_changes().is_empty());
    }

    #[test]
    fn test_day_lookup_and_today() {
        let (calendar, _) = build(date(2024, 1, 1), date(2024, 3, 15));
        let today = calendar.selected_index().unwrap();

        let record = calendar.day(today).unwrap();
        assert!(calendar.is_today(record.date));
        assert!(record.is_selected && record.is_available);

        // Saturday Mar 16 pads the final week
        let padding = calendar.day(calendar.len() - 1).unwrap();
        assert_eq!(padding.date, date(2024, 3, 16));
        assert!(!calendar.is_today(padding.date));
        assert!(!padding.is_available);
        assert!(calendar.day(calendar.len()).is_none());
    }

    #[test]
    fn test_select_day_notifies_observer() {
        let (mut calendar, _) = build(date(2024, 1, 1), date(2024, 3, 15));
        let mut observer = MockCalendarObserver::new();
        observer.expect_on_initial_day_auto_selected().times(1).return_const(());
        observer
            .expect_on_day_selected()
            .with(eq(date(2024, 1, 3)))
            .times(2)
            .return_const(());
        let observer = Rc::new(observer);
        calendar.attach_observer(&observer);

        calendar.select_day(2).unwrap();
        calendar.select_day(2).unwrap();

        assert_eq!(calendar.selected_index(), Some(2));
        assert_eq!(calendar.selected_day_text(), "Wednesday, Jan 3, 2024");
        assert_eq!(calendar.days().iter().filter(|d| d.is_selected).count(), 1);
    }

    #[test]
    fn test_select_padding_is_silent() {
        let (mut calendar, _) = build(date(2024, 1, 1), date(2024, 3, 15));
        let mut observer = MockCalendarObserver::new();
        observer.expect_on_initial_day_auto_selected().return_const(());
        observer.expect_on_day_selected().never();
        let observer = Rc::new(observer);
        calendar.attach_observer(&observer);

        let padding = calendar.len() - 1;
        assert!(calendar.select_day(padding).is_none());
        assert_eq!(calendar.selected_date(), Some(date(2024, 3, 15)));
    }

    #[test]
    fn test_drain_changes_after_selection() {
        let (mut calendar, _) = build(date(2024, 1, 1), date(2024, 3, 15));
        let today = calendar.selected_index().unwrap();
        calendar.select_day(10);

        let changes = calendar.drain_changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].index, today);
        assert!(!changes[0].record.is_selected);
        assert_eq!(changes[1].index, 10);
        assert!(changes[1].record.is_selected);
    }

    #[test]
    fn test_day_appeared_notifies_every_time() {
        let (mut calendar, _) = build(date(2024, 1, 1), date(2024, 3, 15));
        let mut observer = MockCalendarObserver::new();
        observer.expect_on_initial_day_auto_selected().return_const(());
        observer
            .expect_on_day_appeared()
            .with(eq(date(2024, 1, 1)))
            .times(2)
            .return_const(());
        let observer = Rc::new(observer);
        calendar.attach_observer(&observer);

        calendar.day_appeared(0);
        calendar.day_appeared(0);
        calendar.day_appeared(9999);

        assert_eq!(calendar.visible_count(), 1);
    }

    #[test]
    fn test_height_is_deferred_and_latched() {
        let (mut calendar, queue) = build(date(2024, 1, 1), date(2024, 3, 15));
        let mut observer = MockCalendarObserver::new();
        observer.expect_on_initial_day_auto_selected().return_const(());
        observer
            .expect_on_initial_height_available()
            .with(eq(100.0))
            .times(1)
            .return_const(());
        let observer = Rc::new(observer);
        calendar.attach_observer(&observer);

        calendar.report_measured_height(100.0);
        calendar.report_measured_height(120.0);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.run_pending(), 1);
        calendar.report_measured_height(140.0);
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn test_dropped_observer_is_not_called() {
        let (mut calendar, queue) = build(date(2024, 1, 1), date(2024, 3, 15));
        let mut observer = MockCalendarObserver::new();
        observer.expect_on_initial_day_auto_selected().return_const(());
        let observer = Rc::new(observer);
        calendar.attach_observer(&observer);

        calendar.report_measured_height(80.0);
        drop(observer);

        assert!(!calendar.has_observer());
        assert_eq!(queue.run_pending(), 1);
        assert!(calendar.select_day(3).is_some());
    }
}
