//! Source of "today" for the engine.
//!
//! Nothing in the crate reads the wall clock directly; everything goes
//! through a `Clock` so tests can pin the current date.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Start of the current day
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen on a single date, at midday.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.and_hms_opt(12, 0, 0).unwrap_or_default()
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Normalizes a point in time to the calendar day it falls on.
pub trait StartOfDay {
    fn start_of_day(&self) -> NaiveDate;
}

impl StartOfDay for NaiveDate {
    fn start_of_day(&self) -> NaiveDate {
        *self
    }
}

impl StartOfDay for NaiveDateTime {
    fn start_of_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> StartOfDay for DateTime<Tz> {
    fn start_of_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: StartOfDay + ?Sized> StartOfDay for &T {
    fn start_of_day(&self) -> NaiveDate {
        (**self).start_of_day()
    }
}
