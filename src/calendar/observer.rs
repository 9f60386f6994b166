use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Host-side listener for calendar events.
///
/// Only `on_day_selected` is required; the rest default to doing nothing.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarObserver {
    /// A day cell was tapped. Fires again when the already selected day is
    /// tapped.
    fn on_day_selected(&self, date: NaiveDate);

    /// A day cell came on screen. Fires for every report, repeats included,
    /// in whatever order the renderer mounts cells. Useful for loading
    /// content flags page by page.
    fn on_day_appeared(&self, _date: NaiveDate) {}

    /// First layout measurement of the strip. Delivered once, on a later
    /// turn of the host loop, so the host can resize its container.
    fn on_initial_height_available(&self, _height: f64) {}

    /// Today was selected when the strip was built. Fires once per
    /// attachment.
    fn on_initial_day_auto_selected(&self, _date: NaiveDate) {}
}

/// Non-owning, clearable handle to the attached observer.
///
/// Clones share the same slot, so a deferred callback sees whatever
/// observer is attached when it finally runs.
#[derive(Clone, Default)]
pub struct ObserverSlot {
    inner: Rc<RefCell<Option<Weak<dyn CalendarObserver>>>>,
}

impl ObserverSlot {
    pub fn set(&self, observer: Option<Weak<dyn CalendarObserver>>) {
        *self.inner.borrow_mut() = observer;
    }

    pub fn clear(&self) {
        self.set(None);
    }

    /// The observer, if one is attached and still alive
    pub fn get(&self) -> Option<Rc<dyn CalendarObserver>> {
        self.inner.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub fn is_attached(&self) -> bool {
        self.get().is_some()
    }
}
