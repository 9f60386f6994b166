// Horizontal Calendar Library
// State engine behind a horizontally scrolling day picker

pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod scheduler;
pub mod utils;

// Re-export commonly used types
pub use calendar::{CalendarObserver, HorizontalCalendar};
pub use clock::{Clock, FixedClock, StartOfDay, SystemClock};
pub use config::CalendarConfig;
pub use error::{CalendarError, CalendarResult};
pub use models::*;
pub use scheduler::{LocalTaskScheduler, MainQueue, Scheduler};
