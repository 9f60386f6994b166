// Plain data records shared by the engine and the renderer.

pub mod change;
pub mod day;
pub mod month;

pub use change::{DayChange, SelectionChange};
pub use day::DayRecord;
pub use month::YearMonth;
