use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Start date {start} is after today ({today})")]
    StartDateInFuture { start: NaiveDate, today: NaiveDate },

    #[error("Calendar needs at least {minimum} days up to today, got {count}")]
    TooFewDays { count: usize, minimum: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CalendarError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn too_few_days(count: usize, minimum: usize) -> Self {
        Self::TooFewDays { count, minimum }
    }

    /// True for failures caused by the start date / viewport configuration,
    /// as opposed to failures reading a config file.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::StartDateInFuture { .. } | Self::TooFewDays { .. } | Self::Config(_) => true,
            Self::Io(_) | Self::Parse(_) => false,
        }
    }
}

pub type CalendarResult<T> = Result<T, CalendarError>;
