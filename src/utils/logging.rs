use crate::error::CalendarError;
use chrono::NaiveDate;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::env;
use std::io::Write;

pub fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn init_logging() -> Result<(), SetLoggerError> {
    let level = parse_level(&env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()));

    let mut builder = Builder::from_default_env();
    builder.format(|buf, record| {
        let timestamp = buf.timestamp();
        match record.level() {
            Level::Info => {
                writeln!(buf, "{} [INFO] [{}]: {}", timestamp, record.target(), record.args())
            }
            level => writeln!(
                buf,
                "{} [{}] [{}:{}] {}: {}",
                timestamp,
                level,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.target(),
                record.args()
            ),
        }
    });

    builder.filter_level(level).target(Target::Stdout).try_init()
}

pub fn log_config_error(error: &CalendarError, start: NaiveDate) {
    log::error!(
        "[Calendar] Cannot build strip starting {}, falling back to empty: {}",
        start,
        error
    );
}

pub fn log_strip_summary(days: usize, selectable: usize, month: &str) {
    log::info!("[Calendar] {} cells ({} selectable), showing {}", days, selectable, month);
}
