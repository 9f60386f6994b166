// Horizontal Calendar - day strip demo
// Builds a strip on the system clock and prints what a renderer would draw

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use horizontal_calendar::utils::logging::{init_logging, log_strip_summary};
use horizontal_calendar::{
    format, CalendarConfig, CalendarObserver, Clock, HorizontalCalendar, MainQueue, SystemClock,
};
use log::info;
use std::rc::Rc;

struct LoggingObserver;

impl CalendarObserver for LoggingObserver {
    fn on_day_selected(&self, date: NaiveDate) {
        info!("Day tapped: {}", date);
    }

    fn on_initial_height_available(&self, height: f64) {
        info!("Strip height available: {}", height);
    }

    fn on_initial_day_auto_selected(&self, date: NaiveDate) {
        info!("Auto-selected {}", date);
    }
}

fn parse_start(arg: Option<String>, today: NaiveDate) -> Result<NaiveDate> {
    match arg {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Start date '{}' is not YYYY-MM-DD", raw)),
        None => Ok(today - Duration::days(30)),
    }
}

fn main() -> Result<()> {
    init_logging().context("Failed to initialise logging")?;

    let config = CalendarConfig::load().context("Failed to load calendar config")?;
    let clock = SystemClock;
    let today = clock.today();
    let start = parse_start(std::env::args().nth(1), today)?;

    let queue = MainQueue::new();
    let scheduler = Rc::new(queue.clone());
    let mut calendar = HorizontalCalendar::new_or_empty(start, &config, &clock, scheduler);
    if calendar.is_empty() {
        println!("Not enough days from {} to {} for a strip", start, today);
        return Ok(());
    }

    let observer = Rc::new(LoggingObserver);
    calendar.attach_observer(&observer);

    calendar.mark_content_available([3, 7, 10].map(|days_ago| today - Duration::days(days_ago)));

    // First viewport: the final week row
    let first_visible = calendar.len().saturating_sub(config.viewport_width);
    for index in first_visible..calendar.len() {
        calendar.day_appeared(index);
    }
    calendar.report_measured_height(48.0);
    queue.run_pending();

    let selectable = calendar.days().iter().filter(|d| d.is_available).count();
    log_strip_summary(calendar.len(), selectable, calendar.prominent_month_text());

    println!("{}", calendar.prominent_month_text());
    for day in &calendar.days()[first_visible..] {
        let marker = if day.is_selected {
            '*'
        } else if !day.is_available {
            '-'
        } else if day.has_content_available {
            '+'
        } else {
            ' '
        };
        println!("{} {} {}", format::day_label(day.date), format::date_label(day.date), marker);
    }
    println!("{}", calendar.selected_day_text());

    Ok(())
}
