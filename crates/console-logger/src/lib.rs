//! Console Logger
//!
//! A `log` backend that writes to the browser console and keeps the most recent
//! records in a fixed-size ring, so the UI can show what happened before a failure.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in the ring
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Browser console logger with a bounded history
pub struct ConsoleLogger {
    level: AtomicUsize,
    capacity: usize,
    ring: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level: AtomicUsize::new(level as usize),
            capacity: capacity.max(1),
            ring: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn level(&self) -> LevelFilter {
        LEVELS[self.level.load(Ordering::Relaxed).min(LEVELS.len() - 1)]
    }

    pub fn set_level(&self, level: LevelFilter) {
        self.level.store(level as usize, Ordering::Relaxed);
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.ring.lock() {
            Ok(ring) => ring.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut ring) = self.ring.lock() {
            if ring.len() == self.capacity {
                ring.pop_front();
            }
            ring.push_back(line);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            Local::now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Change the level of the global logger at runtime
pub fn set_level(level: LevelFilter) {
    if let Some(logger) = LOGGER.get() {
        logger.set_level(level);
    }
    log::set_max_level(level);
}

/// Recent lines from the global logger (empty before `init`)
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

fn format_line(time: DateTime<Local>, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", time.format("%H:%M:%S%.3f"), level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record_at(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_ring_keeps_latest() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            record_at(&logger, Level::Info, &format!("line {}", i));
        }
        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("line 2"));
        assert!(recent[2].ends_with("line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        record_at(&logger, Level::Debug, "hidden");
        record_at(&logger, Level::Error, "shown");
        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("ERROR"));
    }

    #[test]
    fn test_set_level_at_runtime() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        record_at(&logger, Level::Debug, "before");
        logger.set_level(LevelFilter::Debug);
        assert_eq!(logger.level(), LevelFilter::Debug);
        record_at(&logger, Level::Debug, "after");
        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].ends_with("after"));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        record_at(&logger, Level::Info, "a");
        record_at(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_format_line() {
        let time = Local.with_ymd_and_hms(2024, 5, 1, 8, 30, 15).unwrap();
        let line = format_line(time, Level::Info, "api", "GET /items");
        assert_eq!(line, "08:30:15.000 INFO  [api] GET /items");
    }
}
