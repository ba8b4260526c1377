//! Rolling Logger
//!
//! `log` backend for the browser. Every record goes to the web console
//! (stderr off-wasm) and the newest lines stay available in a bounded
//! circular buffer for in-app diagnostics.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger that keeps the last `capacity` formatted lines
#[derive(Debug)]
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer().iter().cloned().collect()
    }

    /// Buffered lines joined one per line, ready for a clipboard
    pub fn dump(&self) -> String {
        let lines = self.buffer();
        let mut out = String::new();
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn buffer(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, line: String) {
        let mut lines = self.buffer();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Installs the global logger. Fails if any logger is already installed.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// The installed logger, if `init` ran
pub fn global() -> Option<&'static RollingLogger> {
    LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target("test").args(args).build()
    }

    #[test]
    fn test_keeps_newest_lines() {
        let logger = RollingLogger::new(LevelFilter::Debug, 2);
        logger.log(&record(Level::Info, format_args!("one")));
        logger.log(&record(Level::Info, format_args!("two")));
        logger.log(&record(Level::Warn, format_args!("three")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[test] two"));
        assert!(lines[1].contains("WARN"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(LevelFilter::Warn, 8);
        logger.log(&record(Level::Debug, format_args!("hidden")));
        logger.log(&record(Level::Error, format_args!("shown")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("shown"));
    }

    #[test]
    fn test_dump_joins_lines_oldest_first() {
        let logger = RollingLogger::new(LevelFilter::Info, 4);
        assert_eq!(logger.dump(), "");

        logger.log(&record(Level::Info, format_args!("first")));
        logger.log(&record(Level::Error, format_args!("second")));

        let dump = logger.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[test] first"));
        assert!(lines[1].ends_with("[test] second"));
        assert!(dump.ends_with('\n'));
    }

    #[test]
    fn test_global_logger_buffers_log_macros() {
        let logger = init(LevelFilter::Debug, 16).expect("first logger install");
        assert!(std::ptr::eq(logger, global().expect("installed")));

        log::info!(target: "crm", "loaded 3 leads");
        assert!(global().expect("installed").dump().contains("[crm] loaded 3 leads"));
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        logger.log(&record(Level::Info, format_args!("a")));
        logger.log(&record(Level::Info, format_args!("b")));
        assert_eq!(logger.recent().len(), 1);
    }
}
