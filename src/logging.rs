// =====================================================================
// File: logging.rs
// Date: Oct. 16, 2026
//
//! Logging backend for the `log` facade.
//!
//! Records go to stderr as `pid:level-char seconds.millis message`, so
//! the report on stdout stays clean for piping (for example `--json`).
//! Only the harness logs; the index itself is silent.
// =====================================================================
use std::io::Write;
use std::time::SystemTime;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr.
pub struct BenchLogger {
    level: LevelFilter,
}


impl BenchLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    fn format_record(&self, record: &Record) -> String {
        let level_char = match record.level() {
            Level::Error => '!',
            Level::Warn => '#',
            Level::Info => '*',
            Level::Debug => '-',
            Level::Trace => '.',
        };
        format!(
            "{}:{} {} {}\n",
            std::process::id(),
            level_char,
            timestamp(),
            record.args()
        )
    }
}


impl Log for BenchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let formatted = self.format_record(record);
        let _ = std::io::stderr().lock().write_all(formatted.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}


/// Seconds since the epoch with millisecond precision.
fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

/// Install [`BenchLogger`] as the global logger.
///
/// Fails if a logger is already installed.
pub fn init_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(BenchLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}
