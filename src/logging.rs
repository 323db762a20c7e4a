#![cfg(feature = "std")]
//! Stderr logger for the game binaries. Quiet by default so log lines do not
//! break up the game screen; set `QBATTLESHIPS_LOG=debug` to trace rounds and
//! see the generated QASM.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "QBATTLESHIPS_LOG";

const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

struct GameLogger {
    level: LevelFilter,
}

impl Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
            && (metadata.level() <= Level::Warn || metadata.target().starts_with(OWN_TARGET))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Level named by `value`, or `warn` when it is missing or not a level.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level from [`LOG_ENV`]. A second call
/// leaves the first logger in place.
pub fn init_logging() {
    let level = log_level(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(GameLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
