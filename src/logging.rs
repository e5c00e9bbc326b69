#![cfg(feature = "std")]
//! Stderr logger for the binaries, which keep stdout for their JSON output.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "FIVETWELVE_LOG";

// Records from other crates are dropped.
const OWN_TARGETS: &[&str] = &["fivetwelve", "sim"];

struct StderrLogger;

impl StderrLogger {
    fn owns(target: &str) -> bool {
        OWN_TARGETS
            .iter()
            .any(|own| target == *own || target.starts_with(&format!("{own}::")))
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && Self::owns(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A closed stderr must not take the game down with it.
        let _ = writeln!(
            io::stderr().lock(),
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name (`off`, `error` .. `trace`, any case) or its number `0`..=`5`.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(n) => LevelFilter::iter().nth(n),
        Err(_) => raw.parse().ok(),
    }
}

/// Level named by `FIVETWELVE_LOG`, `info` when unset or unparsable.
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level from `FIVETWELVE_LOG`.
/// A second call keeps the first logger.
pub fn init_logging() {
    let level = level_from_env();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
