//! `log` backend that writes to the browser console.

use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;
static INSTALL: Once = Once::new();

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = format!("[{}] {}", record.target(), record.args()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger at `level`. Calls after the first are no-ops,
/// so a level chosen through [`set_level`] survives new boards.
pub fn init(level: LevelFilter) {
    INSTALL.call_once(|| {
        // Another logger may already be installed; keep it and its level
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    });
}

/// Changes the level, installing the console logger first if needed.
pub fn set_level(level: LevelFilter) {
    init(level);
    log::set_max_level(level);
}
