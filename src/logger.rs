//! Structured logging to the error stream.
//!
//! Standard output is reserved for result lines, so every message here goes to
//! stderr. Errors and warnings are always shown. Debug, informational and the
//! decorated tree-style messages only appear once debugging is enabled with
//! `--debug` or `debug = true` in the configuration file.

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug, // Intermediate values of a calculation
    Info,  // Status updates
    Warn,  // Non-fatal issues, e.g. an unreadable config file
    Err,   // Per-argument failures
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warning",
            LogLevel::Err => "error",
        }
    }

    /// Whether messages of this level are shown while debugging is disabled.
    fn always_shown(self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Err)
    }
}

/// Main logging interface.
pub struct Log;

impl Log {
    /// Enable or disable debug output.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if debug output is currently enabled.
    pub fn is_debug() -> bool {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }

    /// Render a message with its level prefix, without printing it.
    pub fn format(level: LogLevel, message: &str) -> String {
        format!("{}: {}", level.prefix(), message)
    }

    /// Main log function with level-based prefixes.
    pub fn log(level: LogLevel, message: &str) {
        if !level.always_shown() && !Self::is_debug() {
            return;
        }
        eprintln!("{}", Self::format(level, message));
    }

    // ═══ Convenience Methods for Common Log Levels ═══

    pub fn log_error(message: &str) {
        Self::log(LogLevel::Err, message);
    }

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    pub fn log_info(message: &str) {
        Self::log(LogLevel::Info, message);
    }

    pub fn log_debug(message: &str) {
        Self::log(LogLevel::Debug, message);
    }

    // ═══ Visual Formatting Functions ═══

    /// Log a decorated message with a branching indicator.
    ///
    /// Used to open the debug trace of one location argument.
    pub fn log_decorated(message: &str) {
        if !Self::is_debug() {
            return;
        }
        eprintln!("┣ {}", message);
    }

    /// Log an indented message for details under a decorated line.
    pub fn log_indented(message: &str) {
        if !Self::is_debug() {
            return;
        }
        eprintln!("┃   {}", message);
    }
}
