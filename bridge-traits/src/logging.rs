//! Host logging abstraction.
//!
//! The facade emits tagged diagnostic lines through [`Logger::log`]. The
//! runtime's tracing layer mirrors structured events through
//! [`Logger::log_entry`], so hosts that only understand `tag + message`
//! (Logcat, `NSLog`) still receive them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::platform::PlatformSendSync;

/// Tracing target for lines a host logger re-emits into `tracing`. Layers
/// that mirror events to a host logger skip this target.
pub const HOST_LOG_TARGET: &str = "host";

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Structured log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    /// Emitting module, used as the host log tag
    pub target: String,
    pub message: String,
    /// Structured fields, ordered by key
    pub fields: BTreeMap<String, String>,
    /// Name of the innermost active span
    pub span: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            target: target.into(),
            message: message.into(),
            fields: BTreeMap::new(),
            span: None,
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Message followed by `key=value` pairs.
    pub fn render(&self) -> String {
        let mut line = self.message.clone();
        for (key, value) in &self.fields {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            line.push_str(value);
        }
        line
    }
}

/// Host logger
///
/// - **Android**: `android.util.Log`
/// - **iOS**: `NSLog` / OSLog
/// - **Desktop**: stdout or `tracing`
/// - **Web**: `console.log`
///
/// Implementations must not block; they are called inline from SDK calls.
pub trait Logger: PlatformSendSync {
    /// Write one diagnostic line under `tag`.
    fn log(&self, tag: &str, message: &str);

    /// Forward a structured entry. Defaults to a rendered [`Logger::log`] line.
    fn log_entry(&self, entry: &LogEntry) {
        self.log(&entry.target, &entry.render());
    }

    /// Entries below this level are dropped before reaching the logger.
    fn min_level(&self) -> LogLevel {
        LogLevel::Info
    }
}

/// Console logger for development hosts and examples.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    pub min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
        }
    }
}

impl ConsoleLogger {
    fn format_line(level: LogLevel, timestamp: DateTime<Utc>, tag: &str, message: &str) -> String {
        format!(
            "[{}] {} {}: {}",
            timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            level.as_str(),
            tag,
            message
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, tag: &str, message: &str) {
        println!(
            "{}",
            Self::format_line(LogLevel::Info, Utc::now(), tag, message)
        );
    }

    fn log_entry(&self, entry: &LogEntry) {
        if entry.level >= self.min_level {
            println!(
                "{}",
                Self::format_line(entry.level, entry.timestamp, &entry.target, &entry.render())
            );
        }
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
