//! Host logger backed by `tracing`

use bridge_traits::{LogEntry, LogLevel, Logger, HOST_LOG_TARGET};
use tracing::{debug, error, info, trace, warn};

/// Re-emits host log lines as `tracing` events under [`HOST_LOG_TARGET`], so
/// whatever subscriber the desktop app installed decides where they go.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    min_level: LogLevel,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
        }
    }

    pub fn with_min_level(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn log(&self, tag: &str, message: &str) {
        info!(target: HOST_LOG_TARGET, tag, "{}", message);
    }

    fn log_entry(&self, entry: &LogEntry) {
        let tag = entry.target.as_str();
        let line = entry.render();
        match entry.level {
            LogLevel::Trace => trace!(target: HOST_LOG_TARGET, tag, "{}", line),
            LogLevel::Debug => debug!(target: HOST_LOG_TARGET, tag, "{}", line),
            LogLevel::Info => info!(target: HOST_LOG_TARGET, tag, "{}", line),
            LogLevel::Warn => warn!(target: HOST_LOG_TARGET, tag, "{}", line),
            LogLevel::Error => error!(target: HOST_LOG_TARGET, tag, "{}", line),
        }
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
