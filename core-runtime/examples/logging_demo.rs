//! Logging demo: tracing output plus a mirrored host console logger.
//!
//! Run with `cargo run -p core-runtime --example logging_demo`.

use bridge_traits::{ConsoleLogger, LogLevel};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use std::sync::Arc;

fn main() -> core_runtime::Result<()> {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_host_logger(Arc::new(ConsoleLogger {
            min_level: LogLevel::Debug,
        }));

    init_logging(config)?;

    tracing::info!(target: "core_service", "SDK initialized on Desktop");
    tracing::debug!(target: "core_data", user_id = "2", email = "jane.smith@example.com", "user found");
    tracing::warn!(target: "bridge_channel", code = "INVALID_ARGUMENT", "userId is required");

    Ok(())
}
