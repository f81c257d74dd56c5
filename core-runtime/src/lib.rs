//! # Core Runtime Module
//!
//! Foundational runtime infrastructure shared by every SDK crate:
//! - Configuration (`SdkConfig`, simulated latency, bridge call timeout)
//! - Logging and tracing, optionally mirrored into a host [`Logger`](bridge_traits::Logger)
//!
//! ## Overview
//!
//! Hosts build an [`SdkConfig`](config::SdkConfig) once at startup, optionally
//! call [`init_logging`](logging::init_logging), and hand the config to the
//! SDK builder in `core-service`.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{LatencyConfig, SdkConfig, SdkConfigBuilder};
pub use error::{Error, Result};
