//! # Host Bridge Traits
//!
//! Capability traits that every consuming platform implements for the shared
//! SDK core.
//!
//! ## Overview
//!
//! The core never constructs a platform type. Hosts hand it implementations of
//! these traits (or nothing at all) and the core calls them only when present:
//!
//! - [`Logger`](logging::Logger) - tagged diagnostic lines (Logcat, OSLog, console)
//! - [`MessageDisplay`](services::MessageDisplay) - transient user messages (toast, alert)
//! - [`DeviceInfoProvider`](services::DeviceInfoProvider) - platform name and device description
//! - [`Navigator`](navigation::Navigator) - screen transitions owned by the host UI
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation | Status |
//! |----------|----------------|--------|
//! | Desktop  | `bridge-desktop` | ✅ |
//! | Web / React Native (JS) | `bridge-wasm` (JS callbacks) | ✅ |
//! | Android / iOS | `bridge-channel` `ffi` feature (foreign traits) | ✅ |
//!
//! ## Thread Safety
//!
//! On native targets all traits require `Send + Sync` so a single SDK instance
//! can serve concurrent calls. On `wasm32` the bound is dropped because
//! browser objects are single-threaded (see [`platform`]).
//!
//! ## Example
//!
//! ```
//! use bridge_traits::services::DeviceInfoProvider;
//!
//! struct Kiosk;
//!
//! impl DeviceInfoProvider for Kiosk {
//!     fn platform_name(&self) -> String {
//!         "Linux".to_string()
//!     }
//!
//!     fn device_info(&self) -> String {
//!         "Kiosk terminal (x86_64)".to_string()
//!     }
//! }
//! ```

pub mod error;
pub mod logging;
pub mod navigation;
pub mod platform;
pub mod services;

pub use error::BridgeError;

pub use logging::{ConsoleLogger, LogEntry, LogLevel, Logger, HOST_LOG_TARGET};
pub use navigation::{Navigator, Route};
pub use services::{DeviceInfoProvider, MessageDisplay};
