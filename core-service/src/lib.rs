//! Shared SDK facade and bootstrap helpers.
//!
//! This crate sits between the host bridges and the data providers:
//!
//! - [`queries`] validates inputs and applies the default policies
//!   (blank ids rejected, blank search means "everything")
//! - [`SharedSdk`] aggregates the queries behind one entry point and forwards
//!   display, navigation and logging requests to optional host collaborators
//!
//! Desktop apps typically enable the `desktop-shims` feature (which depends on
//! `bridge-desktop`) and call [`bootstrap_desktop`]. Mobile and web hosts build
//! the facade through `bridge-channel` or `bridge-wasm` with their own
//! collaborators.

pub mod error;
pub mod queries;
pub mod sdk;
pub mod services;

pub use error::{CoreError, Result};
pub use sdk::{SharedSdk, SharedSdkBuilder};
pub use services::{PlatformServices, UNKNOWN_PLATFORM};

#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
use std::sync::Arc;

/// Convenience bootstrapper for desktop hosts.
///
/// Wires the `bridge-desktop` collaborators: tracing-backed logger, console
/// message display, std-based device info and an in-memory history navigator.
///
/// ```
/// # #[cfg(feature = "desktop-shims")]
/// # {
/// use core_runtime::{LatencyConfig, SdkConfig};
///
/// let config = SdkConfig::builder()
///     .latency(LatencyConfig::disabled())
///     .build()
///     .unwrap();
/// let sdk = core_service::bootstrap_desktop(config);
/// sdk.initialize();
/// assert!(sdk.get_platform_info().contains(" - "));
/// # }
/// ```
#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
pub fn bootstrap_desktop(config: core_runtime::SdkConfig) -> SharedSdk {
    use bridge_desktop::{ConsoleMessageDisplay, DesktopDeviceInfo, HistoryNavigator, TracingLogger};

    let services = PlatformServices::new()
        .with_logger(Arc::new(TracingLogger::new()))
        .with_display(Arc::new(ConsoleMessageDisplay::new()))
        .with_device_info(Arc::new(DesktopDeviceInfo::detect()));

    SharedSdk::builder()
        .config(config)
        .services(services)
        .navigator(Arc::new(HistoryNavigator::new()))
        .build()
}
