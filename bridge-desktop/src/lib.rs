//! # Desktop Bridge Implementations
//!
//! Default implementations of the host traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `Logger` forwarding to `tracing` ([`TracingLogger`])
//! - `MessageDisplay` printing to stdout ([`ConsoleMessageDisplay`])
//! - `DeviceInfoProvider` from `std::env::consts` ([`DesktopDeviceInfo`])
//! - `Navigator` keeping an in-memory route history ([`HistoryNavigator`])
//!
//! ## Usage
//!
//! ```
//! use bridge_desktop::{DesktopDeviceInfo, HistoryNavigator};
//! use bridge_traits::{DeviceInfoProvider, Navigator, Route};
//!
//! let device = DesktopDeviceInfo::detect();
//! assert!(!device.platform_name().is_empty());
//!
//! let navigator = HistoryNavigator::new();
//! navigator.to_user_details("1");
//! assert_eq!(navigator.current(), Route::UserDetails("1".into()));
//! ```

mod device;
mod display;
mod logger;
mod navigation;

pub use device::DesktopDeviceInfo;
pub use display::ConsoleMessageDisplay;
pub use logger::TracingLogger;
pub use navigation::HistoryNavigator;
