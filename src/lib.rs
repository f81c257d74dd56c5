//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (`core-service`, `bridge-channel`, `bridge-wasm`). Host
//! applications can depend on `shared-sdk-workspace` and enable
//! `desktop-shims`, `ffi` or `wasm` without wiring each crate individually.

#[cfg(any(feature = "desktop-shims", feature = "ffi", feature = "wasm"))]
pub use core_service::{CoreError, PlatformServices, SharedSdk};

#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
pub use core_service::bootstrap_desktop;

#[cfg(feature = "ffi")]
pub use bridge_channel::{ffi, ChannelError, MethodCall, MethodChannel};

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use bridge_wasm::SharedSdkJs;
