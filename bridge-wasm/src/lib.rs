//! WebAssembly bindings for the shared SDK
//!
//! Exposes a `SharedSdk` JavaScript class whose methods return Promises and
//! route through the same operation table as every other host
//! (`bridge-channel`). Host services are plain JS callbacks.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It compiles to nothing on native targets.
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::SharedSdkJs;
//! use wasm_bindgen::JsValue;
//!
//! #[wasm_bindgen_test]
//! async fn lists_users() {
//!     let sdk = SharedSdkJs::new(None, JsValue::UNDEFINED).unwrap();
//!     let users = sdk.get_users().await.unwrap();
//!     assert!(js_sys::Array::is_array(&users));
//! }
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod error;
pub mod host;
pub mod sdk;

pub use error::{WasmError, WasmResult};
pub use host::JsHostServices;
pub use sdk::SharedSdkJs;

/// Get the module version
#[wasm_bindgen::prelude::wasm_bindgen(js_name = sdkVersion)]
pub fn sdk_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
