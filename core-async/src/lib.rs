//! Runtime-agnostic async abstraction layer for the shared SDK.
//!
//! Every data operation in the SDK is asynchronous, even when the data is
//! local, so the same code must suspend correctly under two executors:
//! - Native platforms (desktop, Android, iOS through FFI): Tokio
//! - WebAssembly: the browser event loop through `wasm-bindgen-futures`
//!
//! All core-* and bridge-* crates depend on this crate instead of Tokio.
//!
//! # Modules
//!
//! - `task`: task spawning with an awaitable `JoinHandle`
//! - `time`: `sleep`, `timeout`, `Duration`, `Instant`
//! - `future`: fan-out/fan-in helpers (`join`, `try_join`, `join_all`)
//! - `runtime`: `block_on` for synchronous entry points
//!
//! # Examples
//!
//! ```rust
//! use core_async::time::{sleep, Duration};
//!
//! async fn fetch_both() -> (u32, u32) {
//!     let users = async {
//!         sleep(Duration::from_millis(5)).await;
//!         5
//!     };
//!     let products = async {
//!         sleep(Duration::from_millis(5)).await;
//!         6
//!     };
//!     core_async::join!(users, products)
//! }
//! ```

// Re-export the async entry-point/test macros so downstream crates never need
// direct Tokio dependencies.
pub use core_async_macros::{main, test};

#[cfg(target_arch = "wasm32")]
pub mod test_support {
    pub use wasm_bindgen_test::wasm_bindgen_test;
}

pub mod future;
pub mod runtime;
pub mod task;
pub mod time;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use futures::{join, try_join};
pub use task::spawn;
pub use time::{sleep, Duration, Instant};
