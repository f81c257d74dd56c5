//! Task spawning.
//!
//! - Native: `tokio::task::spawn`; tasks must be `Send`.
//! - WASM: `wasm_bindgen_futures::spawn_local` behind an awaitable
//!   [`JoinHandle`]; tasks only need to be `'static`.
//!
//! ```rust
//! use core_async::task;
//!
//! # async fn example() {
//! let handle = task::spawn(async { 42 });
//! assert_eq!(handle.await.unwrap(), 42);
//! # }
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::task::{yield_now, JoinError, JoinHandle};

/// Spawns a new asynchronous task on the Tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::task::spawn(future)
}

#[cfg(target_arch = "wasm32")]
pub use crate::wasm::{spawn, yield_now, JoinError, JoinHandle};

/// Result type for task operations.
pub type Result<T> = std::result::Result<T, JoinError>;
