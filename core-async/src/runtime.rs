//! Runtime utilities that abstract over the underlying async executor.
//!
//! On native targets we wrap Tokio's runtime primitives so that downstream
//! crates never need to depend on Tokio directly. WebAssembly cannot block the
//! browser thread; `block_on` there only completes futures that never wait on
//! a browser API.

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::runtime::{Builder, Handle, Runtime};

/// Runs the provided future to completion on a fresh current-thread runtime.
///
/// # Panics
///
/// Panics if the Tokio runtime cannot be created, which only happens when the
/// process is out of file descriptors or threads.
#[cfg(not(target_arch = "wasm32"))]
pub fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("core_async::runtime::block_on: failed to build Tokio runtime")
        .block_on(future)
}

/// Polls the future on a local executor until it completes.
///
/// Timers and promises never resolve inside this call, so only use it for
/// futures that are ready without touching the event loop.
#[cfg(target_arch = "wasm32")]
pub fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    futures::executor::block_on(future)
}

#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen_futures::spawn_local;
