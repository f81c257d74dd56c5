//! Fan-out/fan-in helpers.
//!
//! Independent SDK calls carry no ordering guarantee relative to each other.
//! Callers that need several results join them explicitly:
//!
//! ```rust
//! use core_async::future::join_all;
//!
//! # async fn example() {
//! let lengths = join_all(["a", "bb", "ccc"].into_iter().map(|s| async move { s.len() })).await;
//! assert_eq!(lengths, vec![1, 2, 3]);
//! # }
//! ```

pub use futures::future::{join, join_all, select, try_join, try_join_all, BoxFuture, Either};
pub use futures::future::LocalBoxFuture;
pub use futures::FutureExt;

/// Boxed future that is `Send` on native targets and local on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformBoxFuture<'a, T> = BoxFuture<'a, T>;

#[cfg(target_arch = "wasm32")]
pub type PlatformBoxFuture<'a, T> = LocalBoxFuture<'a, T>;

/// Box a future into a [`PlatformBoxFuture`].
#[cfg(not(target_arch = "wasm32"))]
pub fn boxed<'a, F>(future: F) -> PlatformBoxFuture<'a, F::Output>
where
    F: std::future::Future + Send + 'a,
{
    Box::pin(future)
}

#[cfg(target_arch = "wasm32")]
pub fn boxed<'a, F>(future: F) -> PlatformBoxFuture<'a, F::Output>
where
    F: std::future::Future + 'a,
{
    Box::pin(future)
}
