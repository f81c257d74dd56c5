//! Time-related abstractions.
//!
//! - Native: `tokio::time`
//! - WASM: `gloo-timers` (`setTimeout`) and `performance.now()`
//!
//! [`timeout`] returns the same [`TimeoutError`] on every target so callers
//! can map it without `cfg` branches.
//!
//! ```rust
//! use core_async::time::{sleep, timeout, Duration};
//!
//! # async fn example() {
//! let slow = timeout(Duration::from_millis(10), sleep(Duration::from_secs(1))).await;
//! assert!(slow.is_err());
//! # }
//! ```

use std::fmt;

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::time::sleep;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
pub use crate::wasm::{sleep, Instant};

#[cfg(target_arch = "wasm32")]
pub use std::time::Duration;

/// Returned by [`timeout`] when the deadline elapses first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutError {
    pub after: Duration,
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation timed out after {}ms", self.after.as_millis())
    }
}

impl std::error::Error for TimeoutError {}

/// Requires `future` to complete before `duration` has elapsed.
#[cfg(not(target_arch = "wasm32"))]
pub async fn timeout<F>(duration: Duration, future: F) -> Result<F::Output, TimeoutError>
where
    F: std::future::Future,
{
    tokio::time::timeout(duration, future)
        .await
        .map_err(|_| TimeoutError { after: duration })
}

#[cfg(target_arch = "wasm32")]
pub async fn timeout<F>(duration: Duration, future: F) -> Result<F::Output, TimeoutError>
where
    F: std::future::Future,
{
    use futures::future::{select, Either};

    let future = std::pin::pin!(future);
    let deadline = std::pin::pin!(sleep(duration));
    match select(future, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(TimeoutError { after: duration }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error_display() {
        let err = TimeoutError {
            after: Duration::from_millis(250),
        };
        assert_eq!(err.to_string(), "operation timed out after 250ms");
    }
}
