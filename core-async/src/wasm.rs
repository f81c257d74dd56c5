//! WASM-specific task and timer implementations.

use futures::channel::oneshot;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// Awaitable handle to a task started with [`spawn`].
pub struct JoinHandle<T> {
    rx: oneshot::Receiver<T>,
}

/// The task was dropped before producing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinError;

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("task dropped before completion")
    }
}

impl std::error::Error for JoinError {}

impl<T> Future for JoinHandle<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.rx.poll_unpin(cx).map(|res| res.map_err(|_| JoinError))
    }
}

pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    let (tx, rx) = oneshot::channel();
    wasm_bindgen_futures::spawn_local(async move {
        // receiver gone means nobody is waiting
        let _ = tx.send(future.await);
    });
    JoinHandle { rx }
}

pub async fn yield_now() {
    gloo_timers::future::sleep(Duration::ZERO).await
}

pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await
}

/// Monotonic instant backed by `performance.now()`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    millis: f64,
}

impl Instant {
    pub fn now() -> Self {
        let millis = web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_default();
        Self { millis }
    }

    pub fn elapsed(&self) -> Duration {
        Self::now().duration_since(*self)
    }

    pub fn duration_since(&self, earlier: Instant) -> Duration {
        Duration::from_secs_f64(((self.millis - earlier.millis).max(0.0)) / 1000.0)
    }
}
