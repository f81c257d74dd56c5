//! In-memory navigation history

use bridge_traits::{Navigator, Route};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Route stack for desktop shells and tests.
///
/// Starts at [`Route::Home`], which is never popped: `back()` at home does
/// nothing and `to_home()` clears everything above it.
#[derive(Debug)]
pub struct HistoryNavigator {
    stack: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self {
            stack: Mutex::new(vec![Route::Home]),
        }
    }

    /// The route on top of the stack.
    pub fn current(&self) -> Route {
        self.lock().last().cloned().unwrap_or(Route::Home)
    }

    /// Every route from home to the current one.
    pub fn history(&self) -> Vec<Route> {
        self.lock().clone()
    }

    pub fn depth(&self) -> usize {
        self.lock().len()
    }

    fn push(&self, route: Route) {
        debug!(route = %route, "Push route");
        self.lock().push(route);
    }

    // A panic while holding the lock leaves the stack itself intact.
    fn lock(&self) -> MutexGuard<'_, Vec<Route>> {
        self.stack
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for HistoryNavigator {
    fn to_user_details(&self, user_id: &str) {
        self.push(Route::UserDetails(user_id.to_string()));
    }

    fn to_product_details(&self, product_id: &str) {
        self.push(Route::ProductDetails(product_id.to_string()));
    }

    fn back(&self) {
        let mut stack = self.lock();
        if stack.len() > 1 {
            if let Some(route) = stack.pop() {
                debug!(route = %route, "Pop route");
            }
        }
    }

    fn to_home(&self) {
        let mut stack = self.lock();
        stack.truncate(1);
        debug!("Back to home");
    }
}
