//! Navigation abstraction.
//!
//! The host owns the navigation stack; the core only asks for transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::platform::PlatformSendSync;

/// Host navigator
pub trait Navigator: PlatformSendSync {
    /// Show the details screen for a user.
    fn to_user_details(&self, user_id: &str);

    /// Show the details screen for a product.
    fn to_product_details(&self, product_id: &str);

    /// Return to the previous screen.
    fn back(&self);

    /// Return to the home screen.
    fn to_home(&self);
}

/// Destinations the core can request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "id", rename_all = "camelCase")]
pub enum Route {
    Home,
    UserDetails(String),
    ProductDetails(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::UserDetails(id) => write!(f, "user_details/{}", id),
            Route::ProductDetails(id) => write!(f, "product_details/{}", id),
        }
    }
}
