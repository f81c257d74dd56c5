//! # Method Channel Bridge
//!
//! One dispatch table shared by every host adapter. Hosts send a method name
//! plus named arguments and get back either a JSON value in the entity wire
//! shape or a [`ChannelError`] with a stable code.
//!
//! ## Wire shapes
//!
//! ```text
//! User:    { "id": string, "name": string, "email": string }
//! Product: { "id": string, "title": string, "description": string, "price": number }
//! ```
//!
//! Lists are arrays in provider order. A not-found lookup is `null`, not an
//! error.
//!
//! ## Methods
//!
//! | Method | Arguments | Result | Error code |
//! |--------|-----------|--------|------------|
//! | `initialize` | | `null` | `INITIALIZE_ERROR` |
//! | `getUsers` | | `User[]` | `GET_USERS_ERROR` |
//! | `getUserById` | `userId` | `User \| null` | `GET_USER_BY_ID_ERROR` |
//! | `searchUsers` | `query?` | `User[]` | `SEARCH_USERS_ERROR` |
//! | `getProducts` | | `Product[]` | `GET_PRODUCTS_ERROR` |
//! | `getProductById` | `productId` | `Product \| null` | `GET_PRODUCT_BY_ID_ERROR` |
//! | `searchProducts` | `query?` | `Product[]` | `SEARCH_PRODUCTS_ERROR` |
//! | `getProductsByPriceRange` | `minPrice`, `maxPrice` | `Product[]` | `GET_PRODUCTS_BY_PRICE_RANGE_ERROR` |
//! | `navigateToUserDetails` | `userId` | `null` | `NAVIGATE_TO_USER_DETAILS_ERROR` |
//! | `navigateToProductDetails` | `productId` | `null` | `NAVIGATE_TO_PRODUCT_DETAILS_ERROR` |
//! | `navigateBack` | | `null` | `NAVIGATE_BACK_ERROR` |
//! | `showMessage` | `message` | `null` | `SHOW_MESSAGE_ERROR` |
//! | `getPlatformInfo` | | `string` | `GET_PLATFORM_INFO_ERROR` |
//!
//! Missing or mistyped arguments fail with `INVALID_ARGUMENT` before the
//! facade runs; unknown methods fail with `NOT_IMPLEMENTED`.
//!
//! ## Feature Flags
//!
//! - `ffi`: uniffi bindings for Kotlin and Swift ([`ffi`])

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

pub mod call;
pub mod channel;
pub mod codes;
pub mod error;
mod operations;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use call::MethodCall;
pub use channel::MethodChannel;
pub use error::{ChannelError, Result};
pub use operations::Operation;
