//! Stable error codes reported to hosts.
//!
//! Hosts switch on these strings, so they never change once published.

/// A required argument is missing, has the wrong type, or the payload is not
/// valid JSON. The facade was not called.
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

/// The method name is not part of the channel.
pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";

/// The configured call timeout elapsed before the facade answered.
pub const CALL_TIMEOUT: &str = "CALL_TIMEOUT";

pub const INITIALIZE_ERROR: &str = "INITIALIZE_ERROR";
pub const GET_USERS_ERROR: &str = "GET_USERS_ERROR";
pub const GET_USER_BY_ID_ERROR: &str = "GET_USER_BY_ID_ERROR";
pub const SEARCH_USERS_ERROR: &str = "SEARCH_USERS_ERROR";
pub const GET_PRODUCTS_ERROR: &str = "GET_PRODUCTS_ERROR";
pub const GET_PRODUCT_BY_ID_ERROR: &str = "GET_PRODUCT_BY_ID_ERROR";
pub const SEARCH_PRODUCTS_ERROR: &str = "SEARCH_PRODUCTS_ERROR";
pub const GET_PRODUCTS_BY_PRICE_RANGE_ERROR: &str = "GET_PRODUCTS_BY_PRICE_RANGE_ERROR";
pub const NAVIGATE_TO_USER_DETAILS_ERROR: &str = "NAVIGATE_TO_USER_DETAILS_ERROR";
pub const NAVIGATE_TO_PRODUCT_DETAILS_ERROR: &str = "NAVIGATE_TO_PRODUCT_DETAILS_ERROR";
pub const NAVIGATE_BACK_ERROR: &str = "NAVIGATE_BACK_ERROR";
pub const SHOW_MESSAGE_ERROR: &str = "SHOW_MESSAGE_ERROR";
pub const GET_PLATFORM_INFO_ERROR: &str = "GET_PLATFORM_INFO_ERROR";
