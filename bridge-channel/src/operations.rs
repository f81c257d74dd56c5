//! The operation table.
//!
//! Every facade operation is one [`Operation`] row: the host-visible method
//! name, the error code its failures carry, and a handler that extracts
//! arguments, calls the facade and encodes the result. Adapters for new hosts
//! reuse the table instead of repeating the branching.

use crate::call::MethodCall;
use crate::codes;
use crate::error::ChannelError;
use core_async::future::{boxed, PlatformBoxFuture};
use core_service::{CoreError, SharedSdk};
use serde::Serialize;
use serde_json::Value;

/// Why a handler failed, before the operation's code is attached.
#[derive(Debug)]
pub(crate) enum Failure {
    /// Bad arguments; reported as `INVALID_ARGUMENT`.
    Argument(ChannelError),
    /// Facade error; reported with the operation's code.
    Core(CoreError),
    /// Result could not be encoded; reported with the operation's code.
    Encode(serde_json::Error),
}

impl From<ChannelError> for Failure {
    fn from(err: ChannelError) -> Self {
        Failure::Argument(err)
    }
}

impl From<CoreError> for Failure {
    fn from(err: CoreError) -> Self {
        Failure::Core(err)
    }
}

impl Failure {
    pub(crate) fn into_channel_error(self, code: &str) -> ChannelError {
        match self {
            Failure::Argument(err) => err,
            Failure::Core(err) => ChannelError::operation(code, &err),
            Failure::Encode(err) => ChannelError::new(code, format!("Failed to encode result: {}", err)),
        }
    }
}

pub(crate) type HandlerResult = Result<Value, Failure>;

type Handler = for<'a> fn(&'a SharedSdk, &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult>;

/// One row of the operation table.
pub struct Operation {
    pub name: &'static str,
    pub error_code: &'static str,
    handler: Handler,
}

impl Operation {
    pub(crate) fn call<'a>(
        &self,
        sdk: &'a SharedSdk,
        call: &'a MethodCall,
    ) -> PlatformBoxFuture<'a, HandlerResult> {
        (self.handler)(sdk, call)
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("error_code", &self.error_code)
            .finish()
    }
}

pub(crate) static OPERATIONS: &[Operation] = &[
    Operation {
        name: "initialize",
        error_code: codes::INITIALIZE_ERROR,
        handler: initialize,
    },
    Operation {
        name: "getUsers",
        error_code: codes::GET_USERS_ERROR,
        handler: get_users,
    },
    Operation {
        name: "getUserById",
        error_code: codes::GET_USER_BY_ID_ERROR,
        handler: get_user_by_id,
    },
    Operation {
        name: "searchUsers",
        error_code: codes::SEARCH_USERS_ERROR,
        handler: search_users,
    },
    Operation {
        name: "getProducts",
        error_code: codes::GET_PRODUCTS_ERROR,
        handler: get_products,
    },
    Operation {
        name: "getProductById",
        error_code: codes::GET_PRODUCT_BY_ID_ERROR,
        handler: get_product_by_id,
    },
    Operation {
        name: "searchProducts",
        error_code: codes::SEARCH_PRODUCTS_ERROR,
        handler: search_products,
    },
    Operation {
        name: "getProductsByPriceRange",
        error_code: codes::GET_PRODUCTS_BY_PRICE_RANGE_ERROR,
        handler: get_products_by_price_range,
    },
    Operation {
        name: "navigateToUserDetails",
        error_code: codes::NAVIGATE_TO_USER_DETAILS_ERROR,
        handler: navigate_to_user_details,
    },
    Operation {
        name: "navigateToProductDetails",
        error_code: codes::NAVIGATE_TO_PRODUCT_DETAILS_ERROR,
        handler: navigate_to_product_details,
    },
    Operation {
        name: "navigateBack",
        error_code: codes::NAVIGATE_BACK_ERROR,
        handler: navigate_back,
    },
    Operation {
        name: "showMessage",
        error_code: codes::SHOW_MESSAGE_ERROR,
        handler: show_message,
    },
    Operation {
        name: "getPlatformInfo",
        error_code: codes::GET_PLATFORM_INFO_ERROR,
        handler: get_platform_info,
    },
];

pub(crate) fn find(method: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == method)
}

fn encode<T: Serialize>(value: T) -> HandlerResult {
    serde_json::to_value(value).map_err(Failure::Encode)
}

fn initialize<'a>(sdk: &'a SharedSdk, _call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        sdk.initialize();
        Ok(Value::Null)
    })
}

fn get_users<'a>(sdk: &'a SharedSdk, _call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move { encode(sdk.get_users().await?) })
}

fn get_user_by_id<'a>(sdk: &'a SharedSdk, call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        let user_id = call.required_str("userId")?;
        encode(sdk.get_user_by_id(user_id).await?)
    })
}

fn search_users<'a>(sdk: &'a SharedSdk, call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        let query = call.optional_str("query")?.unwrap_or_default();
        encode(sdk.search_users(query).await?)
    })
}

fn get_products<'a>(sdk: &'a SharedSdk, _call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move { encode(sdk.get_products().await?) })
}

fn get_product_by_id<'a>(sdk: &'a SharedSdk, call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        let product_id = call.required_str("productId")?;
        encode(sdk.get_product_by_id(product_id).await?)
    })
}

fn search_products<'a>(sdk: &'a SharedSdk, call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        let query = call.optional_str("query")?.unwrap_or_default();
        encode(sdk.search_products(query).await?)
    })
}

fn get_products_by_price_range<'a>(
    sdk: &'a SharedSdk,
    call: &'a MethodCall,
) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        let present = |name: &str| !matches!(call.arguments.get(name), None | Some(Value::Null));
        if !present("minPrice") || !present("maxPrice") {
            return Err(ChannelError::invalid_argument("minPrice and maxPrice are required").into());
        }
        let min_price = call.required_f64("minPrice")?;
        let max_price = call.required_f64("maxPrice")?;
        encode(sdk.get_products_by_price_range(min_price, max_price).await?)
    })
}

fn navigate_to_user_details<'a>(
    sdk: &'a SharedSdk,
    call: &'a MethodCall,
) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        sdk.navigate_to_user_details(call.required_str("userId")?);
        Ok(Value::Null)
    })
}

fn navigate_to_product_details<'a>(
    sdk: &'a SharedSdk,
    call: &'a MethodCall,
) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        sdk.navigate_to_product_details(call.required_str("productId")?);
        Ok(Value::Null)
    })
}

fn navigate_back<'a>(sdk: &'a SharedSdk, _call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        sdk.navigate_back();
        Ok(Value::Null)
    })
}

fn show_message<'a>(sdk: &'a SharedSdk, call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move {
        sdk.show_message(call.required_str("message")?);
        Ok(Value::Null)
    })
}

fn get_platform_info<'a>(sdk: &'a SharedSdk, _call: &'a MethodCall) -> PlatformBoxFuture<'a, HandlerResult> {
    boxed(async move { Ok(Value::String(sdk.get_platform_info())) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_codes_are_unique() {
        let names: HashSet<_> = OPERATIONS.iter().map(|op| op.name).collect();
        let codes: HashSet<_> = OPERATIONS.iter().map(|op| op.error_code).collect();
        assert_eq!(names.len(), OPERATIONS.len());
        assert_eq!(codes.len(), OPERATIONS.len());
        assert_eq!(OPERATIONS.len(), 13);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("getUserById").unwrap().error_code, "GET_USER_BY_ID_ERROR");
        assert!(find("getuserbyid").is_none());
    }

    #[test]
    fn test_failure_mapping() {
        let arg = Failure::from(ChannelError::invalid_argument("userId is required"))
            .into_channel_error(codes::GET_USER_BY_ID_ERROR);
        assert_eq!(arg.code, codes::INVALID_ARGUMENT);

        let core = Failure::from(CoreError::InvalidArgument("Minimum price cannot be negative".into()))
            .into_channel_error(codes::GET_PRODUCTS_BY_PRICE_RANGE_ERROR);
        assert_eq!(core.code, codes::GET_PRODUCTS_BY_PRICE_RANGE_ERROR);
        assert_eq!(core.message, "Minimum price cannot be negative");
    }
}
