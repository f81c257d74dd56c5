//! The method channel.

use crate::call::MethodCall;
use crate::error::{ChannelError, Result};
use crate::operations::{self, Operation, OPERATIONS};
use core_service::SharedSdk;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, error, warn, Instrument};
use uuid::Uuid;

/// Dispatches named calls to a [`SharedSdk`].
///
/// Results come back as JSON values in the entity wire shape (`null` for a
/// not-found lookup or an operation without a result). Failures carry a
/// stable code from [`codes`](crate::codes).
///
/// # Example
///
/// ```
/// use bridge_channel::{MethodCall, MethodChannel};
/// use core_runtime::{LatencyConfig, SdkConfig};
/// use core_service::SharedSdk;
///
/// # core_async::runtime::block_on(async {
/// let config = SdkConfig::builder().latency(LatencyConfig::disabled()).build().unwrap();
/// let channel = MethodChannel::new(SharedSdk::in_memory(config));
///
/// let user = channel
///     .invoke(MethodCall::new("getUserById").with_arg("userId", "2"))
///     .await
///     .unwrap();
/// assert_eq!(user["name"], "Jane Smith");
///
/// let err = channel.invoke(MethodCall::new("getUserById")).await.unwrap_err();
/// assert_eq!(err.code, "INVALID_ARGUMENT");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MethodChannel {
    sdk: SharedSdk,
}

impl MethodChannel {
    pub fn new(sdk: SharedSdk) -> Self {
        Self { sdk }
    }

    pub fn sdk(&self) -> &SharedSdk {
        &self.sdk
    }

    /// Every method name the channel answers, in table order.
    pub fn methods() -> impl Iterator<Item = &'static str> {
        OPERATIONS.iter().map(|op| op.name)
    }

    /// Table row for `method`, e.g. to look up its error code.
    pub fn operation(method: &str) -> Option<&'static Operation> {
        operations::find(method)
    }

    /// Run one call.
    ///
    /// # Errors
    /// - `NOT_IMPLEMENTED` for an unknown method
    /// - `INVALID_ARGUMENT` for missing or mistyped arguments (the facade is
    ///   not called)
    /// - `CALL_TIMEOUT` when the configured call timeout elapses
    /// - the operation's own code for any facade failure
    pub async fn invoke(&self, call: MethodCall) -> Result<Value> {
        let Some(operation) = operations::find(&call.method) else {
            warn!(method = %call.method, "Unknown method");
            return Err(ChannelError::not_implemented(&call.method));
        };

        let call_id = Uuid::new_v4();
        let span = tracing::debug_span!("channel_call", method = operation.name, %call_id);

        async {
            debug!("Dispatching call");
            let pending = operation.call(&self.sdk, &call);

            let outcome = match self.sdk.config().call_timeout {
                Some(limit) => match core_async::time::timeout(limit, pending).await {
                    Ok(outcome) => outcome,
                    Err(elapsed) => {
                        warn!(timeout_ms = limit.as_millis() as u64, "Call timed out");
                        return Err(ChannelError::timeout(operation.name, elapsed));
                    }
                },
                None => pending.await,
            };

            outcome.map_err(|failure| {
                let err = failure.into_channel_error(operation.error_code);
                if err.is_invalid_argument() {
                    warn!(message = %err.message, "Rejected call arguments");
                } else {
                    error!(code = %err.code, message = %err.message, "Call failed");
                }
                err
            })
        }
        .instrument(span)
        .await
    }

    /// Run a typed facade future under `method`'s table row.
    ///
    /// For adapters that already hold typed arguments and want typed
    /// results. The call timeout and the error code come from the same
    /// [`Operation`] that [`MethodChannel::invoke`] uses, so both paths
    /// report identically.
    pub async fn run<T, F>(&self, method: &str, future: F) -> Result<T>
    where
        F: Future<Output = core_service::Result<T>>,
    {
        let operation =
            operations::find(method).ok_or_else(|| ChannelError::not_implemented(method))?;

        let outcome = match self.sdk.config().call_timeout {
            Some(limit) => core_async::time::timeout(limit, future)
                .await
                .map_err(|elapsed| ChannelError::timeout(operation.name, elapsed))?,
            None => future.await,
        };

        outcome.map_err(|err| {
            let err = ChannelError::operation(operation.error_code, &err);
            error!(code = %err.code, message = %err.message, "Call failed");
            err
        })
    }

    /// Run one call whose arguments arrive as a JSON object string, returning
    /// the result as a JSON string.
    pub async fn invoke_json(&self, method: &str, arguments: &str) -> Result<String> {
        let call = MethodCall::from_json(method, arguments)?;
        let value = self.invoke(call).await?;
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use core_runtime::{LatencyConfig, SdkConfig};
    use serde_json::json;
    use std::time::Duration;

    fn channel() -> MethodChannel {
        let config = SdkConfig::builder()
            .latency(LatencyConfig::disabled())
            .build()
            .unwrap();
        MethodChannel::new(SharedSdk::in_memory(config))
    }

    #[core_async::test]
    async fn test_unknown_method() {
        let err = channel().invoke(MethodCall::new("deleteUser")).await.unwrap_err();
        assert_eq!(err.code, codes::NOT_IMPLEMENTED);
    }

    #[core_async::test]
    async fn test_not_found_is_null() {
        let value = channel()
            .invoke(MethodCall::new("getProductById").with_arg("productId", "404"))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[core_async::test]
    async fn test_blank_id_uses_operation_code() {
        let err = channel()
            .invoke(MethodCall::new("getUserById").with_arg("userId", " "))
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::GET_USER_BY_ID_ERROR);
        assert_eq!(err.message, "User ID cannot be blank");
    }

    #[core_async::test]
    async fn test_call_timeout() {
        let config = SdkConfig::builder()
            .latency(LatencyConfig::uniform(Duration::from_millis(200)))
            .call_timeout(Duration::from_millis(20))
            .build()
            .unwrap();
        let channel = MethodChannel::new(SharedSdk::in_memory(config));

        let err = channel.invoke(MethodCall::new("getUsers")).await.unwrap_err();
        assert_eq!(err.code, codes::CALL_TIMEOUT);
        assert!(err.message.starts_with("getUsers"));

        // Synchronous operations finish well inside the limit.
        let info = channel.invoke(MethodCall::new("getPlatformInfo")).await.unwrap();
        assert_eq!(info, json!("Unknown Platform"));
    }

    #[core_async::test]
    async fn test_invoke_json() {
        let channel = channel();

        let json = channel
            .invoke_json("searchProducts", r#"{"query":"speaker"}"#)
            .await
            .unwrap();
        let products: Vec<core_data::Product> = serde_json::from_str(&json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "6");

        let null = channel
            .invoke_json("getUserById", r#"{"userId":"nobody"}"#)
            .await
            .unwrap();
        assert_eq!(null, "null");

        let err = channel.invoke_json("getUsers", "not json").await.unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT);
    }

    #[core_async::test]
    async fn test_typed_run_uses_table_code() {
        let channel = channel();

        let all = channel
            .run(
                "getProductsByPriceRange",
                channel.sdk().get_products_by_price_range(0.0, f64::INFINITY),
            )
            .await
            .unwrap();
        assert_eq!(all.len(), 6);

        let err = channel
            .run(
                "getProductsByPriceRange",
                channel.sdk().get_products_by_price_range(f64::NAN, 1.0),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::GET_PRODUCTS_BY_PRICE_RANGE_ERROR);
        assert_eq!(err.message, "Price bounds must be valid numbers");

        let err = channel
            .run("deleteUser", channel.sdk().get_users())
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::NOT_IMPLEMENTED);
    }

    #[core_async::test]
    async fn test_typed_run_times_out() {
        let config = SdkConfig::builder()
            .latency(LatencyConfig::uniform(Duration::from_millis(200)))
            .call_timeout(Duration::from_millis(20))
            .build()
            .unwrap();
        let channel = MethodChannel::new(SharedSdk::in_memory(config));

        let err = channel
            .run("searchUsers", channel.sdk().search_users("doe"))
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::CALL_TIMEOUT);
        assert!(err.message.starts_with("searchUsers"));
    }

    #[test]
    fn test_methods_listed() {
        let methods: Vec<_> = MethodChannel::methods().collect();
        assert_eq!(methods.first(), Some(&"initialize"));
        assert!(methods.contains(&"getProductsByPriceRange"));
        assert_eq!(
            MethodChannel::operation("showMessage").map(|op| op.error_code),
            Some(codes::SHOW_MESSAGE_ERROR)
        );
    }
}
