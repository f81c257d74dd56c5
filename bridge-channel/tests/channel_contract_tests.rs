//! Bridge contract: wire shapes, error codes and async fan-out.

use bridge_channel::{codes, MethodCall, MethodChannel};
use bridge_traits::Navigator;
use core_data::{Product, User};
use core_runtime::{LatencyConfig, SdkConfig};
use core_service::SharedSdk;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

fn config() -> SdkConfig {
    SdkConfig::builder()
        .latency(LatencyConfig::disabled())
        .build()
        .unwrap()
}

fn channel() -> MethodChannel {
    MethodChannel::new(SharedSdk::in_memory(config()))
}

#[derive(Default)]
struct RecordingNavigator {
    calls: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn to_user_details(&self, user_id: &str) {
        self.calls.lock().unwrap().push(format!("user:{}", user_id));
    }

    fn to_product_details(&self, product_id: &str) {
        self.calls.lock().unwrap().push(format!("product:{}", product_id));
    }

    fn back(&self) {
        self.calls.lock().unwrap().push("back".to_string());
    }

    fn to_home(&self) {
        self.calls.lock().unwrap().push("home".to_string());
    }
}

#[core_async::test]
async fn user_wire_shape() {
    let value = channel()
        .invoke(MethodCall::new("getUserById").with_arg("userId", "1"))
        .await
        .unwrap();

    assert_eq!(
        value,
        json!({ "id": "1", "name": "John Doe", "email": "john.doe@example.com" })
    );
}

#[core_async::test]
async fn product_list_wire_shape() {
    let value = channel().invoke(MethodCall::new("getProducts")).await.unwrap();
    let items = value.as_array().unwrap();

    assert_eq!(items.len(), 6);
    for item in items {
        let keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        assert!(item["price"].is_number());
    }
    assert_eq!(items[2]["title"], "Laptop");
}

#[core_async::test]
async fn entities_round_trip_through_the_wire() {
    let channel = channel();

    let users: Vec<User> =
        serde_json::from_value(channel.invoke(MethodCall::new("getUsers")).await.unwrap()).unwrap();
    assert_eq!(users, channel.sdk().get_users().await.unwrap());

    let products: Vec<Product> =
        serde_json::from_value(channel.invoke(MethodCall::new("getProducts")).await.unwrap())
            .unwrap();
    assert_eq!(products, channel.sdk().get_products().await.unwrap());
}

#[core_async::test]
async fn missing_arguments_are_invalid_argument() {
    let channel = channel();

    for method in [
        "getUserById",
        "getProductById",
        "navigateToUserDetails",
        "navigateToProductDetails",
        "showMessage",
    ] {
        let err = channel.invoke(MethodCall::new(method)).await.unwrap_err();
        assert_eq!(err.code, codes::INVALID_ARGUMENT, "{}", method);
    }

    let err = channel
        .invoke(MethodCall::new("getProductsByPriceRange").with_arg("minPrice", 10))
        .await
        .unwrap_err();
    assert_eq!(err.code, codes::INVALID_ARGUMENT);
    assert_eq!(err.message, "minPrice and maxPrice are required");

    let err = channel
        .invoke(MethodCall::new("getUserById").with_arg("userId", json!(["1"])))
        .await
        .unwrap_err();
    assert_eq!(err.code, codes::INVALID_ARGUMENT);
}

#[core_async::test]
async fn validation_failures_carry_operation_codes() {
    let channel = channel();

    let err = channel
        .invoke(
            MethodCall::new("getProductsByPriceRange")
                .with_arg("minPrice", -1)
                .with_arg("maxPrice", 10),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, codes::GET_PRODUCTS_BY_PRICE_RANGE_ERROR);
    assert!(err.message.contains("negative"));

    let err = channel
        .invoke(MethodCall::new("getProductById").with_arg("productId", ""))
        .await
        .unwrap_err();
    assert_eq!(err.code, codes::GET_PRODUCT_BY_ID_ERROR);
    assert_eq!(err.message, "Product ID cannot be blank");
}

#[core_async::test]
async fn missing_query_means_all() {
    let channel = channel();

    let all = channel.invoke(MethodCall::new("getUsers")).await.unwrap();
    let searched = channel.invoke(MethodCall::new("searchUsers")).await.unwrap();
    assert_eq!(all, searched);

    let blank = channel
        .invoke(MethodCall::new("searchProducts").with_arg("query", "   "))
        .await
        .unwrap();
    assert_eq!(blank.as_array().unwrap().len(), 6);
}

#[core_async::test]
async fn price_range_on_sample_catalog() {
    let value = channel()
        .invoke(
            MethodCall::new("getProductsByPriceRange")
                .with_arg("minPrice", 100)
                .with_arg("maxPrice", 300),
        )
        .await
        .unwrap();

    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["1", "4"]);
}

#[core_async::test]
async fn navigation_and_void_operations() {
    let navigator = Arc::new(RecordingNavigator::default());
    let sdk = SharedSdk::builder()
        .config(config())
        .navigator(navigator.clone())
        .build();
    let channel = MethodChannel::new(sdk);

    let calls = [
        MethodCall::new("initialize"),
        MethodCall::new("navigateToUserDetails").with_arg("userId", "2"),
        MethodCall::new("navigateToProductDetails").with_arg("productId", "5"),
        MethodCall::new("navigateBack"),
        MethodCall::new("showMessage").with_arg("message", "hi"),
    ];
    for call in calls {
        assert_eq!(channel.invoke(call).await.unwrap(), Value::Null);
    }

    assert_eq!(
        *navigator.calls.lock().unwrap(),
        vec!["user:2", "product:5", "back"]
    );
    assert_eq!(
        channel.invoke(MethodCall::new("getPlatformInfo")).await.unwrap(),
        json!("Unknown Platform")
    );
}

#[core_async::test]
async fn concurrent_calls_are_independent() {
    let channel = channel();

    let (users, products) = core_async::join!(
        channel.invoke(MethodCall::new("getUsers")),
        channel.invoke(MethodCall::new("getProducts"))
    );
    assert_eq!(users.unwrap().as_array().unwrap().len(), 5);
    assert_eq!(products.unwrap().as_array().unwrap().len(), 6);

    let handles: Vec<_> = (1..=6)
        .map(|id| {
            let channel = channel.clone();
            core_async::spawn(async move {
                channel
                    .invoke(MethodCall::new("getProductById").with_arg("productId", id.to_string()))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let product = handle.await.unwrap().unwrap();
        assert!(product["price"].as_f64().unwrap() > 0.0);
    }
}
