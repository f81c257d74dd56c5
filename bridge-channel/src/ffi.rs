//! uniffi exports for Kotlin and Swift hosts.
//!
//! Android and iOS apps get a typed `FfiSharedSdk` object whose async methods
//! surface as `suspend` functions / `async` methods, plus the string-based
//! `invoke` entry point used by Flutter and React Native plugins. Host
//! services and navigation are foreign-implemented traits.

use crate::codes;
use crate::{ChannelError, MethodChannel};
use bridge_traits::{DeviceInfoProvider, Logger, MessageDisplay, Navigator};
use core_data::{Product, User};
use core_runtime::SdkConfig;
use core_service::{PlatformServices, SharedSdk};
use std::future::Future;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for FfiUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiProduct {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
}

impl From<Product> for FfiProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("{code}: {message}")]
    Call { code: String, message: String },
}

impl From<ChannelError> for FfiError {
    fn from(err: ChannelError) -> Self {
        FfiError::Call {
            code: err.code,
            message: err.message,
        }
    }
}

/// Platform services implemented by the host app.
#[uniffi::export(with_foreign)]
pub trait FfiHostServices: Send + Sync {
    fn log(&self, tag: String, message: String);
    fn show_message(&self, message: String);
    fn platform_name(&self) -> String;
    fn device_info(&self) -> String;
}

/// Screen navigation implemented by the host app.
#[uniffi::export(with_foreign)]
pub trait FfiNavigator: Send + Sync {
    fn to_user_details(&self, user_id: String);
    fn to_product_details(&self, product_id: String);
    fn back(&self);
    fn to_home(&self);
}

struct HostServicesAdapter(Arc<dyn FfiHostServices>);

impl Logger for HostServicesAdapter {
    fn log(&self, tag: &str, message: &str) {
        self.0.log(tag.to_string(), message.to_string());
    }
}

impl MessageDisplay for HostServicesAdapter {
    fn show(&self, message: &str) {
        self.0.show_message(message.to_string());
    }
}

impl DeviceInfoProvider for HostServicesAdapter {
    fn platform_name(&self) -> String {
        self.0.platform_name()
    }

    fn device_info(&self) -> String {
        self.0.device_info()
    }
}

struct NavigatorAdapter(Arc<dyn FfiNavigator>);

impl Navigator for NavigatorAdapter {
    fn to_user_details(&self, user_id: &str) {
        self.0.to_user_details(user_id.to_string());
    }

    fn to_product_details(&self, product_id: &str) {
        self.0.to_product_details(product_id.to_string());
    }

    fn back(&self) {
        self.0.back();
    }

    fn to_home(&self) {
        self.0.to_home();
    }
}

fn build_sdk(
    config: SdkConfig,
    host: Option<Arc<dyn FfiHostServices>>,
    navigator: Option<Arc<dyn FfiNavigator>>,
) -> SharedSdk {
    let mut builder = SharedSdk::builder().config(config);

    if let Some(host) = host {
        let adapter = Arc::new(HostServicesAdapter(host));
        builder = builder.services(
            PlatformServices::new()
                .with_logger(adapter.clone())
                .with_display(adapter.clone())
                .with_device_info(adapter),
        );
    }

    if let Some(navigator) = navigator {
        builder = builder.navigator(Arc::new(NavigatorAdapter(navigator)));
    }

    builder.build()
}

#[derive(uniffi::Object)]
pub struct FfiSharedSdk {
    channel: MethodChannel,
}

impl FfiSharedSdk {
    fn sdk(&self) -> &SharedSdk {
        self.channel.sdk()
    }

    async fn run<T, F>(&self, method: &str, future: F) -> Result<T, FfiError>
    where
        F: Future<Output = core_service::Result<T>>,
    {
        Ok(self.channel.run(method, future).await?)
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl FfiSharedSdk {
    /// Configuration comes from the `SHARED_SDK_*` environment variables.
    #[uniffi::constructor]
    pub fn new(
        host: Option<Arc<dyn FfiHostServices>>,
        navigator: Option<Arc<dyn FfiNavigator>>,
    ) -> Result<Arc<Self>, FfiError> {
        let config = SdkConfig::from_env()
            .map_err(|e| ChannelError::new(codes::INITIALIZE_ERROR, e.to_string()))?;
        Ok(Arc::new(Self {
            channel: MethodChannel::new(build_sdk(config, host, navigator)),
        }))
    }

    /// Explicit configuration. `latency_ms` of `None` keeps the default
    /// per-operation delays; `Some(0)` disables them.
    #[uniffi::constructor]
    pub fn with_settings(
        log_tag: String,
        latency_ms: Option<u64>,
        call_timeout_ms: Option<u64>,
        host: Option<Arc<dyn FfiHostServices>>,
        navigator: Option<Arc<dyn FfiNavigator>>,
    ) -> Result<Arc<Self>, FfiError> {
        let mut builder = SdkConfig::builder().log_tag(log_tag);
        if let Some(ms) = latency_ms {
            builder = builder.latency(core_runtime::LatencyConfig::uniform(
                std::time::Duration::from_millis(ms),
            ));
        }
        if let Some(ms) = call_timeout_ms {
            builder = builder.call_timeout(std::time::Duration::from_millis(ms));
        }
        let config = builder
            .build()
            .map_err(|e| ChannelError::new(codes::INITIALIZE_ERROR, e.to_string()))?;

        Ok(Arc::new(Self {
            channel: MethodChannel::new(build_sdk(config, host, navigator)),
        }))
    }

    pub fn initialize(&self) {
        self.sdk().initialize();
    }

    pub async fn get_users(&self) -> Result<Vec<FfiUser>, FfiError> {
        let users = self.run("getUsers", self.sdk().get_users()).await?;
        Ok(users.into_iter().map(FfiUser::from).collect())
    }

    pub async fn get_user_by_id(&self, user_id: String) -> Result<Option<FfiUser>, FfiError> {
        let user = self.run("getUserById", self.sdk().get_user_by_id(&user_id)).await?;
        Ok(user.map(FfiUser::from))
    }

    pub async fn search_users(&self, query: String) -> Result<Vec<FfiUser>, FfiError> {
        let users = self.run("searchUsers", self.sdk().search_users(&query)).await?;
        Ok(users.into_iter().map(FfiUser::from).collect())
    }

    pub async fn get_products(&self) -> Result<Vec<FfiProduct>, FfiError> {
        let products = self.run("getProducts", self.sdk().get_products()).await?;
        Ok(products.into_iter().map(FfiProduct::from).collect())
    }

    pub async fn get_product_by_id(
        &self,
        product_id: String,
    ) -> Result<Option<FfiProduct>, FfiError> {
        let product = self
            .run("getProductById", self.sdk().get_product_by_id(&product_id))
            .await?;
        Ok(product.map(FfiProduct::from))
    }

    pub async fn search_products(&self, query: String) -> Result<Vec<FfiProduct>, FfiError> {
        let products = self.run("searchProducts", self.sdk().search_products(&query)).await?;
        Ok(products.into_iter().map(FfiProduct::from).collect())
    }

    pub async fn get_products_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<FfiProduct>, FfiError> {
        let pending = self.sdk().get_products_by_price_range(min_price, max_price);
        let products = self.run("getProductsByPriceRange", pending).await?;
        Ok(products.into_iter().map(FfiProduct::from).collect())
    }

    pub fn navigate_to_user_details(&self, user_id: String) {
        self.sdk().navigate_to_user_details(&user_id);
    }

    pub fn navigate_to_product_details(&self, product_id: String) {
        self.sdk().navigate_to_product_details(&product_id);
    }

    pub fn navigate_back(&self) {
        self.sdk().navigate_back();
    }

    pub fn show_message(&self, message: String) {
        self.sdk().show_message(&message);
    }

    pub fn get_platform_info(&self) -> String {
        self.sdk().get_platform_info()
    }

    /// String-based dispatch: JSON object arguments in, JSON result out.
    pub async fn invoke(&self, method: String, arguments_json: String) -> Result<String, FfiError> {
        Ok(self.channel.invoke_json(&method, &arguments_json).await?)
    }

    pub fn methods(&self) -> Vec<String> {
        MethodChannel::methods().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeHost {
        lines: Mutex<Vec<String>>,
        routes: Mutex<Vec<String>>,
    }

    impl FfiHostServices for FakeHost {
        fn log(&self, tag: String, message: String) {
            self.lines.lock().unwrap().push(format!("{}: {}", tag, message));
        }

        fn show_message(&self, message: String) {
            self.lines.lock().unwrap().push(format!("toast: {}", message));
        }

        fn platform_name(&self) -> String {
            "iOS 17.2".to_string()
        }

        fn device_info(&self) -> String {
            "iPhone (iOS 17.2)".to_string()
        }
    }

    impl FfiNavigator for FakeHost {
        fn to_user_details(&self, user_id: String) {
            self.routes.lock().unwrap().push(format!("user/{}", user_id));
        }

        fn to_product_details(&self, product_id: String) {
            self.routes.lock().unwrap().push(format!("product/{}", product_id));
        }

        fn back(&self) {
            self.routes.lock().unwrap().push("back".to_string());
        }

        fn to_home(&self) {
            self.routes.lock().unwrap().push("home".to_string());
        }
    }

    fn sdk(host: &Arc<FakeHost>) -> Arc<FfiSharedSdk> {
        FfiSharedSdk::with_settings(
            "SharedSDK".to_string(),
            Some(0),
            None,
            Some(host.clone()),
            Some(host.clone()),
        )
        .unwrap()
    }

    #[core_async::test]
    async fn test_typed_calls() {
        let host = Arc::new(FakeHost::default());
        let sdk = sdk(&host);

        assert_eq!(sdk.get_users().await.unwrap().len(), 5);
        let speaker = sdk.get_product_by_id("6".into()).await.unwrap().unwrap();
        assert_eq!(speaker.price, 79.99);
        assert!(sdk.get_user_by_id("missing".into()).await.unwrap().is_none());

        let err = sdk.get_products_by_price_range(-1.0, 5.0).await.unwrap_err();
        assert_eq!(
            err,
            FfiError::Call {
                code: "GET_PRODUCTS_BY_PRICE_RANGE_ERROR".into(),
                message: "Minimum price cannot be negative".into(),
            }
        );
    }

    #[core_async::test]
    async fn test_non_finite_price_bounds() {
        let host = Arc::new(FakeHost::default());
        let sdk = sdk(&host);

        let all = sdk.get_products_by_price_range(0.0, f64::INFINITY).await.unwrap();
        assert_eq!(all.len(), 6);

        let err = sdk.get_products_by_price_range(f64::NAN, 1.0).await.unwrap_err();
        assert_eq!(
            err,
            FfiError::Call {
                code: "GET_PRODUCTS_BY_PRICE_RANGE_ERROR".into(),
                message: "Price bounds must be valid numbers".into(),
            }
        );
    }

    #[core_async::test]
    async fn test_host_services_are_bridged() {
        let host = Arc::new(FakeHost::default());
        let sdk = sdk(&host);

        sdk.initialize();
        sdk.show_message("Hello".into());
        sdk.navigate_to_user_details("3".into());
        sdk.navigate_back();

        assert_eq!(sdk.get_platform_info(), "iOS 17.2 - iPhone (iOS 17.2)");
        assert_eq!(
            *host.lines.lock().unwrap(),
            vec![
                "SharedSDK: SDK initialized on iOS 17.2".to_string(),
                "toast: Hello".to_string(),
                "SharedSDK: Navigation to user details: 3".to_string(),
            ]
        );
        assert_eq!(*host.routes.lock().unwrap(), vec!["user/3", "back"]);
    }

    #[core_async::test]
    async fn test_invoke() {
        let host = Arc::new(FakeHost::default());
        let result = sdk(&host)
            .invoke("searchUsers".into(), r#"{"query":"smith"}"#.into())
            .await
            .unwrap();
        assert!(result.contains("Jane Smith"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = FfiSharedSdk::with_settings("SharedSDK".into(), Some(0), Some(0), None, None);
        assert!(matches!(result, Err(FfiError::Call { ref code, .. }) if code == "INITIALIZE_ERROR"));
    }
}
