//! The `SharedSdk` facade.
//!
//! One entry point aggregating the query operations plus pass-through
//! access to the host's display, navigation and logging collaborators. The
//! facade holds no entity state and performs no error translation; bridge
//! adapters map [`CoreError`](crate::CoreError) to their host conventions.

use crate::error::Result;
use crate::queries::{GetProductByIdQuery, GetProductsQuery, GetUserByIdQuery, GetUsersQuery};
use crate::services::PlatformServices;
use bridge_traits::Navigator;
use core_data::{
    InMemoryProductRepository, InMemoryUserRepository, Product, ProductRepository, User,
    UserRepository,
};
use core_runtime::SdkConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Cross-platform data-access facade.
///
/// Cheap to clone; clones share the same providers and collaborators.
///
/// # Example
///
/// ```
/// use core_runtime::{LatencyConfig, SdkConfig};
/// use core_service::SharedSdk;
///
/// # core_async::runtime::block_on(async {
/// let config = SdkConfig::builder()
///     .latency(LatencyConfig::disabled())
///     .build()
///     .unwrap();
/// let sdk = SharedSdk::builder().config(config).build();
///
/// let cheap = sdk.get_products_by_price_range(0.0, 100.0).await.unwrap();
/// assert_eq!(cheap[0].title, "Bluetooth Speaker");
/// assert_eq!(sdk.get_platform_info(), "Unknown Platform");
/// # });
/// ```
#[derive(Clone)]
pub struct SharedSdk {
    inner: Arc<SdkInner>,
}

struct SdkInner {
    config: SdkConfig,
    get_users: GetUsersQuery,
    get_user_by_id: GetUserByIdQuery,
    get_products: GetProductsQuery,
    get_product_by_id: GetProductByIdQuery,
    services: PlatformServices,
    navigator: Option<Arc<dyn Navigator>>,
    initialized: AtomicBool,
}

impl SharedSdk {
    pub fn builder() -> SharedSdkBuilder {
        SharedSdkBuilder::default()
    }

    /// Seeded in-memory providers and no host collaborators.
    pub fn in_memory(config: SdkConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> &SdkConfig {
        &self.inner.config
    }

    pub fn services(&self) -> &PlatformServices {
        &self.inner.services
    }

    /// Announces the SDK to the host logger. Only the first call logs;
    /// later calls and calls without a logger do nothing.
    pub fn initialize(&self) {
        if self.inner.initialized.swap(true, Ordering::SeqCst) {
            debug!("SDK already initialized");
            return;
        }

        let platform = self.inner.services.platform_name();
        info!(platform = %platform, "SDK initialized");
        self.inner.services.log(
            &self.inner.config.log_tag,
            &format!("SDK initialized on {}", platform),
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::SeqCst)
    }

    // Users

    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.inner.get_users.execute().await
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.inner.get_user_by_id.execute(user_id).await
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        self.inner.get_users.search_by_name(query).await
    }

    // Products

    pub async fn get_products(&self) -> Result<Vec<Product>> {
        self.inner.get_products.execute().await
    }

    pub async fn get_product_by_id(&self, product_id: &str) -> Result<Option<Product>> {
        self.inner.get_product_by_id.execute(product_id).await
    }

    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        self.inner.get_products.search_products(query).await
    }

    pub async fn get_products_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<Product>> {
        self.inner
            .get_products
            .by_price_range(min_price, max_price)
            .await
    }

    // Navigation

    pub fn navigate_to_user_details(&self, user_id: &str) {
        info!(user_id, "Navigate to user details");
        if let Some(navigator) = &self.inner.navigator {
            navigator.to_user_details(user_id);
        }
        self.inner.services.log(
            &self.inner.config.log_tag,
            &format!("Navigation to user details: {}", user_id),
        );
    }

    pub fn navigate_to_product_details(&self, product_id: &str) {
        info!(product_id, "Navigate to product details");
        if let Some(navigator) = &self.inner.navigator {
            navigator.to_product_details(product_id);
        }
        self.inner.services.log(
            &self.inner.config.log_tag,
            &format!("Navigation to product details: {}", product_id),
        );
    }

    pub fn navigate_back(&self) {
        if let Some(navigator) = &self.inner.navigator {
            navigator.back();
        }
    }

    pub fn navigate_home(&self) {
        if let Some(navigator) = &self.inner.navigator {
            navigator.to_home();
        }
    }

    // Platform services

    pub fn show_message(&self, message: &str) {
        if let Some(display) = &self.inner.services.display {
            display.show(message);
        }
    }

    pub fn get_platform_info(&self) -> String {
        self.inner.services.platform_info()
    }
}

impl std::fmt::Debug for SharedSdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSdk")
            .field("config", &self.inner.config)
            .field("services", &self.inner.services)
            .field("navigator", &self.inner.navigator.is_some())
            .finish()
    }
}

/// Builder for [`SharedSdk`].
///
/// Providers default to the seeded in-memory ones using the configured
/// latency. Collaborators default to absent.
#[derive(Default)]
pub struct SharedSdkBuilder {
    config: Option<SdkConfig>,
    users: Option<Arc<dyn UserRepository>>,
    products: Option<Arc<dyn ProductRepository>>,
    services: PlatformServices,
    navigator: Option<Arc<dyn Navigator>>,
}

impl SharedSdkBuilder {
    pub fn config(mut self, config: SdkConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn user_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.users = Some(repository);
        self
    }

    pub fn product_repository(mut self, repository: Arc<dyn ProductRepository>) -> Self {
        self.products = Some(repository);
        self
    }

    pub fn services(mut self, services: PlatformServices) -> Self {
        self.services = services;
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn build(self) -> SharedSdk {
        let config = self.config.unwrap_or_default();
        let latency = config.latency;

        let users = self
            .users
            .unwrap_or_else(|| Arc::new(InMemoryUserRepository::with_latency(latency)));
        let products = self
            .products
            .unwrap_or_else(|| Arc::new(InMemoryProductRepository::with_latency(latency)));

        SharedSdk {
            inner: Arc::new(SdkInner {
                config,
                get_users: GetUsersQuery::new(Arc::clone(&users)),
                get_user_by_id: GetUserByIdQuery::new(users),
                get_products: GetProductsQuery::new(Arc::clone(&products)),
                get_product_by_id: GetProductByIdQuery::new(products),
                services: self.services,
                navigator: self.navigator,
                initialized: AtomicBool::new(false),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{DeviceInfoProvider, Logger, MessageDisplay};
    use core_runtime::LatencyConfig;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        pub Nav {}

        impl Navigator for Nav {
            fn to_user_details(&self, user_id: &str);
            fn to_product_details(&self, product_id: &str);
            fn back(&self);
            fn to_home(&self);
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        lines: Mutex<Vec<(String, String)>>,
        shown: Mutex<Vec<String>>,
    }

    impl Logger for RecordingHost {
        fn log(&self, tag: &str, message: &str) {
            self.lines
                .lock()
                .unwrap()
                .push((tag.to_string(), message.to_string()));
        }
    }

    impl MessageDisplay for RecordingHost {
        fn show(&self, message: &str) {
            self.shown.lock().unwrap().push(message.to_string());
        }
    }

    impl DeviceInfoProvider for RecordingHost {
        fn platform_name(&self) -> String {
            "Android 14".to_string()
        }

        fn device_info(&self) -> String {
            "Pixel 8 (API 34)".to_string()
        }
    }

    fn fast_config() -> SdkConfig {
        SdkConfig::builder()
            .latency(LatencyConfig::disabled())
            .build()
            .unwrap()
    }

    fn sdk_with_host(host: &Arc<RecordingHost>) -> SharedSdk {
        let services = PlatformServices::new()
            .with_logger(host.clone())
            .with_display(host.clone())
            .with_device_info(host.clone());
        SharedSdk::builder()
            .config(fast_config())
            .services(services)
            .build()
    }

    #[test]
    fn test_initialize_logs_once() {
        let host = Arc::new(RecordingHost::default());
        let sdk = sdk_with_host(&host);

        sdk.initialize();
        sdk.initialize();

        let lines = host.lines.lock().unwrap();
        assert_eq!(
            *lines,
            vec![("SharedSDK".to_string(), "SDK initialized on Android 14".to_string())]
        );
        assert!(sdk.is_initialized());
    }

    #[test]
    fn test_initialize_without_collaborators_is_noop() {
        let sdk = SharedSdk::in_memory(fast_config());
        sdk.initialize();
        sdk.show_message("nobody listening");
        sdk.navigate_back();
        assert!(sdk.is_initialized());
    }

    #[test]
    fn test_platform_info() {
        let host = Arc::new(RecordingHost::default());
        assert_eq!(
            sdk_with_host(&host).get_platform_info(),
            "Android 14 - Pixel 8 (API 34)"
        );
        assert_eq!(
            SharedSdk::in_memory(fast_config()).get_platform_info(),
            "Unknown Platform"
        );
    }

    #[test]
    fn test_show_message_delegates() {
        let host = Arc::new(RecordingHost::default());
        sdk_with_host(&host).show_message("Saved");
        assert_eq!(*host.shown.lock().unwrap(), vec!["Saved".to_string()]);
    }

    #[test]
    fn test_navigation_delegates_and_logs() {
        let mut nav = MockNav::new();
        nav.expect_to_user_details()
            .withf(|id| id == "2")
            .times(1)
            .return_const(());
        nav.expect_to_product_details()
            .withf(|id| id == "6")
            .times(1)
            .return_const(());
        nav.expect_back().times(1).return_const(());
        nav.expect_to_home().times(1).return_const(());

        let host = Arc::new(RecordingHost::default());
        let sdk = SharedSdk::builder()
            .config(fast_config())
            .services(PlatformServices::new().with_logger(host.clone()))
            .navigator(Arc::new(nav))
            .build();

        sdk.navigate_to_user_details("2");
        sdk.navigate_to_product_details("6");
        sdk.navigate_back();
        sdk.navigate_home();

        let messages: Vec<String> = host
            .lines
            .lock()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Navigation to user details: 2".to_string(),
                "Navigation to product details: 6".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_log_tag() {
        let host = Arc::new(RecordingHost::default());
        let config = SdkConfig::builder()
            .log_tag("Catalog")
            .latency(LatencyConfig::disabled())
            .build()
            .unwrap();
        let sdk = SharedSdk::builder()
            .config(config)
            .services(PlatformServices::new().with_logger(host.clone()))
            .build();

        sdk.initialize();
        let lines = host.lines.lock().unwrap();
        assert_eq!(lines[0].0, "Catalog");
        assert_eq!(lines[0].1, "SDK initialized on Unknown Platform");
    }

    #[core_async::test]
    async fn test_clones_share_providers() {
        let sdk = SharedSdk::in_memory(fast_config());
        let clone = sdk.clone();
        assert_eq!(sdk.get_users().await.unwrap(), clone.get_users().await.unwrap());
    }
}
