//! The `SharedSdk` JavaScript class.

use crate::error::{channel_error_to_js, to_js, WasmError, WasmResult};
use crate::host::JsHostServices;
use bridge_channel::{MethodCall, MethodChannel};
use core_runtime::{LatencyConfig, SdkConfig};
use core_service::{PlatformServices, SharedSdk};
use js_sys::Object;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Constructor options. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SdkOptions {
    log_tag: Option<String>,
    /// Uniform simulated latency; `0` disables it
    latency_ms: Option<u64>,
    call_timeout_ms: Option<u64>,
}

impl SdkOptions {
    fn from_js(value: JsValue) -> WasmResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| WasmError::InvalidOptions(e.to_string()))
    }

    fn into_config(self) -> WasmResult<SdkConfig> {
        let mut builder = SdkConfig::builder();
        if let Some(tag) = self.log_tag {
            builder = builder.log_tag(tag);
        }
        if let Some(ms) = self.latency_ms {
            builder = builder.latency(LatencyConfig::uniform(Duration::from_millis(ms)));
        }
        if let Some(ms) = self.call_timeout_ms {
            builder = builder.call_timeout(Duration::from_millis(ms));
        }
        builder
            .build()
            .map_err(|e| WasmError::InvalidOptions(e.to_string()))
    }
}

/// Shared SDK for JavaScript hosts (web, React Native through a wasm runtime)
///
/// Every method returns a Promise. Entities resolve to plain objects in the
/// wire shape, not-found lookups resolve to `null`, and failures reject with
/// `{ code, message }`.
///
/// # Example
///
/// ```javascript
/// import { SharedSdk } from './bridge_wasm';
///
/// const sdk = new SharedSdk(
///   { log: (tag, msg) => console.log(tag, msg), platformName: () => "Web" },
///   { latencyMs: 0 },
/// );
/// await sdk.initialize();
///
/// const users = await sdk.searchUsers("doe");
/// try {
///   await sdk.getProductsByPriceRange(50, 10);
/// } catch ({ code, message }) {
///   console.warn(code, message); // GET_PRODUCTS_BY_PRICE_RANGE_ERROR ...
/// }
/// ```
#[wasm_bindgen(js_name = SharedSdk)]
pub struct SharedSdkJs {
    channel: MethodChannel,
}

#[wasm_bindgen(js_class = SharedSdk)]
impl SharedSdkJs {
    /// Create an SDK over the seeded in-memory providers.
    ///
    /// # Arguments
    ///
    /// * `host` - Optional object with host callbacks (see `JsHostServices`)
    /// * `options` - Optional `{ logTag, latencyMs, callTimeoutMs }`
    #[wasm_bindgen(constructor)]
    pub fn new(host: Option<Object>, options: JsValue) -> Result<SharedSdkJs, JsValue> {
        console_error_panic_hook::set_once();

        let config = SdkOptions::from_js(options)?.into_config()?;
        let mut builder = SharedSdk::builder().config(config);

        if let Some(host) = host {
            let host = Arc::new(JsHostServices::from_object(&host));
            let mut services = PlatformServices::new();
            if host.has_logger() {
                services = services.with_logger(host.clone());
            }
            if host.has_display() {
                services = services.with_display(host.clone());
            }
            if host.has_device_info() {
                services = services.with_device_info(host.clone());
            }
            builder = builder.services(services);
            if host.has_navigator() {
                builder = builder.navigator(host);
            }
        }

        Ok(Self {
            channel: MethodChannel::new(builder.build()),
        })
    }

    /// Generic entry point: `invoke("getUserById", { userId: "1" })`.
    pub async fn invoke(&self, method: String, args: JsValue) -> Result<JsValue, JsValue> {
        let arguments = if args.is_undefined() || args.is_null() {
            Map::new()
        } else {
            serde_wasm_bindgen::from_value::<Map<String, Value>>(args).map_err(|e| {
                channel_error_to_js(&bridge_channel::ChannelError::invalid_argument(format!(
                    "Arguments must be an object: {}",
                    e
                )))
            })?
        };
        self.dispatch(MethodCall { method, arguments }).await
    }

    /// Names accepted by `invoke`.
    pub fn methods() -> Vec<String> {
        MethodChannel::methods().map(str::to_string).collect()
    }

    /// Log the platform name to the host logger (first call only).
    pub async fn initialize(&self) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("initialize")).await
    }

    /// All users.
    #[wasm_bindgen(js_name = getUsers)]
    pub async fn get_users(&self) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("getUsers")).await
    }

    /// A user, or `null`.
    #[wasm_bindgen(js_name = getUserById)]
    pub async fn get_user_by_id(&self, user_id: String) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("getUserById").with_arg("userId", user_id))
            .await
    }

    /// Users whose name contains `query`; all users when `query` is blank or omitted.
    #[wasm_bindgen(js_name = searchUsers)]
    pub async fn search_users(&self, query: Option<String>) -> Result<JsValue, JsValue> {
        self.dispatch(with_optional(MethodCall::new("searchUsers"), "query", query))
            .await
    }

    /// All products.
    #[wasm_bindgen(js_name = getProducts)]
    pub async fn get_products(&self) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("getProducts")).await
    }

    /// A product, or `null`.
    #[wasm_bindgen(js_name = getProductById)]
    pub async fn get_product_by_id(&self, product_id: String) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("getProductById").with_arg("productId", product_id))
            .await
    }

    /// Products whose title or description contains `query`.
    #[wasm_bindgen(js_name = searchProducts)]
    pub async fn search_products(&self, query: Option<String>) -> Result<JsValue, JsValue> {
        self.dispatch(with_optional(MethodCall::new("searchProducts"), "query", query))
            .await
    }

    /// Products priced within `[minPrice, maxPrice]`.
    ///
    /// `Infinity` is a valid upper bound. `NaN` rejects with
    /// `GET_PRODUCTS_BY_PRICE_RANGE_ERROR`, as on every other bridge.
    #[wasm_bindgen(js_name = getProductsByPriceRange)]
    pub async fn get_products_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<JsValue, JsValue> {
        // JSON cannot carry non-finite bounds, so skip the generic table path.
        let pending = self.channel.sdk().get_products_by_price_range(min_price, max_price);
        match self.channel.run("getProductsByPriceRange", pending).await {
            Ok(products) => Ok(to_js(&products)?),
            Err(err) => Err(channel_error_to_js(&err)),
        }
    }

    /// Ask the host to show a user's details.
    #[wasm_bindgen(js_name = navigateToUserDetails)]
    pub async fn navigate_to_user_details(&self, user_id: String) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("navigateToUserDetails").with_arg("userId", user_id))
            .await
    }

    /// Ask the host to show a product's details.
    #[wasm_bindgen(js_name = navigateToProductDetails)]
    pub async fn navigate_to_product_details(
        &self,
        product_id: String,
    ) -> Result<JsValue, JsValue> {
        self.dispatch(
            MethodCall::new("navigateToProductDetails").with_arg("productId", product_id),
        )
        .await
    }

    /// Ask the host to go back.
    #[wasm_bindgen(js_name = navigateBack)]
    pub async fn navigate_back(&self) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("navigateBack")).await
    }

    /// Show a transient message through the host.
    #[wasm_bindgen(js_name = showMessage)]
    pub async fn show_message(&self, message: String) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("showMessage").with_arg("message", message))
            .await
    }

    /// `"<platform> - <device>"` or `"Unknown Platform"`.
    #[wasm_bindgen(js_name = getPlatformInfo)]
    pub async fn get_platform_info(&self) -> Result<JsValue, JsValue> {
        self.dispatch(MethodCall::new("getPlatformInfo")).await
    }
}

impl SharedSdkJs {
    async fn dispatch(&self, call: MethodCall) -> Result<JsValue, JsValue> {
        match self.channel.invoke(call).await {
            Ok(value) => Ok(to_js(&value)?),
            Err(err) => Err(channel_error_to_js(&err)),
        }
    }
}

fn with_optional(call: MethodCall, name: &str, value: Option<String>) -> MethodCall {
    match value {
        Some(value) => call.with_arg(name, value),
        None => call,
    }
}
