//! Host services backed by JavaScript callbacks.

use bridge_traits::{BridgeError, DeviceInfoProvider, Logger, MessageDisplay, Navigator};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Optional callbacks read from a JS object once, at construction:
///
/// ```javascript
/// {
///   log: (tag, message) => console.log(`[${tag}] ${message}`),
///   showMessage: (message) => toast(message),
///   platformName: () => "Web",
///   deviceInfo: () => navigator.userAgent,
///   toUserDetails: (id) => router.push(`/users/${id}`),
///   toProductDetails: (id) => router.push(`/products/${id}`),
///   back: () => router.back(),
///   toHome: () => router.push("/"),
/// }
/// ```
///
/// Missing entries are skipped. Callback failures are logged and swallowed;
/// host services never fail an SDK call.
#[derive(Debug, Clone, Default)]
pub struct JsHostServices {
    log: Option<Function>,
    show_message: Option<Function>,
    platform_name: Option<Function>,
    device_info: Option<Function>,
    to_user_details: Option<Function>,
    to_product_details: Option<Function>,
    back: Option<Function>,
    to_home: Option<Function>,
}

impl JsHostServices {
    /// Read the known callbacks from `host`.
    pub fn from_object(host: &Object) -> Self {
        Self {
            log: callback(host, "log"),
            show_message: callback(host, "showMessage"),
            platform_name: callback(host, "platformName"),
            device_info: callback(host, "deviceInfo"),
            to_user_details: callback(host, "toUserDetails"),
            to_product_details: callback(host, "toProductDetails"),
            back: callback(host, "back"),
            to_home: callback(host, "toHome"),
        }
    }

    /// True when a `log` callback was provided.
    pub fn has_logger(&self) -> bool {
        self.log.is_some()
    }

    /// True when a `showMessage` callback was provided.
    pub fn has_display(&self) -> bool {
        self.show_message.is_some()
    }

    /// True when `platformName` or `deviceInfo` was provided.
    pub fn has_device_info(&self) -> bool {
        self.platform_name.is_some() || self.device_info.is_some()
    }

    /// True when any navigation callback was provided.
    pub fn has_navigator(&self) -> bool {
        self.to_user_details.is_some()
            || self.to_product_details.is_some()
            || self.back.is_some()
            || self.to_home.is_some()
    }
}

fn callback(host: &Object, name: &str) -> Option<Function> {
    Reflect::get(host, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn invoke(
    name: &str,
    function: Option<&Function>,
    args: &[JsValue],
) -> bridge_traits::Result<JsValue> {
    let function = function.ok_or_else(|| BridgeError::NotAvailable(name.to_string()))?;
    let result = match args {
        [] => function.call0(&JsValue::NULL),
        [a] => function.call1(&JsValue::NULL, a),
        [a, b] => function.call2(&JsValue::NULL, a, b),
        _ => function.apply(&JsValue::NULL, &args.iter().collect::<js_sys::Array>()),
    };
    result.map_err(|err| BridgeError::OperationFailed(format!("{} callback threw: {:?}", name, err)))
}

/// Fire-and-forget callback; host failures never fail an SDK call.
fn notify(name: &str, function: Option<&Function>, args: &[JsValue]) {
    match invoke(name, function, args) {
        Ok(_) | Err(BridgeError::NotAvailable(_)) => {}
        Err(err) => tracing::warn!(error = %err, "Host callback failed"),
    }
}

fn invoke_string(name: &str, function: Option<&Function>, fallback: &str) -> String {
    match invoke(name, function, &[]) {
        Ok(value) => value.as_string().unwrap_or_else(|| fallback.to_string()),
        Err(err) => {
            if !matches!(err, BridgeError::NotAvailable(_)) {
                tracing::warn!(error = %err, "Host callback failed");
            }
            fallback.to_string()
        }
    }
}

impl Logger for JsHostServices {
    fn log(&self, tag: &str, message: &str) {
        notify(
            "log",
            self.log.as_ref(),
            &[JsValue::from_str(tag), JsValue::from_str(message)],
        );
    }
}

impl MessageDisplay for JsHostServices {
    fn show(&self, message: &str) {
        notify("showMessage", self.show_message.as_ref(), &[JsValue::from_str(message)]);
    }
}

impl DeviceInfoProvider for JsHostServices {
    fn platform_name(&self) -> String {
        invoke_string("platformName", self.platform_name.as_ref(), "Web")
    }

    fn device_info(&self) -> String {
        invoke_string("deviceInfo", self.device_info.as_ref(), "Browser")
    }
}

impl Navigator for JsHostServices {
    fn to_user_details(&self, user_id: &str) {
        notify("toUserDetails", self.to_user_details.as_ref(), &[JsValue::from_str(user_id)]);
    }

    fn to_product_details(&self, product_id: &str) {
        notify(
            "toProductDetails",
            self.to_product_details.as_ref(),
            &[JsValue::from_str(product_id)],
        );
    }

    fn back(&self) {
        notify("back", self.back.as_ref(), &[]);
    }

    fn to_home(&self) {
        notify("toHome", self.to_home.as_ref(), &[]);
    }
}
