//! Platform service capabilities.

use crate::platform::PlatformSendSync;

/// Shows a transient message to the user (Android toast, iOS alert, web
/// snackbar). Fire-and-forget: implementations never report failure back to
/// the core.
pub trait MessageDisplay: PlatformSendSync {
    fn show(&self, message: &str);
}

/// Describes the host platform and device.
///
/// # Example
///
/// ```ignore
/// // Android
/// fn platform_name(&self) -> String { format!("Android {}", Build.VERSION.RELEASE) }
/// fn device_info(&self) -> String { format!("{} {} (API {})", MANUFACTURER, MODEL, SDK_INT) }
/// ```
pub trait DeviceInfoProvider: PlatformSendSync {
    /// Platform identifier, e.g. `"iOS 17.2"`.
    fn platform_name(&self) -> String;

    /// Human-readable device description, e.g. `"iPhone (iOS 17.2)"`.
    fn device_info(&self) -> String;
}
