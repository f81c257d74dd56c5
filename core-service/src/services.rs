//! Host collaborators injected into the facade.

use bridge_traits::{DeviceInfoProvider, Logger, MessageDisplay};
use std::sync::Arc;

/// Platform name used when no [`DeviceInfoProvider`] is injected.
pub const UNKNOWN_PLATFORM: &str = "Unknown Platform";

/// Optional platform services. Every field may be absent; the facade skips
/// the corresponding behavior instead of failing.
#[derive(Clone, Default)]
pub struct PlatformServices {
    pub logger: Option<Arc<dyn Logger>>,
    pub display: Option<Arc<dyn MessageDisplay>>,
    pub device_info: Option<Arc<dyn DeviceInfoProvider>>,
}

impl PlatformServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_display(mut self, display: Arc<dyn MessageDisplay>) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_device_info(mut self, device_info: Arc<dyn DeviceInfoProvider>) -> Self {
        self.device_info = Some(device_info);
        self
    }

    /// `"<platform> - <device>"`, or [`UNKNOWN_PLATFORM`].
    pub fn platform_info(&self) -> String {
        match &self.device_info {
            Some(info) => format!("{} - {}", info.platform_name(), info.device_info()),
            None => UNKNOWN_PLATFORM.to_string(),
        }
    }

    pub(crate) fn platform_name(&self) -> String {
        self.device_info
            .as_ref()
            .map(|info| info.platform_name())
            .unwrap_or_else(|| UNKNOWN_PLATFORM.to_string())
    }

    pub(crate) fn log(&self, tag: &str, message: &str) {
        if let Some(logger) = &self.logger {
            logger.log(tag, message);
        }
    }
}

impl std::fmt::Debug for PlatformServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformServices")
            .field("logger", &self.logger.is_some())
            .field("display", &self.display.is_some())
            .field("device_info", &self.device_info.is_some())
            .finish()
    }
}
