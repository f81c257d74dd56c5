//! Device information from the standard library

use bridge_traits::DeviceInfoProvider;

/// Platform and device description detected from `std::env::consts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopDeviceInfo {
    platform: String,
    device: String,
}

impl DesktopDeviceInfo {
    /// Detect the current OS, architecture and CPU count.
    pub fn detect() -> Self {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            platform: platform_label(std::env::consts::OS).to_string(),
            device: format!(
                "{} {} ({} cpus)",
                std::env::consts::FAMILY,
                std::env::consts::ARCH,
                cpus
            ),
        }
    }

    /// Fixed values, for tests and kiosks that report a custom identity.
    pub fn fixed(platform: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            device: device.into(),
        }
    }
}

impl Default for DesktopDeviceInfo {
    fn default() -> Self {
        Self::detect()
    }
}

impl DeviceInfoProvider for DesktopDeviceInfo {
    fn platform_name(&self) -> String {
        self.platform.clone()
    }

    fn device_info(&self) -> String {
        self.device.clone()
    }
}

fn platform_label(os: &str) -> &str {
    match os {
        "macos" => "macOS",
        "windows" => "Windows",
        "linux" => "Linux",
        "freebsd" => "FreeBSD",
        other => other,
    }
}
