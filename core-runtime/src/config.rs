//! # SDK Configuration
//!
//! Settings shared by every layer of the SDK.
//!
//! ## Overview
//!
//! [`SdkConfig`] is built with [`SdkConfigBuilder`] and validated on `build()`.
//! Nothing here is required: an empty builder yields the defaults used by the
//! demo hosts (in-memory data with realistic simulated latency, no bridge call
//! timeout).
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::{LatencyConfig, SdkConfig};
//! use std::time::Duration;
//!
//! let config = SdkConfig::builder()
//!     .log_tag("CatalogSDK")
//!     .latency(LatencyConfig::disabled())
//!     .call_timeout(Duration::from_secs(5))
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.log_tag, "CatalogSDK");
//! assert_eq!(config.call_timeout, Some(Duration::from_secs(5)));
//! ```
//!
//! ## Environment overrides
//!
//! [`SdkConfig::from_env`] starts from the defaults and applies:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `SHARED_SDK_LATENCY` | `off`, `default`, or a uniform delay in ms |
//! | `SHARED_SDK_CALL_TIMEOUT_MS` | bridge call timeout in ms (> 0) |
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::SdkConfig;
//! use std::time::Duration;
//!
//! // A zero timeout would reject every call.
//! SdkConfig::builder()
//!     .call_timeout(Duration::ZERO)
//!     .build()
//!     .expect("Should fail - zero call timeout");
//! ```

use crate::error::{Error, Result};
use std::time::Duration;

/// Tag used for facade diagnostics unless overridden.
pub const DEFAULT_LOG_TAG: &str = "SharedSDK";

/// Upper bound for any simulated delay.
pub const MAX_SIMULATED_LATENCY: Duration = Duration::from_secs(60);

pub const ENV_LATENCY: &str = "SHARED_SDK_LATENCY";
pub const ENV_CALL_TIMEOUT_MS: &str = "SHARED_SDK_CALL_TIMEOUT_MS";

/// Simulated latency applied by the in-memory data providers, per operation.
///
/// Real providers are network or storage backed; the fake ones sleep for these
/// durations so callers keep treating every call as suspending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub list_users: Duration,
    pub find_user: Duration,
    pub search_users: Duration,
    pub list_products: Duration,
    pub find_product: Duration,
    pub search_products: Duration,
    pub products_by_price: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_users: Duration::from_millis(500),
            find_user: Duration::from_millis(300),
            search_users: Duration::from_millis(400),
            list_products: Duration::from_millis(600),
            find_product: Duration::from_millis(300),
            search_products: Duration::from_millis(400),
            products_by_price: Duration::from_millis(500),
        }
    }
}

impl LatencyConfig {
    /// No artificial delay. Calls still go through the async path.
    pub fn disabled() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// The same delay for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list_users: delay,
            find_user: delay,
            search_users: delay,
            list_products: delay,
            find_product: delay,
            search_products: delay,
            products_by_price: delay,
        }
    }

    pub fn is_disabled(&self) -> bool {
        *self == Self::disabled()
    }

    fn longest(&self) -> Duration {
        [
            self.list_users,
            self.find_user,
            self.search_users,
            self.list_products,
            self.find_product,
            self.search_products,
            self.products_by_price,
        ]
        .into_iter()
        .max()
        .unwrap_or(Duration::ZERO)
    }

    pub fn validate(&self) -> Result<()> {
        if self.longest() > MAX_SIMULATED_LATENCY {
            return Err(Error::Config(format!(
                "Simulated latency exceeds maximum of {}ms",
                MAX_SIMULATED_LATENCY.as_millis()
            )));
        }
        Ok(())
    }
}

/// SDK configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Tag for diagnostics emitted through the host logger
    pub log_tag: String,

    /// Simulated latency for in-memory data providers
    pub latency: LatencyConfig,

    /// Deadline applied by bridge adapters to each call; `None` waits forever
    pub call_timeout: Option<Duration>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            log_tag: DEFAULT_LOG_TAG.to_string(),
            latency: LatencyConfig::default(),
            call_timeout: None,
        }
    }
}

impl SdkConfig {
    pub fn builder() -> SdkConfigBuilder {
        SdkConfigBuilder::default()
    }

    /// Defaults with `SHARED_SDK_*` environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SdkConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(raw) = lookup(ENV_LATENCY) {
            builder = builder.latency(parse_latency(raw.trim())?);
        }

        if let Some(raw) = lookup(ENV_CALL_TIMEOUT_MS) {
            let ms = parse_millis(ENV_CALL_TIMEOUT_MS, raw.trim())?;
            builder = builder.call_timeout(Duration::from_millis(ms));
        }

        builder.build()
    }

    /// Validates the configuration.
    ///
    /// This checks:
    /// - The log tag is not blank
    /// - Every simulated delay is at most [`MAX_SIMULATED_LATENCY`]
    /// - The call timeout, when set, is greater than zero
    pub fn validate(&self) -> Result<()> {
        if self.log_tag.trim().is_empty() {
            return Err(Error::Config("Log tag cannot be blank".to_string()));
        }

        self.latency.validate()?;

        if self.call_timeout == Some(Duration::ZERO) {
            return Err(Error::Config(
                "Call timeout must be greater than 0ms".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>().map_err(|_| {
        Error::Config(format!(
            "{} must be a whole number of milliseconds, got '{}'",
            key, raw
        ))
    })
}

fn parse_latency(raw: &str) -> Result<LatencyConfig> {
    match raw.to_ascii_lowercase().as_str() {
        "off" | "none" | "0" => Ok(LatencyConfig::disabled()),
        "default" | "" => Ok(LatencyConfig::default()),
        other => {
            let ms = parse_millis(ENV_LATENCY, other)?;
            Ok(LatencyConfig::uniform(Duration::from_millis(ms)))
        }
    }
}

/// Builder for [`SdkConfig`].
#[derive(Debug, Default)]
pub struct SdkConfigBuilder {
    log_tag: Option<String>,
    latency: Option<LatencyConfig>,
    call_timeout: Option<Duration>,
}

impl SdkConfigBuilder {
    /// Sets the tag used for facade diagnostics.
    pub fn log_tag(mut self, tag: impl Into<String>) -> Self {
        self.log_tag = Some(tag.into());
        self
    }

    /// Sets the simulated provider latency.
    pub fn latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Sets the bridge call timeout.
    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<SdkConfig> {
        let defaults = SdkConfig::default();
        let config = SdkConfig {
            log_tag: self.log_tag.unwrap_or(defaults.log_tag),
            latency: self.latency.unwrap_or(defaults.latency),
            call_timeout: self.call_timeout,
        };
        config.validate()?;
        Ok(config)
    }
}
