//! Client configuration.
//!
//! DESIGN
//! ======
//! The deployed contract is fixed per build. Defaults point at the messages
//! variant of the portal; a build may override any field through
//! compile-time environment variables (`option_env!`), since a static WASM
//! bundle has no process environment or config file at runtime.
//!
//! ERROR HANDLING
//! ==============
//! Override parsing is a pure function returning [`ConfigError`]. The start
//! hook initializes logging first, then logs a bad override and keeps the
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use alloy_primitives::{Address, address};

/// Address of the messages-variant portal deployment.
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("0xb97ade93dF52E79D21FF7A7fC41D792C03aa92dC");

/// Interval between `eth_getTransactionReceipt` polls while a wave is mining.
pub const DEFAULT_RECEIPT_POLL_MS: u32 = 1_000;

/// Error returned when a configuration override cannot be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid contract address {0:?}")]
    Address(String),
    #[error("unknown contract variant {0:?} (expected `messages` or `classic`)")]
    Variant(String),
    #[error("invalid receipt poll interval {0:?}")]
    PollInterval(String),
    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

/// Which portal interface the configured address exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// `wave(string)`, `getTotalWaves()`, `getAllWaves()`.
    #[default]
    Messages,
    /// `wave()` and `getTotalWaves()` only; no message, no history.
    Classic,
}

impl Variant {
    /// Whether the contract accepts a message and exposes `getAllWaves`.
    #[must_use]
    pub fn has_history(self) -> bool {
        matches!(self, Self::Messages)
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "messages" => Ok(Self::Messages),
            "classic" => Ok(Self::Classic),
            _ => Err(ConfigError::Variant(s.to_owned())),
        }
    }
}

/// Contract binding settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    pub address: Address,
    pub variant: Variant,
    pub receipt_poll_ms: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTRACT_ADDRESS,
            variant: Variant::Messages,
            receipt_poll_ms: DEFAULT_RECEIPT_POLL_MS,
        }
    }
}

/// Top-level client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub contract: ContractConfig,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { contract: ContractConfig::default(), log_level: log::Level::Debug }
    }
}

/// Raw override values, one per supported build variable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides<'a> {
    pub contract: Option<&'a str>,
    pub variant: Option<&'a str>,
    pub receipt_poll_ms: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

impl AppConfig {
    /// Configuration baked in at compile time.
    ///
    /// Reads `WAVE_PORTAL_CONTRACT`, `WAVE_PORTAL_VARIANT`,
    /// `WAVE_PORTAL_RECEIPT_POLL_MS` and `WAVE_PORTAL_LOG`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a malformed value; callers fall back to
    /// [`AppConfig::default`] once logging is up.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::with_overrides(Overrides {
            contract: option_env!("WAVE_PORTAL_CONTRACT"),
            variant: option_env!("WAVE_PORTAL_VARIANT"),
            receipt_poll_ms: option_env!("WAVE_PORTAL_RECEIPT_POLL_MS"),
            log_level: option_env!("WAVE_PORTAL_LOG"),
        })
    }

    /// Apply overrides on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn with_overrides(overrides: Overrides<'_>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = non_empty(overrides.contract) {
            config.contract.address = Address::from_str(raw).map_err(|_| ConfigError::Address(raw.to_owned()))?;
        }
        if let Some(raw) = non_empty(overrides.variant) {
            config.contract.variant = raw.parse()?;
        }
        if let Some(raw) = non_empty(overrides.receipt_poll_ms) {
            config.contract.receipt_poll_ms = raw
                .parse::<u32>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::PollInterval(raw.to_owned()))?;
        }
        if let Some(raw) = non_empty(overrides.log_level) {
            config.log_level = log::Level::from_str(raw).map_err(|_| ConfigError::LogLevel(raw.to_owned()))?;
        }
        Ok(config)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
