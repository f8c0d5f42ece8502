use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Upper bound on expiry settings (one year). `Instant` arithmetic in the
/// engine must never overflow.
const MAX_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Entity cache configuration.
///
/// Loaded by the process configuration layer and handed to the cache engine
/// at startup. An unusable configuration refuses validation, so the plane
/// fails closed instead of running without a working cache.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Total byte budget for resident cache entries (default: 32 MiB)
    #[serde(default = "default_capacity_bytes")]
    pub capacity_bytes: usize,

    /// Positive-entry expiry in seconds (default: 180)
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,

    /// Absent-result expiry in seconds; 0 disables negative caching
    /// (default: 15)
    #[serde(default = "default_negative_ttl_seconds")]
    pub negative_ttl_seconds: u64,
}

impl CacheConfig {
    /// Parse a `[cache]`-style TOML fragment.
    pub fn from_toml(fragment: &str) -> Result<Self, ConfigError> {
        let config: CacheConfig =
            toml::from_str(fragment).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity_bytes == 0 {
            return Err(ConfigError::InvalidValue(
                "cache capacity_bytes must be greater than zero".to_string(),
            ));
        }
        if self.ttl_seconds == 0 {
            return Err(ConfigError::InvalidValue(
                "cache ttl_seconds must be greater than zero".to_string(),
            ));
        }
        if self.ttl_seconds > MAX_TTL_SECONDS {
            return Err(ConfigError::InvalidValue(format!(
                "cache ttl_seconds must not exceed {MAX_TTL_SECONDS}"
            )));
        }
        if self.negative_ttl_seconds > MAX_TTL_SECONDS {
            return Err(ConfigError::InvalidValue(format!(
                "cache negative_ttl_seconds must not exceed {MAX_TTL_SECONDS}"
            )));
        }
        Ok(())
    }

    pub fn negative_caching_enabled(&self) -> bool {
        self.negative_ttl_seconds > 0
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: default_capacity_bytes(),
            ttl_seconds: default_ttl_seconds(),
            negative_ttl_seconds: default_negative_ttl_seconds(),
        }
    }
}

fn default_capacity_bytes() -> usize {
    32 * 1024 * 1024
}

fn default_ttl_seconds() -> u64 {
    180
}

fn default_negative_ttl_seconds() -> u64 {
    15
}
