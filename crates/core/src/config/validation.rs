//! Configuration validation rules.
//!
//! This module provides validation logic for `CacheConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::CacheConfig;
use thiserror::Error;

/// Longest accepted sweep period (24h).
const MAX_SWEEP_INTERVAL_MS: u64 = 86_400_000;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl CacheConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `ttl_ms` is 0
    /// - `sweep_interval_ms` exceeds 24 hours
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_ms == 0 {
            return Err(ConfigError::Invalid { field: "ttl_ms".into(), reason: "must be greater than 0".into() });
        }

        if self.sweep_interval_ms > MAX_SWEEP_INTERVAL_MS {
            return Err(ConfigError::Invalid {
                field: "sweep_interval_ms".into(),
                reason: "must not exceed 24 hours (86400000ms)".into(),
            });
        }

        if self.sweep_interval_ms == 0 {
            tracing::warn!(
                ttl_ms = self.ttl_ms,
                "sweep_interval_ms is 0; expired entries are only reclaimed when looked up again"
            );
        }

        Ok(())
    }
}
