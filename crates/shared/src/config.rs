//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Bookkeeping currency for all accounts of a tenant.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Report cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Schedule generation defaults.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

fn default_currency() -> Currency {
    Currency::Usd
}

/// Report cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached report results.
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
    /// Time-to-live for cached results, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_max_entries() -> u64 {
    100
}

fn default_ttl_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Schedule generation defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Months between the sale date and the first due date.
    #[serde(default = "default_first_due_offset")]
    pub first_due_offset_months: u32,
}

fn default_first_due_offset() -> u32 {
    1
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            first_due_offset_months: default_first_due_offset(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            cache: CacheConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("QIST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.currency, Currency::Usd);
        assert_eq!(config.cache.max_entries, 100);
        assert_eq!(config.cache.ttl_secs, 300);
        assert_eq!(config.schedule.first_due_offset_months, 1);
    }

    #[test]
    fn test_load_from_env() {
        temp_env::with_vars(
            [
                ("QIST__CURRENCY", Some("IQD")),
                ("QIST__CACHE__MAX_ENTRIES", Some("7")),
            ],
            || {
                let config = EngineConfig::load().unwrap();
                assert_eq!(config.currency, Currency::Iqd);
                assert_eq!(config.cache.max_entries, 7);
            },
        );
    }
}
