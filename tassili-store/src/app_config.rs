use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub data: DataConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the per-key blob files.
    pub dir: String,
}

/// One entry per static collection: an optional remote endpoint and the
/// mandatory local fallback file.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub flights: DataSourceConfig,
    pub hotels: DataSourceConfig,
    pub trips: DataSourceConfig,
    pub activities: DataSourceConfig,
    pub destinations: DataSourceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    pub fallback_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    #[serde(default = "default_max_nights")]
    pub max_nights: u32,
    /// Fixed delay of the simulated payment.
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,
}

fn default_max_guests() -> u32 {
    20
}

fn default_max_nights() -> u32 {
    30
}

fn default_payment_delay_ms() -> u64 {
    2000
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of TASSILI)
            .add_source(config::Environment::with_prefix("TASSILI").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads_with_business_rule_defaults() {
        let config = Config::load().expect("Failed to load default config");
        assert_eq!(config.business_rules.max_guests, 20);
        assert_eq!(config.business_rules.max_nights, 30);
        assert_eq!(config.business_rules.payment_delay_ms, 2000);
        assert!(config.data.flights.endpoint.is_none());
        assert!(config.data.flights.fallback_file.ends_with("flights.json"));
    }
}
