//! Configuration management for the Food Finder backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FF__)
//!
//! Directory API keys are separate: they live in a small JSON file
//! (service name -> key) read once at startup. A missing key file
//! degrades the aggregator instead of failing startup.

use anyhow::Result;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;
use tracing::warn;

/// Service name for the restaurant directory in the key file
pub const RESTAURANT_DIRECTORY: &str = "restaurant-directory";
/// Service name for the recipe directory in the key file
pub const RECIPE_DIRECTORY: &str = "recipe-directory";
/// Service name for the nutrition directory in the key file
pub const NUTRITION_DIRECTORY: &str = "nutrition-directory";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub directories: DirectoriesConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// External directory configuration
///
/// Base URLs default to the production hosts; tests point them at a
/// local mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoriesConfig {
    pub restaurant_base_url: String,
    pub recipe_base_url: String,
    pub nutrition_base_url: String,
    /// Path of the JSON file holding the per-service API keys
    pub api_keys_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://food_finder.db".to_string(),
                max_connections: 10,
            },
            directories: DirectoriesConfig {
                restaurant_base_url: "https://developers.zomato.com/api/v2.1".to_string(),
                recipe_base_url: "https://www.food2fork.com".to_string(),
                nutrition_base_url: "https://api.nal.usda.gov".to_string(),
                api_keys_file: "api_keys.json".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FF__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FF__ prefix)
            // e.g., FF__DATABASE__MAX_CONNECTIONS=5 sets database.max_connections
            .add_source(config::Environment::with_prefix("FF").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// API keys for the external directories, loaded once at startup
///
/// Each key is optional: a service whose key is absent stays configured
/// but every call needing that key fails closed to "no result".
#[derive(Default)]
pub struct ApiKeys {
    keys: BTreeMap<String, SecretString>,
}

impl ApiKeys {
    /// Load keys from a JSON file mapping service name to key string
    ///
    /// Never fails: a missing or unreadable file is logged and yields an
    /// empty key set (degraded mode).
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "API key file missing; directory lookups will be degraded");
                return Self::default();
            }
        };

        match serde_json::from_str::<BTreeMap<String, SecretString>>(&raw) {
            Ok(keys) => Self { keys },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "API key file is not valid JSON; directory lookups will be degraded");
                Self::default()
            }
        }
    }

    /// Build a key set directly from (service, key) pairs (mainly for tests)
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            keys: pairs
                .into_iter()
                .map(|(service, key)| (service.into(), SecretString::new(key.into())))
                .collect(),
        }
    }

    /// Look up the key for a service name
    pub fn get(&self, service: &str) -> Option<&SecretString> {
        self.keys.get(service)
    }
}
