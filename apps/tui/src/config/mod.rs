use crate::domain::QuantityPolicy;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const ADD_QUANTITY_VAR: &str = "SHOPPING_ADD_QUANTITY";
pub const LOG_FILE_VAR: &str = "SHOPPING_LOG_FILE";
pub const DEBUG_VAR: &str = "DEBUG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHOPPING_ADD_QUANTITY must be \"strict\" or \"lenient\", got \"{0}\"")]
    InvalidQuantityPolicy(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub add_quantity_policy: QuantityPolicy,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl AppConfig {
    /// Builds the configuration from a variable lookup, so tests don't have to
    /// touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let add_quantity_policy = match lookup(ADD_QUANTITY_VAR) {
            Some(value) if !value.trim().is_empty() => QuantityPolicy::parse(&value)
                .ok_or(ConfigError::InvalidQuantityPolicy(value))?,
            _ => QuantityPolicy::default(),
        };

        let log_file = lookup(LOG_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let debug = lookup(DEBUG_VAR).is_some_and(|value| is_truthy(&value));

        Ok(Self {
            add_quantity_policy,
            log_file,
            debug,
        })
    }
}

/// Loads `.env` (if any) and reads the application configuration from the environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
