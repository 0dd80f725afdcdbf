use std::collections::HashMap;
use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;
use self::network::NetworkConfig;

pub mod dictionary;
pub mod log;
pub mod network;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub dictionary: DictionaryConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build the config from the process environment
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults
    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            network: NetworkConfig::from_vars(&vars),
            dictionary: DictionaryConfig::from_vars(&vars),
            log: LogConfig::from_vars(&vars),
        }
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        Self::from_vars(|key| vars.get(key).cloned())
    }
}

/// `true`/`1`/`yes`/`on` in any case, anything else is false
pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
