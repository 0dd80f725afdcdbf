use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_body_limit_bytes() -> usize {
    64 * 1024
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Largest request body accepted
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl NetworkConfig {
    pub fn from_vars(vars: &impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = vars("SHIRITORI_BIND").unwrap_or_else(default_bind_addr);

        let body_limit_bytes = vars("SHIRITORI_BODY_LIMIT")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_body_limit_bytes); // 64 KiB default

        Self {
            bind_addr,
            body_limit_bytes,
        }
    }
}
