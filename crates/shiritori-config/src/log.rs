use serde::{Deserialize, Serialize};

use crate::parse_flag;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Emit JSON lines instead of human readable logs
    pub json: bool,
}

impl LogConfig {
    pub fn from_vars(vars: &impl Fn(&str) -> Option<String>) -> Self {
        let json = vars("SHIRITORI_LOG_JSON")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self { json }
    }
}
