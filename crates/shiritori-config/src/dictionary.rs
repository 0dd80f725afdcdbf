use serde::{Deserialize, Serialize};

use crate::parse_flag;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word list on disk; the bundled list is used when unset
    #[serde(default)]
    pub path: Option<String>,
    /// Fold small kana (ゃ, ぁ, ...) in the lookup key to their full-size form
    #[serde(default)]
    pub fold_small_kana: bool,
}

impl DictionaryConfig {
    pub fn from_vars(vars: &impl Fn(&str) -> Option<String>) -> Self {
        let path = vars("SHIRITORI_DICT_PATH").filter(|p| !p.trim().is_empty());

        let fold_small_kana = vars("SHIRITORI_FOLD_SMALL_KANA")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            path,
            fold_small_kana,
        }
    }
}
