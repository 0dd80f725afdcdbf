use serde::{Deserialize, Serialize};

use crate::error::ShiritoriError;

/// Outcome of one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Success(String),
    Failure(String),
}

impl From<Result<String, ShiritoriError>> for Reply {
    fn from(result: Result<String, ShiritoriError>) -> Self {
        match result {
            Ok(word) => Reply::Success(word),
            Err(e) => Reply::Failure(e.to_string()),
        }
    }
}

/// Wire record shared by requests and responses.
///
/// Empty fields are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiritoriRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub word: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl ShiritoriRecord {
    pub fn failure(err: impl Into<String>) -> Self {
        Self {
            word: String::new(),
            err: err.into(),
        }
    }
}

impl From<Reply> for ShiritoriRecord {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Success(word) => Self {
                word,
                err: String::new(),
            },
            Reply::Failure(err) => Self::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_err() {
        let record = ShiritoriRecord::from(Reply::Success("ごま".to_string()));
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"word":"ごま"}"#);
    }

    #[test]
    fn test_failure_omits_word() {
        let record = ShiritoriRecord::from(Reply::from(Err(ShiritoriError::TerminalN)));
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"err":"出直して来い"}"#);
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let record: ShiritoriRecord = serde_json::from_str(r#"{"word":"りんご","extra":1}"#).unwrap();
        assert_eq!(record.word, "りんご");
        assert!(record.err.is_empty());
    }
}
