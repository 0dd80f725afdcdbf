use crate::dictionary::LoadError;

/// Reasons a turn is refused.
///
/// The display strings are the exact messages sent back to players.
#[derive(Debug, thiserror::Error)]
pub enum ShiritoriError {
    /// Nothing left after trimming
    #[error("なんやねん")]
    EmptyInput,

    /// Player's word ends in ん, which loses the game
    #[error("出直して来い")]
    TerminalN,

    /// No dictionary word starts with the required character
    #[error("empty dictionary")]
    EmptyDictionary,

    #[error("わかりません")]
    NotFound,

    #[error("{0}")]
    ResourceUnavailable(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_facing_messages() {
        assert_eq!(ShiritoriError::EmptyInput.to_string(), "なんやねん");
        assert_eq!(ShiritoriError::TerminalN.to_string(), "出直して来い");
        assert_eq!(ShiritoriError::EmptyDictionary.to_string(), "empty dictionary");
        assert_eq!(ShiritoriError::NotFound.to_string(), "わかりません");
    }

    #[test]
    fn test_resource_error_keeps_load_message() {
        let err: ShiritoriError = LoadError::FileNotFound("public/dict.txt".into()).into();
        assert_eq!(err.to_string(), "File not found: public/dict.txt");
    }
}
