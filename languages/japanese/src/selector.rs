use rand::Rng;
use rand::seq::SliceRandom;
use shiritori_core::dictionary::{WordSource, words_starting_with};
use shiritori_core::error::ShiritoriError;

use crate::kana::{self, Script};

/// Appended when our own word ends in ん, i.e. we just lost
pub const SELF_LOSS_SUFFIX: &str = "\nあっ...";

/// Picks the next word of the chain from a word list
pub struct WordSelector<S> {
    source: S,
    fold_small_kana: bool,
}

impl<S: WordSource> WordSelector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            fold_small_kana: false,
        }
    }

    /// Fold small kana in the lookup key (きしゃ chains from や)
    pub fn with_small_kana_folding(mut self, enabled: bool) -> Self {
        self.fold_small_kana = enabled;
        self
    }

    /// Answer `input`, matching in a randomly chosen script
    pub fn select<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Result<String, ShiritoriError> {
        self.answer(input, None, rng)
    }

    /// Answer `input`, matching in `script`
    pub fn select_in<R: Rng + ?Sized>(
        &self,
        input: &str,
        script: Script,
        rng: &mut R,
    ) -> Result<String, ShiritoriError> {
        self.answer(input, Some(script), rng)
    }

    fn answer<R: Rng + ?Sized>(
        &self,
        input: &str,
        script: Option<Script>,
        rng: &mut R,
    ) -> Result<String, ShiritoriError> {
        let trimmed = input.trim();
        let last = trimmed.chars().last().ok_or(ShiritoriError::EmptyInput)?;
        if kana::is_terminal_n(last) {
            return Err(ShiritoriError::TerminalN);
        }

        let cleaned = kana::strip_long_vowels(trimmed);

        let script = script.unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                Script::Katakana
            } else {
                Script::Hiragana
            }
        });

        // Only long vowel marks, e.g. "ーー"
        let mut key = script
            .convert(&cleaned)
            .chars()
            .last()
            .ok_or(ShiritoriError::EmptyInput)?;
        if self.fold_small_kana {
            key = kana::fold_small_kana(key);
        }

        tracing::debug!("Looking up '{}' in {} ({})", key, script.as_str(), self.source.describe());

        let candidates = words_starting_with(&self.source, key)?;
        tracing::debug!("{} candidates for '{}'", candidates.len(), key);

        let word = candidates.choose(rng).ok_or(ShiritoriError::EmptyDictionary)?;
        if word.is_empty() {
            return Err(ShiritoriError::NotFound);
        }

        match word.chars().last() {
            Some(c) if kana::is_terminal_n(c) => Ok(format!("{word}{SELF_LOSS_SUFFIX}")),
            _ => Ok(word.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use shiritori_core::dictionary::{LoadError, MemoryDictionary};

    use super::*;

    fn selector(words: &[&str]) -> WordSelector<MemoryDictionary> {
        WordSelector::new(MemoryDictionary::new(words))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_empty_input() {
        let sel = selector(&["ごま"]);
        for input in ["", "   ", "\n\t"] {
            let err = sel.select(input, &mut rng()).unwrap_err();
            assert!(matches!(err, ShiritoriError::EmptyInput));
            assert_eq!(err.to_string(), "なんやねん");
        }
    }

    #[test]
    fn test_input_ending_in_n_loses() {
        let sel = selector(&["ごま"]);
        for input in ["まん", "ラーメン", " みかん  "] {
            let err = sel.select(input, &mut rng()).unwrap_err();
            assert!(matches!(err, ShiritoriError::TerminalN));
            assert_eq!(err.to_string(), "出直して来い");
        }
    }

    #[test]
    fn test_terminal_n_checked_before_lookup() {
        struct Unavailable;

        impl WordSource for Unavailable {
            fn open(&self) -> Result<Box<dyn std::io::BufRead + '_>, LoadError> {
                Err(LoadError::FileNotFound("dict.txt".into()))
            }

            fn describe(&self) -> String {
                "unavailable".into()
            }
        }

        let sel = WordSelector::new(Unavailable);
        assert!(matches!(sel.select("まん", &mut rng()), Err(ShiritoriError::TerminalN)));
        assert!(matches!(
            sel.select("すし", &mut rng()),
            Err(ShiritoriError::ResourceUnavailable(LoadError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_no_candidates() {
        let sel = selector(&["ごま", "ゴリラ"]);
        for script in [Script::Hiragana, Script::Katakana] {
            let err = sel.select_in("すし", script, &mut rng()).unwrap_err();
            assert!(matches!(err, ShiritoriError::EmptyDictionary));
            assert_eq!(err.to_string(), "empty dictionary");
        }
    }

    #[test]
    fn test_match_in_fixed_script() {
        let sel = selector(&["ごま", "ゴリラ", "まご"]);

        assert_eq!(sel.select_in("りんご", Script::Hiragana, &mut rng()).unwrap(), "ごま");
        assert_eq!(sel.select_in("りんご", Script::Katakana, &mut rng()).unwrap(), "ゴリラ");
        assert_eq!(sel.select_in("リンゴ", Script::Hiragana, &mut rng()).unwrap(), "ごま");
    }

    #[test]
    fn test_random_script_finds_either() {
        let sel = selector(&["ごま", "ゴリラ"]);
        let mut rng = rng();
        let mut seen = Vec::new();
        for _ in 0..64 {
            let word = sel.select("りんご", &mut rng).unwrap();
            assert!(word == "ごま" || word == "ゴリラ");
            if !seen.contains(&word) {
                seen.push(word);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_long_vowel_is_ignored() {
        let sel = selector(&["ひつじ", "ヒツジ"]);

        assert_eq!(sel.select_in("コーヒー", Script::Hiragana, &mut rng()).unwrap(), "ひつじ");
        assert_eq!(sel.select_in("コーヒー", Script::Katakana, &mut rng()).unwrap(), "ヒツジ");
    }

    #[test]
    fn test_only_long_vowels() {
        let sel = selector(&["ごま"]);
        assert!(matches!(sel.select("ーー", &mut rng()), Err(ShiritoriError::EmptyInput)));
    }

    #[test]
    fn test_own_word_ending_in_n_is_annotated() {
        let sel = selector(&["ごはん"]);
        assert_eq!(
            sel.select_in("りんご", Script::Hiragana, &mut rng()).unwrap(),
            "ごはん\nあっ..."
        );

        let sel = selector(&["ゴハン"]);
        assert_eq!(
            sel.select_in("りんご", Script::Katakana, &mut rng()).unwrap(),
            "ゴハン\nあっ..."
        );
    }

    #[test]
    fn test_pick_is_from_matching_set() {
        let words = ["ごま", "ごりら", "ごはん", "ゴマ", "たまご"];
        let sel = selector(&words);
        let mut rng = rng();
        for _ in 0..32 {
            let word = sel.select_in("りんご", Script::Hiragana, &mut rng).unwrap();
            assert!(
                ["ごま", "ごりら", "ごはん\nあっ..."].contains(&word.as_str()),
                "unexpected {word}"
            );
        }
    }

    #[test]
    fn test_same_seed_same_answer() {
        let sel = selector(&["ごま", "ごりら", "ごはん", "ゴマ", "ゴリラ", "ゴール"]);

        let first: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..10).map(|_| sel.select("りんご", &mut rng).unwrap()).collect()
        };
        let second: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..10).map(|_| sel.select("りんご", &mut rng).unwrap()).collect()
        };

        assert_eq!(first, second);
    }

    #[test]
    fn test_small_kana_folding_is_opt_in() {
        let sel = selector(&["やま"]);
        assert!(matches!(
            sel.select_in("きしゃ", Script::Hiragana, &mut rng()),
            Err(ShiritoriError::EmptyDictionary)
        ));

        let sel = selector(&["やま"]).with_small_kana_folding(true);
        assert_eq!(sel.select_in("きしゃ", Script::Hiragana, &mut rng()).unwrap(), "やま");
    }

    #[test]
    fn test_non_kana_key_matches_literally() {
        let sel = selector(&["犬小屋", "いぬ"]);
        for script in [Script::Hiragana, Script::Katakana] {
            assert_eq!(sel.select_in("子犬", script, &mut rng()).unwrap(), "犬小屋");
        }
    }
}
