//! Hiragana/katakana conversion and the handful of character rules the
//! game cares about.

/// Offset between a hiragana code point and its katakana counterpart
const KANA_OFFSET: u32 = 0x60;

/// ー carries no sound of its own and is ignored when chaining
pub const LONG_VOWEL_MARK: char = 'ー';

/// Small kana and their full-size forms
const SMALL_KANA: [(char, char); 16] = [
    ('ぁ', 'あ'),
    ('ぃ', 'い'),
    ('ぅ', 'う'),
    ('ぇ', 'え'),
    ('ぉ', 'お'),
    ('ゃ', 'や'),
    ('ゅ', 'ゆ'),
    ('ょ', 'よ'),
    ('ァ', 'ア'),
    ('ィ', 'イ'),
    ('ゥ', 'ウ'),
    ('ェ', 'エ'),
    ('ォ', 'オ'),
    ('ャ', 'ヤ'),
    ('ュ', 'ユ'),
    ('ョ', 'ヨ'),
];

/// The two syllabaries a word can be matched in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub fn convert(self, s: &str) -> String {
        match self {
            Script::Hiragana => to_hiragana(s),
            Script::Katakana => to_katakana(s),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
        }
    }
}

/// Katakana with a hiragana counterpart (ァ..ヶ)
pub fn is_convertible_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// Hiragana with a katakana counterpart (ぁ..ゖ)
pub fn is_convertible_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

/// Convert katakana to hiragana.
/// Anything outside ァ..ヶ (ー, kanji, ASCII, ...) is passed through unchanged.
pub fn to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_convertible_katakana(c) {
                char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert hiragana to katakana.
/// Anything outside ぁ..ゖ is passed through unchanged.
pub fn to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_convertible_hiragana(c) {
                char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// ん or ン; a word ending in either loses the game
pub fn is_terminal_n(c: char) -> bool {
    c == 'ん' || c == 'ン'
}

pub fn strip_long_vowels(s: &str) -> String {
    s.chars().filter(|&c| c != LONG_VOWEL_MARK).collect()
}

/// Full-size form of a small kana, other characters unchanged
pub fn fold_small_kana(c: char) -> char {
    SMALL_KANA
        .iter()
        .find(|(small, _)| *small == c)
        .map(|(_, large)| *large)
        .unwrap_or(c)
}

pub fn fold_small_kana_str(s: &str) -> String {
    s.chars().map(fold_small_kana).collect()
}
