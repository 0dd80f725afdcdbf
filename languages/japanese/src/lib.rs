pub mod kana;
pub mod loader;
pub mod selector;

pub use kana::{Script, to_hiragana, to_katakana};
pub use loader::{DictionaryLoader, EmbeddedDictionary, FileDictionary};
pub use selector::WordSelector;
