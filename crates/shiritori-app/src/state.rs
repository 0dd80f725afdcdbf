use std::sync::Arc;

use rand::Rng;
use shiritori_config::Config;
use shiritori_core::dictionary::WordSource;
use shiritori_core::types::{Reply, ShiritoriRecord};
use shiritori_lang_japanese::{DictionaryLoader, WordSelector};

/// Read-only after startup, shared by every request
pub struct AppState {
    pub config: Config,
    pub selector: WordSelector<Arc<dyn WordSource>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source = DictionaryLoader::from_path(config.dictionary.path.as_deref());
        Self::with_source(config, source)
    }

    pub fn with_source(config: Config, source: Arc<dyn WordSource>) -> Self {
        let selector =
            WordSelector::new(source).with_small_kana_folding(config.dictionary.fold_small_kana);

        Self { config, selector }
    }

    /// Play one turn against `word`
    pub fn play<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> ShiritoriRecord {
        let reply = Reply::from(self.selector.select(word, rng));

        match &reply {
            Reply::Success(answer) => tracing::info!("'{}' -> '{}'", word, answer.escape_debug()),
            Reply::Failure(err) => tracing::info!("'{}' refused: {}", word, err),
        }

        reply.into()
    }
}
