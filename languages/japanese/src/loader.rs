use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use shiritori_core::dictionary::{LoadError, WordSource};

/// Word list bundled into the binary
pub const EMBEDDED_DICT: &str = include_str!("../public/dict.txt");

/// The bundled `public/dict.txt`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDictionary;

impl WordSource for EmbeddedDictionary {
    fn open(&self) -> Result<Box<dyn BufRead + '_>, LoadError> {
        Ok(Box::new(Cursor::new(EMBEDDED_DICT.as_bytes())))
    }

    fn describe(&self) -> String {
        "embedded public/dict.txt".to_string()
    }
}

/// Word list on disk, reopened for every lookup
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileDictionary {
    fn open(&self) -> Result<Box<dyn BufRead + '_>, LoadError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound(self.path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;

        Ok(Box::new(BufReader::new(file)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Pick the word list for the service: the file at `path` if given,
    /// otherwise the bundled one
    pub fn from_path(path: Option<&str>) -> Arc<dyn WordSource> {
        match path {
            Some(path) => {
                let dict = FileDictionary::new(path);
                if dict.path().is_file() {
                    tracing::info!("Using dictionary file: {}", dict.path().display());
                } else {
                    tracing::warn!(
                        "Dictionary file {} is missing, lookups will fail until it appears",
                        dict.path().display()
                    );
                }
                Arc::new(dict)
            }
            None => {
                tracing::info!(
                    "Using embedded dictionary ({} lines)",
                    EMBEDDED_DICT.lines().count()
                );
                Arc::new(EmbeddedDictionary)
            }
        }
    }
}
