use std::io::{BufRead, Cursor};

/// Read-only word list, one word per line.
///
/// Every call to [`WordSource::open`] yields a fresh reader over the whole
/// list; nothing is cached between lookups.
pub trait WordSource: Send + Sync {
    /// Open the word list for a single linear scan
    fn open(&self) -> Result<Box<dyn BufRead + '_>, LoadError>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}

impl<T: WordSource + ?Sized> WordSource for std::sync::Arc<T> {
    fn open(&self) -> Result<Box<dyn BufRead + '_>, LoadError> {
        (**self).open()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Collect every word whose first character equals `key`, in list order.
///
/// Blank lines carry no first character and are skipped. A trailing `\r`
/// is dropped so CRLF word lists behave like LF ones.
pub fn words_starting_with<S>(source: &S, key: char) -> Result<Vec<String>, LoadError>
where
    S: WordSource + ?Sized,
{
    let reader = source.open()?;
    let mut words = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let word = String::from_utf8(line).map_err(|_| LoadError::InvalidEncoding { line: idx + 1 })?;

        if word.chars().next() == Some(key) {
            words.push(word);
        }
    }

    tracing::debug!(
        "Scanned {} for '{}': {} matches",
        source.describe(),
        key,
        words.len()
    );

    Ok(words)
}

/// In-memory word list
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionary {
    text: String,
}

impl MemoryDictionary {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let text = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        Self { text }
    }

    /// Use raw newline-delimited text as-is
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl WordSource for MemoryDictionary {
    fn open(&self) -> Result<Box<dyn BufRead + '_>, LoadError> {
        Ok(Box::new(Cursor::new(self.text.as_bytes())))
    }

    fn describe(&self) -> String {
        "in-memory word list".to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid UTF-8 on line {line}")]
    InvalidEncoding { line: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
