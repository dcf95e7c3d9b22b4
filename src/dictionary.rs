use crate::error::DictionaryError;
use crate::info_log;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/words.txt");

pub const MIN_WORD_LEN: usize = 3;
pub const MAX_WORD_LEN: usize = 7;

/// Frequency-list entries at or below this count are dropped.
pub const DEFAULT_MIN_COUNT: u64 = 1000;

/// Immutable, sorted and de-duplicated set of lowercase words, 3 to 7 letters
/// long. Shared read-only between sessions once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    let usable = (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_lowercase());
    usable.then_some(word)
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }
}

/// Plain word list, one word per line. Only the first token of a line is
/// considered.
pub fn load_dictionary_from_str(data: &str) -> Dictionary {
    Dictionary::from_words(data.lines().filter_map(|line| line.split_whitespace().next()))
}

/// Frequency list of `word count` lines. Words whose count does not exceed
/// `min_count` are dropped, as are malformed lines.
pub fn load_frequency_list_from_str(data: &str, min_count: u64) -> Dictionary {
    Dictionary::from_words(data.lines().filter_map(|line| {
        let mut fields = line.split_whitespace();
        let word = fields.next()?;
        let count: u64 = fields.next()?.parse().ok()?;
        (count > min_count).then_some(word)
    }))
}

fn read_source(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|source| DictionaryError::Unavailable {
        path: path.to_path_buf(),
        source,
    })
}

fn non_empty(dictionary: Dictionary) -> Result<Dictionary, DictionaryError> {
    if dictionary.is_empty() {
        Err(DictionaryError::Empty)
    } else {
        Ok(dictionary)
    }
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let data = read_source(path.as_ref())?;
    non_empty(load_dictionary_from_str(&data))
}

pub fn load_frequency_list_from_file<P: AsRef<Path>>(
    path: P,
    min_count: u64,
) -> Result<Dictionary, DictionaryError> {
    let data = read_source(path.as_ref())?;
    non_empty(load_frequency_list_from_str(&data, min_count))
}

/// `<data dir>/wordscape-gen/words.txt`, if the platform has a data dir.
pub fn default_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("wordscape-gen").join("words.txt"))
}

/// Loads the word list at the default path, falling back to the embedded list
/// when the file is missing, unreadable or empty.
pub fn load_default_dictionary() -> Dictionary {
    if let Some(path) = default_dictionary_path()
        && path.exists()
    {
        match load_dictionary_from_file(&path) {
            Ok(dictionary) => {
                info_log!("Loaded {} words from {}", dictionary.len(), path.display());
                return dictionary;
            }
            Err(e) => log::warn!("Ignoring default dictionary: {e}"),
        }
    }
    load_dictionary_from_str(EMBEDDED_DICTIONARY)
}
