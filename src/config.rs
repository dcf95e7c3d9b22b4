use crate::dictionary::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::engine::{DEFAULT_ATTEMPTS, DEFAULT_PER_WORD_TRIES, PlacementEngine};
use crate::error::GenerateError;
use crate::grid::DEFAULT_GRID_SIZE;

pub const DEFAULT_MIN_WORDS: usize = 3;
pub const DEFAULT_MAX_WORDS: usize = 12;
pub const DEFAULT_MIN_CANDIDATES: usize = 5;
pub const DEFAULT_MAX_SESSION_ATTEMPTS: usize = 50;

/// Tuning knobs for sessions and batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub grid_size: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub min_word_len: usize,
    pub max_word_len: usize,
    /// Letter sets admitting fewer candidate words are resampled
    pub min_candidates: usize,
    pub max_session_attempts: usize,
    pub attempts: usize,
    pub per_word_tries: usize,
    /// Base seed for reproducible batches; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            min_word_len: MIN_WORD_LEN,
            max_word_len: MAX_WORD_LEN,
            min_candidates: DEFAULT_MIN_CANDIDATES,
            max_session_attempts: DEFAULT_MAX_SESSION_ATTEMPTS,
            attempts: DEFAULT_ATTEMPTS,
            per_word_tries: DEFAULT_PER_WORD_TRIES,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn engine(&self) -> PlacementEngine {
        PlacementEngine::new(self.attempts, self.per_word_tries)
    }

    /// Checks that the bounds describe something a session can produce.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.grid_size == 0 {
            return Err(GenerateError::InvalidInput(
                "grid size must be positive".to_string(),
            ));
        }
        if self.min_words == 0 || self.min_words > self.max_words {
            return Err(GenerateError::InvalidInput(format!(
                "word count bounds {}..={} are invalid",
                self.min_words, self.max_words
            )));
        }
        if self.min_word_len == 0 || self.min_word_len > self.max_word_len {
            return Err(GenerateError::InvalidInput(format!(
                "word length bounds {}..={} are invalid",
                self.min_word_len, self.max_word_len
            )));
        }
        if self.min_word_len > self.grid_size {
            return Err(GenerateError::InvalidInput(format!(
                "grid size {} cannot hold words of length {}",
                self.grid_size, self.min_word_len
            )));
        }
        Ok(())
    }
}
