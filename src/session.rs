use crate::config::GeneratorConfig;
use crate::dictionary::Dictionary;
use crate::engine::PlacementEngine;
use crate::error::GenerateError;
use crate::letter_pool::LetterPool;
use crate::puzzle::{Placement, Puzzle};
use crate::sampler::{LetterSampler, MAX_LETTERS, MIN_LETTERS};
use crate::word_filter::filter_words;
use crate::{debug_log, info_log};
use rand::Rng;

/// Outer retry loop for one puzzle id: sample a letter set, filter the
/// dictionary, place words, and resample on any recoverable failure.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    config: GeneratorConfig,
    engine: PlacementEngine,
}

impl Default for PuzzleSession {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl PuzzleSession {
    pub fn new(config: GeneratorConfig) -> Self {
        let engine = config.engine();
        Self { config, engine }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the puzzle for `id`, trying up to `max_session_attempts` letter
    /// sets.
    ///
    /// Letter sets with too few candidate words, or on which the engine cannot
    /// reach the minimum word count, are discarded and resampled. A sampler
    /// handing out fewer than 5 or more than 7 letters is a contract violation
    /// and fails the call with `InvalidInput`. Exhausting the budget yields
    /// `PuzzleGenerationFailure`.
    pub fn next_puzzle<S: LetterSampler, R: Rng>(
        &self,
        id: u64,
        dictionary: &Dictionary,
        sampler: &S,
        rng: &mut R,
    ) -> Result<Puzzle, GenerateError> {
        self.config.validate()?;

        for attempt in 1..=self.config.max_session_attempts {
            let letters = sampler.sample_letters(rng).to_ascii_lowercase();
            let len = letters.chars().count();
            if !(MIN_LETTERS..=MAX_LETTERS).contains(&len) {
                return Err(GenerateError::InvalidInput(format!(
                    "sampled {letters:?} has {len} letters, expected {MIN_LETTERS}..={MAX_LETTERS}"
                )));
            }

            match self.try_letters(&letters, dictionary, rng) {
                Ok(placements) => {
                    info_log!(
                        "Puzzle {id}: {letters} placed {} words on attempt {attempt}",
                        placements.len()
                    );
                    return Ok(Puzzle::new(id, letters, placements));
                }
                Err(e) if e.is_retryable() => {
                    debug_log!("Puzzle {id}: attempt {attempt} with {letters:?} failed: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        Err(GenerateError::PuzzleGenerationFailure {
            id,
            attempts: self.config.max_session_attempts,
        })
    }

    /// One session attempt on a fixed letter set.
    fn try_letters<R: Rng>(
        &self,
        letters: &str,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Vec<Placement>, GenerateError> {
        let pool = LetterPool::new(letters)?;
        let candidates = filter_words(
            dictionary.words(),
            &pool,
            self.config.min_word_len,
            self.config.max_word_len,
        );
        if candidates.len() < self.config.min_candidates {
            return Err(GenerateError::InsufficientVocabulary {
                found: candidates.len(),
                required: self.config.min_candidates,
            });
        }
        self.engine.generate(
            rng,
            letters,
            &candidates,
            self.config.min_words,
            self.config.max_words,
            self.config.grid_size,
        )
    }
}
