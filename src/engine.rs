//! Randomized word placement.
//!
//! Each attempt starts from a fresh grid, anchors one longer word in the
//! middle row and then greedily drops further words at random positions where
//! they fit. Attempts are repeated and the one placing the most words wins.
//! This is a bounded heuristic, not an exhaustive search: every loop runs on a
//! fixed budget.

use crate::debug_log;
use crate::error::GenerateError;
use crate::grid::{Direction, Grid};
use crate::letter_pool::LetterPool;
use crate::puzzle::Placement;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

pub const DEFAULT_ATTEMPTS: usize = 50;
pub const DEFAULT_PER_WORD_TRIES: usize = 30;

/// Anchor words are drawn from words at least this long when any exist.
const MIN_ANCHOR_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementEngine {
    /// Independent construction passes per call
    pub attempts: usize,
    /// Random positions tried per word per slot
    pub per_word_tries: usize,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            per_word_tries: DEFAULT_PER_WORD_TRIES,
        }
    }
}

impl PlacementEngine {
    pub fn new(attempts: usize, per_word_tries: usize) -> Self {
        Self {
            attempts,
            per_word_tries,
        }
    }

    /// Arranges between `min_words` and `max_words` of `candidates` on a
    /// `size × size` grid.
    ///
    /// Returns the placements of the best attempt, in placement order; the
    /// first placement is always the horizontal anchor. Ties between attempts
    /// go to the earliest one, and the search stops as soon as an attempt
    /// reaches `min_words`.
    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
        letters: &str,
        candidates: &[String],
        min_words: usize,
        max_words: usize,
        size: usize,
    ) -> Result<Vec<Placement>, GenerateError> {
        LetterPool::new(letters)?;
        if size == 0 {
            return Err(GenerateError::InvalidInput(
                "grid size must be positive".to_string(),
            ));
        }
        if max_words == 0 || min_words > max_words {
            return Err(GenerateError::InvalidInput(format!(
                "word bounds {min_words}..={max_words} are empty"
            )));
        }

        // Words longer than the grid can never be in bounds.
        let mut seen = HashSet::new();
        let mut words: Vec<&str> = candidates
            .iter()
            .map(String::as_str)
            .filter(|w| !w.is_empty() && w.len() <= size && seen.insert(*w))
            .collect();
        if words.len() < min_words {
            return Err(GenerateError::InsufficientVocabulary {
                found: words.len(),
                required: min_words,
            });
        }
        words.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut best: Vec<Placement> = Vec::new();
        for attempt in 0..self.attempts {
            let placed = self.attempt(rng, &mut words, max_words, size);
            debug_log!(
                "{letters}: attempt {attempt} placed {} words (best {})",
                placed.len(),
                best.len()
            );
            if placed.len() > best.len() {
                best = placed;
            }
            if best.len() >= min_words {
                break;
            }
        }

        if best.len() >= min_words {
            Ok(best)
        } else {
            Err(GenerateError::PlacementExhausted {
                best: best.len(),
                required: min_words,
            })
        }
    }

    /// One construction pass on a fresh grid.
    fn attempt<'w, R: Rng>(
        &self,
        rng: &mut R,
        words: &mut [&'w str],
        max_words: usize,
        size: usize,
    ) -> Vec<Placement> {
        let mut grid = Grid::new(size);

        let anchors: Vec<&'w str> = words
            .iter()
            .copied()
            .filter(|w| w.len() >= MIN_ANCHOR_LEN)
            .collect();
        let pool: &[&'w str] = if anchors.is_empty() { &*words } else { &anchors };
        let Some(&anchor) = pool.choose(rng) else {
            return Vec::new();
        };
        let (row, col) = (size / 2, (size - anchor.len()) / 2);
        grid.place(anchor, row, col, Direction::Horizontal);

        let mut placed = vec![Placement::new(anchor, Direction::Horizontal, row, col)];
        let mut used: HashSet<&'w str> = HashSet::from([anchor]);

        for _ in 1..max_words {
            words.shuffle(rng);
            let Some((word, next)) = words
                .iter()
                .filter(|w| !used.contains(*w))
                .find_map(|&word| self.random_fit(rng, &grid, word).map(|p| (word, p)))
            else {
                break;
            };
            grid.place(word, next.row, next.col, next.direction);
            used.insert(word);
            placed.push(next);
        }
        placed
    }

    /// Tries `per_word_tries` uniformly random positions and returns the
    /// first that fits.
    fn random_fit<R: Rng>(&self, rng: &mut R, grid: &Grid, word: &str) -> Option<Placement> {
        let size = grid.size();
        (0..self.per_word_tries).find_map(|_| {
            let direction = if rng.gen_bool(0.5) {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            let row = rng.gen_range(0..size);
            let col = rng.gen_range(0..size);
            grid.fits(word, row, col, direction)
                .then(|| Placement::new(word, direction, row, col))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn example_words() -> Vec<String> {
        words(&["eat", "rat", "tars", "stare", "rate"])
    }

    fn assert_sound(placements: &[Placement], size: usize) {
        let mut grid = Grid::new(size);
        let mut seen = HashSet::new();
        for p in placements {
            assert!(seen.insert(p.word.clone()), "{} placed twice", p.word);
            assert!(
                grid.fits(&p.word, p.row, p.col, p.direction),
                "{p} does not replay"
            );
            grid.place(&p.word, p.row, p.col, p.direction);
        }
    }

    #[test]
    fn test_example_letters_place_at_least_three_words() {
        let engine = PlacementEngine::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placements = engine
                .generate(&mut rng, "aetrs", &example_words(), 3, 12, 15)
                .unwrap();
            assert!(placements.len() >= 3);
            assert_sound(&placements, 15);

            let anchor = &placements[0];
            assert!(anchor.word.len() >= MIN_ANCHOR_LEN);
            assert_eq!(anchor.direction, Direction::Horizontal);
            assert_eq!(anchor.row, 7);
            assert_eq!(anchor.col, (15 - anchor.word.len()) / 2);
        }
    }

    #[test]
    fn test_results_respect_max_words() {
        let engine = PlacementEngine::default();
        let mut rng = StdRng::seed_from_u64(9);
        let placements = engine
            .generate(&mut rng, "aetrs", &example_words(), 1, 2, 15)
            .unwrap();
        assert!(placements.len() <= 2);
        assert_sound(&placements, 15);
    }

    #[test]
    fn test_single_word_budget_keeps_only_anchor() {
        let engine = PlacementEngine::default();
        let mut rng = StdRng::seed_from_u64(1);
        let placements = engine
            .generate(&mut rng, "aetrs", &example_words(), 1, 1, 15)
            .unwrap();
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn test_same_seed_same_result() {
        let engine = PlacementEngine::default();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            engine.generate(&mut rng, "aetrs", &example_words(), 3, 12, 15)
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_insufficient_vocabulary() {
        let engine = PlacementEngine::default();
        let mut rng = StdRng::seed_from_u64(0);
        let result = engine.generate(&mut rng, "aetrs", &words(&["eat", "rat"]), 3, 12, 15);
        assert_eq!(
            result,
            Err(GenerateError::InsufficientVocabulary {
                found: 2,
                required: 3
            })
        );
    }

    #[test]
    fn test_duplicate_candidates_count_once() {
        let engine = PlacementEngine::default();
        let mut rng = StdRng::seed_from_u64(0);
        let candidates = words(&["eat", "eat", "rat"]);
        let result = engine.generate(&mut rng, "aetrs", &candidates, 3, 12, 15);
        assert!(matches!(
            result,
            Err(GenerateError::InsufficientVocabulary { found: 2, .. })
        ));
    }

    #[test]
    fn test_words_longer_than_grid_are_dropped() {
        let engine = PlacementEngine::default();
        let mut rng = StdRng::seed_from_u64(3);
        let placements = engine
            .generate(&mut rng, "aetrs", &example_words(), 1, 12, 4)
            .unwrap();
        assert!(placements.iter().all(|p| p.word != "stare"));
        assert_sound(&placements, 4);
    }

    #[test]
    fn test_short_words_only_still_anchor() {
        let engine = PlacementEngine::default();
        let mut rng = StdRng::seed_from_u64(5);
        let placements = engine
            .generate(&mut rng, "aetr", &words(&["eat", "rat", "tea", "are"]), 3, 12, 15)
            .unwrap();
        assert_eq!(placements[0].row, 7);
        assert_eq!(placements[0].col, 6);
        assert_sound(&placements, 15);
    }

    #[test]
    fn test_unreachable_minimum_exhausts() {
        // On a 3x3 grid the anchor fills the middle row, so at most two more
        // rows can take words.
        let engine = PlacementEngine::new(10, 30);
        let mut rng = StdRng::seed_from_u64(11);
        let result = engine.generate(
            &mut rng,
            "abcd",
            &words(&["aaa", "bbb", "ccc", "ddd"]),
            4,
            4,
            3,
        );
        assert!(matches!(
            result,
            Err(GenerateError::PlacementExhausted { required: 4, best }) if best <= 3
        ));
    }

    #[test]
    fn test_zero_attempts_terminates() {
        let engine = PlacementEngine::new(0, 30);
        let mut rng = StdRng::seed_from_u64(0);
        let result = engine.generate(&mut rng, "aetrs", &example_words(), 3, 12, 15);
        assert_eq!(
            result,
            Err(GenerateError::PlacementExhausted {
                best: 0,
                required: 3
            })
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let engine = PlacementEngine::default();
        let mut rng = StdRng::seed_from_u64(0);
        let candidates = example_words();
        assert!(matches!(
            engine.generate(&mut rng, "", &candidates, 3, 12, 15),
            Err(GenerateError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.generate(&mut rng, "aetrs", &candidates, 3, 12, 0),
            Err(GenerateError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.generate(&mut rng, "aetrs", &candidates, 5, 4, 15),
            Err(GenerateError::InvalidInput(_))
        ));
    }
}
