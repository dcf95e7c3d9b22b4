use crate::error::GenerateError;

const ALPHABET_SIZE: usize = 26;

fn letter_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| (lower as u8 - b'a') as usize)
}

/// The fixed multiset of letters available to one puzzle attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    /// Histogram count of each letter `a..=z`
    counts: [u8; ALPHABET_SIZE],
    /// Total number of letters in the pool
    total: usize,
}

impl LetterPool {
    /// Builds a pool from a letter string. Input is case-folded; anything
    /// other than ASCII letters is rejected.
    pub fn new(letters: &str) -> Result<Self, GenerateError> {
        if letters.is_empty() {
            return Err(GenerateError::InvalidInput(
                "letter set is empty".to_string(),
            ));
        }
        let mut counts = [0u8; ALPHABET_SIZE];
        for c in letters.chars() {
            let Some(idx) = letter_index(c) else {
                return Err(GenerateError::InvalidInput(format!(
                    "letter set {letters:?} contains non-alphabetic character {c:?}"
                )));
            };
            counts[idx] = counts[idx].saturating_add(1);
        }
        Ok(Self {
            counts,
            total: letters.chars().count(),
        })
    }

    /// Occurrences of `letter` in the pool, 0 if absent.
    pub fn count_of(&self, letter: char) -> usize {
        letter_index(letter).map_or(0, |idx| self.counts[idx] as usize)
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Multiset containment: every letter of `word` is available at least as
    /// many times as it occurs in `word`.
    pub fn can_form(&self, word: &str) -> bool {
        let mut needed = [0u8; ALPHABET_SIZE];
        for c in word.chars() {
            let Some(idx) = letter_index(c) else {
                return false;
            };
            needed[idx] = needed[idx].saturating_add(1);
            if needed[idx] > self.counts[idx] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_of() {
        let pool = LetterPool::new("aetrsa").unwrap();
        assert_eq!(pool.count_of('a'), 2);
        assert_eq!(pool.count_of('e'), 1);
        assert_eq!(pool.count_of('z'), 0);
        assert_eq!(pool.count_of('1'), 0);
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_uppercase_is_folded() {
        let pool = LetterPool::new("AeT").unwrap();
        assert_eq!(pool.count_of('a'), 1);
        assert_eq!(pool.count_of('A'), 1);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            LetterPool::new(""),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_alphabetic_rejected() {
        assert!(matches!(
            LetterPool::new("ab3d"),
            Err(GenerateError::InvalidInput(_))
        ));
        assert!(LetterPool::new("ab d").is_err());
    }

    #[test]
    fn test_can_form_respects_multiplicity() {
        let pool = LetterPool::new("aetrs").unwrap();
        assert!(pool.can_form("stare"));
        assert!(pool.can_form("eat"));
        assert!(!pool.can_form("tease")); // needs two e's
        assert!(!pool.can_form("stern")); // no n
        assert!(!pool.can_form("ea-t"));
    }
}
