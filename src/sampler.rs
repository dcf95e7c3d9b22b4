use rand::Rng;
use rand::seq::SliceRandom;

pub const VOWELS: &[u8] = b"aeiou";
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

pub const MIN_LETTERS: usize = 5;
pub const MAX_LETTERS: usize = 7;

/// Source of letter sets for puzzle sessions.
pub trait LetterSampler {
    /// A string of lowercase letters. Sessions only accept
    /// [`MIN_LETTERS`]..=[`MAX_LETTERS`] letters.
    fn sample_letters<R: Rng>(&self, rng: &mut R) -> String;
}

/// Draws a uniform length in `min_len..=max_len`, then `vowels` distinct
/// vowels and distinct consonants for the remainder, and shuffles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelBiasedSampler {
    pub min_len: usize,
    pub max_len: usize,
    pub vowels: usize,
}

impl Default for VowelBiasedSampler {
    fn default() -> Self {
        Self {
            min_len: MIN_LETTERS,
            max_len: MAX_LETTERS,
            vowels: 2,
        }
    }
}

impl LetterSampler for VowelBiasedSampler {
    fn sample_letters<R: Rng>(&self, rng: &mut R) -> String {
        let len = rng.gen_range(self.min_len..=self.max_len.max(self.min_len));
        let vowels = self.vowels.min(len).min(VOWELS.len());
        let consonants = (len - vowels).min(CONSONANTS.len());

        let mut letters: Vec<u8> = VOWELS.choose_multiple(rng, vowels).copied().collect();
        letters.extend(CONSONANTS.choose_multiple(rng, consonants).copied());
        letters.shuffle(rng);
        letters.into_iter().map(char::from).collect()
    }
}

/// Always hands out the same letters. Useful for reproducing a puzzle from a
/// known letter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLetters(pub String);

impl LetterSampler for FixedLetters {
    fn sample_letters<R: Rng>(&self, _rng: &mut R) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_sampler_contract() {
        let sampler = VowelBiasedSampler::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let letters = sampler.sample_letters(&mut rng);
            assert!((MIN_LETTERS..=MAX_LETTERS).contains(&letters.len()), "{letters}");
            assert!(letters.chars().all(|c| c.is_ascii_lowercase()));
            let vowels = letters.bytes().filter(|b| VOWELS.contains(b)).count();
            assert_eq!(vowels, 2, "{letters}");
        }
    }

    #[test]
    fn test_letters_are_distinct() {
        let sampler = VowelBiasedSampler::default();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let mut letters: Vec<char> = sampler.sample_letters(&mut rng).chars().collect();
            let len = letters.len();
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(letters.len(), len);
        }
    }

    #[test]
    fn test_all_lengths_occur() {
        let sampler = VowelBiasedSampler::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = [false; MAX_LETTERS + 1];
        for _ in 0..200 {
            seen[sampler.sample_letters(&mut rng).len()] = true;
        }
        assert!(seen[MIN_LETTERS..=MAX_LETTERS].iter().all(|&s| s));
    }

    #[test]
    fn test_fixed_letters() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(FixedLetters("aetrs".to_string()).sample_letters(&mut rng), "aetrs");
    }
}
