use crate::dictionary::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::letter_pool::LetterPool;
use rayon::prelude::*;

/// Dictionary words that are `min_len..=max_len` long and can be spelled from
/// `pool` without using any letter more often than the pool holds it.
///
/// Words are tested independently and returned in dictionary order. An empty
/// result is not an error; callers decide whether the letter set is usable.
pub fn filter_words(
    dictionary: &[String],
    pool: &LetterPool,
    min_len: usize,
    max_len: usize,
) -> Vec<String> {
    dictionary
        .par_iter()
        .filter(|word| (min_len..=max_len).contains(&word.len()) && pool.can_form(word))
        .cloned()
        .collect()
}

/// [`filter_words`] with the default 3..=7 length bounds.
pub fn candidate_words(dictionary: &[String], pool: &LetterPool) -> Vec<String> {
    filter_words(dictionary, pool, MIN_WORD_LEN, MAX_WORD_LEN)
}
