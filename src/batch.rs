use crate::config::GeneratorConfig;
use crate::dictionary::Dictionary;
use crate::error::GenerateError;
use crate::puzzle::Puzzle;
use crate::sampler::LetterSampler;
use crate::session::PuzzleSession;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Result of one session in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub id: u64,
    pub result: Result<Puzzle, GenerateError>,
}

/// Per-id generator. With a base seed the stream for an id does not depend on
/// which thread runs it or on the other ids in the batch.
fn rng_for(seed: Option<u64>, id: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ id.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        None => StdRng::from_entropy(),
    }
}

/// Runs one session per id on the rayon pool. Outcomes come back in `ids`
/// order; a failed id is logged and reported, never fatal to the batch.
pub fn generate_batch<S: LetterSampler + Sync>(
    ids: &[u64],
    dictionary: &Dictionary,
    sampler: &S,
    config: &GeneratorConfig,
) -> Vec<BatchOutcome> {
    let session = PuzzleSession::new(config.clone());
    ids.par_iter()
        .map(|&id| {
            let mut rng = rng_for(config.seed, id);
            let result = session.next_puzzle(id, dictionary, sampler, &mut rng);
            if let Err(e) = &result {
                log::warn!("Puzzle {id}: {e}");
            }
            BatchOutcome { id, result }
        })
        .collect()
}
