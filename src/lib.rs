// Library interface for wordscape-gen
// This allows integration tests to access internal modules

pub mod batch;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod grid;
pub mod letter_pool;
pub mod logging;
pub mod puzzle;
pub mod sampler;
pub mod session;
pub mod sink;
pub mod tui;
pub mod word_filter;

// Re-export commonly used items for easier testing
pub use batch::{BatchOutcome, generate_batch};
pub use config::GeneratorConfig;
pub use dictionary::{
    Dictionary, EMBEDDED_DICTIONARY, load_dictionary_from_file, load_dictionary_from_str,
    load_frequency_list_from_file, load_frequency_list_from_str,
};
pub use engine::PlacementEngine;
pub use error::{DictionaryError, GenerateError, RecordError};
pub use grid::{Direction, Grid};
pub use letter_pool::LetterPool;
pub use puzzle::{Placement, Puzzle, read_puzzles};
pub use sampler::{FixedLetters, LetterSampler, VowelBiasedSampler};
pub use session::PuzzleSession;
pub use sink::{PuzzleSink, RecordWriter, SinkSummary, emit_all};
pub use word_filter::{candidate_words, filter_words};
