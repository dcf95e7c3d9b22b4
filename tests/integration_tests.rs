// Integration tests for wordscape-gen
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use wordscape_gen::cli::check_records;
use wordscape_gen::*;

fn example_dictionary() -> Dictionary {
    Dictionary::from_words(["eat", "rat", "tars", "stare", "rate"])
}

/// Every word is spellable from the letter set and sits where the record says.
fn assert_sound(puzzle: &Puzzle, dictionary: &Dictionary, size: usize) {
    let pool = LetterPool::new(&puzzle.letters).unwrap();
    let grid = puzzle.replay(size).unwrap();
    let mut seen = HashSet::new();
    for placement in &puzzle.placements {
        assert!(pool.can_form(&placement.word), "{} not formable", placement.word);
        assert!(dictionary.contains(&placement.word));
        assert!(seen.insert(placement.word.clone()), "{} repeated", placement.word);
        for (i, (row, col)) in placement.cells().enumerate() {
            assert_eq!(grid.get(row, col), placement.word.chars().nth(i));
        }
    }
}

#[test]
fn test_end_to_end_batch_to_records() {
    // Generate a seeded batch, write it, read it back and replay every record
    let dictionary = load_dictionary_from_str(EMBEDDED_DICTIONARY);
    let config = GeneratorConfig {
        seed: Some(2024),
        ..GeneratorConfig::default()
    };
    let ids: Vec<u64> = (1..=20).collect();
    let outcomes = generate_batch(&ids, &dictionary, &VowelBiasedSampler::default(), &config);

    let mut sink = RecordWriter::new(Vec::new());
    emit_all(&outcomes, &mut sink).unwrap();
    let summary = sink.summary().clone();
    assert_eq!(summary.written + summary.failed.len(), ids.len());

    let bytes = sink.into_inner().unwrap();
    let puzzles = read_puzzles(Cursor::new(bytes)).unwrap();
    assert_eq!(puzzles.len(), summary.written);

    for puzzle in &puzzles {
        let len = puzzle.letters.len();
        assert!((5..=7).contains(&len));
        assert!(puzzle.placements.len() >= config.min_words);
        assert!(puzzle.placements.len() <= config.max_words);
        assert_eq!(puzzle.placements[0].direction, Direction::Horizontal);
        assert_sound(puzzle, &dictionary, config.grid_size);
    }
}

#[test]
fn test_generated_output_passes_check() {
    // The check command accepts whatever the generator writes
    let dictionary = load_dictionary_from_str(EMBEDDED_DICTIONARY);
    let config = GeneratorConfig {
        seed: Some(5),
        ..GeneratorConfig::default()
    };
    let sampler = VowelBiasedSampler::default();
    let outcomes = generate_batch(&[1, 2, 3, 4, 5], &dictionary, &sampler, &config);
    let mut sink = RecordWriter::new(Vec::new());
    emit_all(&outcomes, &mut sink).unwrap();
    let written = sink.summary().written;
    let bytes = sink.into_inner().unwrap();

    let report = check_records(Cursor::new(bytes), config.grid_size).unwrap();
    assert!(report.is_ok(), "{:?}", report.problems);
    assert_eq!(report.valid, written);
}

#[test]
fn test_example_letter_set() {
    // Letters "aetrs" against a tiny dictionary produce a sound puzzle
    let dictionary = example_dictionary();
    let session = PuzzleSession::default();
    let mut rng = StdRng::seed_from_u64(11);
    let puzzle = session
        .next_puzzle(1, &dictionary, &FixedLetters("aetrs".to_string()), &mut rng)
        .unwrap();

    let candidates = candidate_words(dictionary.words(), &LetterPool::new("aetrs").unwrap());
    assert_eq!(candidates.len(), 5);
    assert!(puzzle.placements.len() >= 3);
    assert!(
        ["tars", "stare", "rate"].contains(&puzzle.placements[0].word.as_str()),
        "anchor should be a word of at least four letters"
    );
    assert_sound(&puzzle, &dictionary, 15);

    let record = puzzle.to_string();
    assert!(record.starts_with("1|aetrs|"));
    assert_eq!(record.parse::<Puzzle>().unwrap(), puzzle);
}

#[test]
fn test_unusable_letter_set_never_places() {
    // Rare letters leave too few candidates; the session gives up cleanly
    let dictionary = load_dictionary_from_str(EMBEDDED_DICTIONARY);
    let pool = LetterPool::new("zzqxj").unwrap();
    assert!(candidate_words(dictionary.words(), &pool).len() < 5);

    let config = GeneratorConfig {
        max_session_attempts: 4,
        seed: Some(3),
        ..GeneratorConfig::default()
    };
    let sampler = FixedLetters("zzqxj".to_string());
    let outcomes = generate_batch(&[42], &dictionary, &sampler, &config);
    assert_eq!(
        outcomes[0].result,
        Err(GenerateError::PuzzleGenerationFailure { id: 42, attempts: 4 })
    );
}

#[test]
fn test_dictionary_file_feeds_session() {
    // A frequency list on disk drives generation just like the embedded list
    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("wordscape_gen_frequency_test.txt");
    fs::write(
        &path,
        "stare 90000\nrate 50000\ntars 4000\neat 120000\nrat 2500\ntea 1000\nxyz 999999999\n",
    )
    .unwrap();

    let dictionary = load_frequency_list_from_file(&path, 1000).unwrap();
    fs::remove_file(&path).ok();
    // "tea" sits exactly on the threshold
    assert!(!dictionary.contains("tea"));
    assert!(dictionary.contains("rat"));

    let session = PuzzleSession::default();
    let mut rng = StdRng::seed_from_u64(8);
    let puzzle = session
        .next_puzzle(7, &dictionary, &FixedLetters("aetrs".to_string()), &mut rng)
        .unwrap();
    assert_sound(&puzzle, &dictionary, 15);
}

#[test]
fn test_missing_dictionary_file() {
    let result = load_dictionary_from_file("/nonexistent/wordscape/words.txt");
    assert!(matches!(result, Err(DictionaryError::Unavailable { .. })));
}
