use crate::batch::generate_batch;
use crate::config::{
    DEFAULT_MAX_SESSION_ATTEMPTS, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, GeneratorConfig,
};
use crate::dictionary::{
    DEFAULT_MIN_COUNT, Dictionary, load_default_dictionary, load_dictionary_from_file,
    load_frequency_list_from_file,
};
use crate::engine::{DEFAULT_ATTEMPTS, DEFAULT_PER_WORD_TRIES};
use crate::error::{DictionaryError, GenerateError, RecordError};
use crate::grid::DEFAULT_GRID_SIZE;
use crate::info_log;
use crate::puzzle::Puzzle;
use crate::sampler::VowelBiasedSampler;
use crate::sink::{RecordWriter, SinkSummary, emit_all};
use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word-placement puzzle generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate puzzles and write them as pipe-delimited records
    Generate(GenerateArgs),
    /// Parse and replay every record in a puzzle file
    Check {
        path: PathBuf,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
    },
    /// Browse a puzzle file in the terminal
    View {
        path: PathBuf,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of puzzles to generate
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: u64,

    /// Id of the first puzzle
    #[arg(long, default_value_t = 1)]
    pub start_id: u64,

    /// Path to a newline-delimited word list
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Treat the dictionary as `word count` lines
    #[arg(long)]
    pub frequency_list: bool,

    /// Minimum (exclusive) count for frequency-list words
    #[arg(long, default_value_t = DEFAULT_MIN_COUNT)]
    pub min_count: u64,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads, all cores when omitted
    #[arg(long)]
    pub threads: Option<usize>,

    /// Construction attempts per letter set
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Random positions tried per word
    #[arg(long, default_value_t = DEFAULT_PER_WORD_TRIES)]
    pub tries: usize,

    /// Letter sets tried per puzzle
    #[arg(long, default_value_t = DEFAULT_MAX_SESSION_ATTEMPTS)]
    pub session_attempts: usize,

    /// Grid width and height
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    #[arg(long, default_value_t = DEFAULT_MIN_WORDS)]
    pub min_words: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
    pub max_words: usize,
}

impl GenerateArgs {
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            grid_size: self.size,
            min_words: self.min_words,
            max_words: self.max_words,
            max_session_attempts: self.session_attempts,
            attempts: self.attempts,
            per_word_tries: self.tries,
            seed: self.seed,
            ..GeneratorConfig::default()
        }
    }

    pub fn ids(&self) -> Vec<u64> {
        (self.start_id..self.start_id.saturating_add(self.count)).collect()
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Config(#[from] GenerateError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error on {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub fn load_dictionary(args: &GenerateArgs) -> Result<Dictionary, DictionaryError> {
    match &args.dictionary_path {
        Some(path) if args.frequency_list => load_frequency_list_from_file(path, args.min_count),
        Some(path) => load_dictionary_from_file(path),
        None => Ok(load_default_dictionary()),
    }
}

fn open_file(path: &Path) -> Result<File, CliError> {
    File::open(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Generates `args.count` puzzles and writes their records.
pub fn run_generate(args: &GenerateArgs) -> Result<SinkSummary, CliError> {
    let config = args.to_config();
    config.validate()?;
    let dictionary = load_dictionary(args)?;
    info_log!("Loaded {} words", dictionary.len());

    let ids = args.ids();
    let sampler = VowelBiasedSampler::default();
    let outcomes = match args.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(|| generate_batch(&ids, &dictionary, &sampler, &config)),
        None => generate_batch(&ids, &dictionary, &sampler, &config),
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|source| {
            CliError::File {
                path: path.clone(),
                source,
            }
        })?)),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = RecordWriter::new(writer);
    emit_all(&outcomes, &mut sink)?;
    let summary = sink.summary().clone();
    sink.into_inner()?;
    Ok(summary)
}

/// Outcome of validating a puzzle file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub valid: usize,
    pub problems: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Parses and replays every record, collecting all problems instead of
/// stopping at the first.
pub fn check_records<R: BufRead>(reader: R, size: usize) -> Result<CheckReport, CliError> {
    let mut report = CheckReport::default();
    let mut ids = HashSet::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let puzzle = match line.parse::<Puzzle>() {
            Ok(puzzle) => puzzle,
            Err(e) => {
                report.problems.push(format!("line {line_no}: {e}"));
                continue;
            }
        };
        if let Err(e) = puzzle.replay(size) {
            report.problems.push(format!("line {line_no}: {e}"));
            continue;
        }
        let mut words = HashSet::new();
        if let Some(word) = puzzle.words().find(|w| !words.insert(*w)) {
            report
                .problems
                .push(format!("line {line_no}: word {word:?} placed twice"));
            continue;
        }
        if !ids.insert(puzzle.id) {
            report
                .problems
                .push(format!("line {line_no}: duplicate puzzle id {}", puzzle.id));
            continue;
        }
        report.valid += 1;
    }
    Ok(report)
}

pub fn run_check(path: &Path, size: usize) -> Result<CheckReport, CliError> {
    check_records(BufReader::new(open_file(path)?), size)
}

pub fn read_puzzle_file(path: &Path) -> Result<Vec<Puzzle>, CliError> {
    Ok(crate::puzzle::read_puzzles(BufReader::new(open_file(path)?))?)
}

pub fn display_summary(summary: &SinkSummary, requested: usize) {
    eprintln!("Generated {} of {} puzzles.", summary.written, requested);
    if !summary.failed.is_empty() {
        let ids: Vec<String> = summary.failed.iter().map(u64::to_string).collect();
        eprintln!("Failed ids: {}", ids.join(", "));
    }
}

pub fn display_check_report(report: &CheckReport) {
    for problem in &report.problems {
        println!("{problem}");
    }
    println!("{} valid, {} invalid", report.valid, report.problems.len());
}
