use crate::batch::BatchOutcome;
use crate::error::GenerateError;
use crate::puzzle::Puzzle;
use std::io::{self, Write};

/// Consumer of finished puzzles and per-id failures.
pub trait PuzzleSink {
    fn record(&mut self, puzzle: &Puzzle) -> io::Result<()>;
    fn failure(&mut self, id: u64, error: &GenerateError);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkSummary {
    pub written: usize,
    pub failed: Vec<u64>,
}

/// Writes one pipe-delimited record per line.
pub struct RecordWriter<W: Write> {
    writer: W,
    summary: SinkSummary,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            summary: SinkSummary::default(),
        }
    }

    pub fn summary(&self) -> &SinkSummary {
        &self.summary
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> PuzzleSink for RecordWriter<W> {
    fn record(&mut self, puzzle: &Puzzle) -> io::Result<()> {
        writeln!(self.writer, "{puzzle}")?;
        self.summary.written += 1;
        Ok(())
    }

    fn failure(&mut self, id: u64, error: &GenerateError) {
        log::warn!("Skipping puzzle {id}: {error}");
        self.summary.failed.push(id);
    }
}

/// Hands every outcome to `sink` in order. Stops only on a write error.
pub fn emit_all<S: PuzzleSink>(outcomes: &[BatchOutcome], sink: &mut S) -> io::Result<()> {
    for outcome in outcomes {
        match &outcome.result {
            Ok(puzzle) => sink.record(puzzle)?,
            Err(e) => sink.failure(outcome.id, e),
        }
    }
    Ok(())
}
