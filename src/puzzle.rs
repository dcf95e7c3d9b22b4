//! Puzzle values and the pipe-delimited record format.
//!
//! A record is `id|letters|word,dir,row,col;word,dir,row,col;...` with
//! `dir` being `h` or `v`. This is the interchange format with downstream
//! consumers and must not change.

use crate::error::RecordError;
use crate::grid::{Direction, Grid};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// One committed word position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    pub word: String,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub fn new(word: impl Into<String>, direction: Direction, row: usize, col: usize) -> Self {
        Self {
            word: word.into(),
            direction,
            row,
            col,
        }
    }

    /// Cells covered by this placement, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.word.len()).map(|i| self.direction.step(self.row, self.col, i))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.word, self.direction, self.row, self.col)
    }
}

impl FromStr for Placement {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let [word, direction, row, col] = fields[..] else {
            return Err(RecordError::PlacementShape(s.to_string()));
        };
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RecordError::InvalidWord(word.to_string()));
        }
        let direction = Direction::from_code(direction)
            .ok_or_else(|| RecordError::InvalidDirection(direction.to_string()))?;
        let parse_coord = |value: &str| {
            value
                .parse::<usize>()
                .map_err(|_| RecordError::InvalidCoordinate(value.to_string()))
        };
        Ok(Self {
            word: word.to_ascii_lowercase(),
            direction,
            row: parse_coord(row)?,
            col: parse_coord(col)?,
        })
    }
}

/// A finished puzzle: the letter set and the ordered word placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub id: u64,
    pub letters: String,
    pub placements: Vec<Placement>,
}

impl Puzzle {
    pub fn new(id: u64, letters: impl Into<String>, placements: Vec<Placement>) -> Self {
        Self {
            id,
            letters: letters.into(),
            placements,
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|p| p.word.as_str())
    }

    /// Replays every placement, in order, onto a fresh grid. Fails on the
    /// first placement that is out of bounds or disagrees with an earlier one.
    pub fn replay(&self, size: usize) -> Result<Grid, RecordError> {
        let mut grid = Grid::new(size);
        for p in &self.placements {
            if !grid.fits(&p.word, p.row, p.col, p.direction) {
                return Err(RecordError::Conflict {
                    word: p.word.clone(),
                    row: p.row,
                    col: p.col,
                });
            }
            grid.place(&p.word, p.row, p.col, p.direction);
        }
        Ok(grid)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}|{}|", self.id, self.letters)?;
        for (i, placement) in self.placements.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{placement}")?;
        }
        Ok(())
    }
}

impl FromStr for Puzzle {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split('|').collect();
        let [id, letters, placements] = fields[..] else {
            return Err(RecordError::FieldCount(fields.len()));
        };
        let id = id
            .parse::<u64>()
            .map_err(|_| RecordError::InvalidId(id.to_string()))?;
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RecordError::InvalidLetters(letters.to_string()));
        }
        let placements = placements
            .split(';')
            .filter(|segment| !segment.is_empty())
            .map(Placement::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if placements.is_empty() {
            return Err(RecordError::NoPlacements);
        }
        Ok(Self {
            id,
            letters: letters.to_ascii_lowercase(),
            placements,
        })
    }
}

/// Parses one record per line, skipping blank lines. Errors carry the
/// 1-based line number.
pub fn read_puzzles<R: BufRead>(reader: R) -> Result<Vec<Puzzle>, RecordError> {
    let mut puzzles = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| RecordError::Io(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let puzzle = line.parse::<Puzzle>().map_err(|e| RecordError::Line {
            line: idx + 1,
            source: Box::new(e),
        })?;
        puzzles.push(puzzle);
    }
    Ok(puzzles)
}
