use std::fmt;

pub const DEFAULT_GRID_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// Record code: `h` or `v`.
    pub fn code(self) -> char {
        match self {
            Self::Horizontal => 'h',
            Self::Vertical => 'v',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "h" => Some(Self::Horizontal),
            "v" => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Cell of the `i`-th letter of a word starting at `(row, col)`.
    pub fn step(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Self::Horizontal => (row, col + i),
            Self::Vertical => (row + i, col),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Square letter buffer. Cells are empty or hold one lowercase letter; the
/// grid does not remember which word wrote a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col].map(char::from)
    }

    /// True iff every target cell is in bounds and either empty or already
    /// holding the matching letter. Never mutates.
    pub fn fits(&self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        let len = word.len();
        let (along, across) = match direction {
            Direction::Vertical => (row, col),
            Direction::Horizontal => (col, row),
        };
        // Coordinates may come from untrusted records, so never add to them.
        let in_bounds = across < self.size && along < self.size && len <= self.size - along;
        if !in_bounds {
            return false;
        }
        word.bytes().enumerate().all(|(i, letter)| {
            let (r, c) = direction.step(row, col, i);
            match self.cells[r * self.size + c] {
                None => true,
                Some(existing) => existing == letter,
            }
        })
    }

    /// Writes `word` into the grid.
    ///
    /// # Panics
    /// If the placement does not [`fit`](Self::fits). Callers must check first.
    pub fn place(&mut self, word: &str, row: usize, col: usize, direction: Direction) {
        assert!(
            self.fits(word, row, col, direction),
            "placing {word:?} at ({row}, {col}) {direction:?} violates grid contents"
        );
        for (i, letter) in word.bytes().enumerate() {
            let (r, c) = direction.step(row, col, i);
            self.cells[r * self.size + c] = Some(letter);
        }
    }

    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Smallest `(min_row, min_col, max_row, max_col)` box holding every
    /// letter, or `None` for an empty grid.
    pub fn bounding_box(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                continue;
            }
            let (r, c) = (idx / self.size, idx % self.size);
            bounds = Some(match bounds {
                None => (r, c, r, c),
                Some((r0, c0, r1, c1)) => (r0.min(r), c0.min(c), r1.max(r), c1.max(c)),
            });
        }
        bounds
    }

    /// One string per row, `.` for empty cells.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.map_or('.', char::from)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
