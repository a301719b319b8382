use crate::SolveError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Sentinel for a cell that has no digit yet. Exempt from duplicate checks.
pub const UNKNOWN: u8 = 0;

/// A cell position on the board (0-indexed, row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The puzzle state: a square board of cells holding digits `1..=dim`,
/// with [`UNKNOWN`] (0) marking unassigned cells.
///
/// The board dimension is fixed at construction and must have an integer
/// square root, since the pods (sub-regions) are `√dim × √dim` blocks.
/// 9×9 is the primary case; 1×1 and 4×4 work through the same code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<u8>>,
}

impl Grid {
    /// Build a grid from caller-supplied rows.
    ///
    /// Rejects as `InvalidBoard`: ragged rows, a non-square shape, a
    /// dimension without an integer square root, and cell values above the
    /// dimension. Duplicate digits are NOT rejected here; that is the
    /// solver's job via [`Grid::is_valid`].
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, SolveError> {
        let dim = rows.len();
        if pod_size(dim).is_none() {
            return Err(SolveError::InvalidBoard);
        }
        for row in &rows {
            if row.len() != dim {
                return Err(SolveError::InvalidBoard);
            }
            if row.iter().any(|&v| v as usize > dim) {
                return Err(SolveError::InvalidBoard);
            }
        }
        Ok(Self { cells: rows })
    }

    /// Parse a grid from a compact digit string, one character per cell in
    /// row-major order (`0` or `.` for unknown). 81 characters for 9×9.
    /// One character holds one digit, so the compact form stops at 9×9;
    /// larger boards go through [`Grid::from_rows`].
    pub fn from_string(s: &str) -> Result<Self, SolveError> {
        let s = s.trim();
        let dim = pod_size(s.chars().count()).ok_or(SolveError::InvalidBoard)?;
        let values = s
            .chars()
            .map(|c| match c {
                '.' => Ok(UNKNOWN),
                _ => c
                    .to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(SolveError::InvalidBoard),
            })
            .collect::<Result<Vec<u8>, SolveError>>()?;
        let rows = values.chunks(dim).map(|chunk| chunk.to_vec()).collect();
        Self::from_rows(rows)
    }

    /// Board dimension (9 for a standard puzzle).
    pub fn dim(&self) -> usize {
        self.cells.len()
    }

    /// Value at a position (0 = unknown).
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set the value at a position. No rule checking happens here.
    pub fn set(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Fully independent copy; mutations on the copy never touch `self`.
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// True iff every cell holds a digit (no unknown markers left).
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&v| v != UNKNOWN))
    }

    /// True iff no row, column, or pod contains a duplicate digit.
    /// Unknown cells never count as duplicates, so partial boards can be
    /// valid. One violation anywhere makes the whole board invalid.
    pub fn is_valid(&self) -> bool {
        self.rows_valid() && self.cols_valid() && self.pods_valid()
    }

    /// First unknown cell in row-major order, if any.
    pub fn first_unknown(&self) -> Option<Position> {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == UNKNOWN {
                    return Some(Position::new(r, c));
                }
            }
        }
        None
    }

    /// Number of unknown cells remaining.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&v| v == UNKNOWN)
            .count()
    }

    /// Pod (sub-region) index of a position: `√N*(r/√N) + c/√N`.
    /// Pods tile the board left-to-right, top-to-bottom; for 9×9 the
    /// top-left block is pod 0 and the bottom-right block is pod 8.
    pub fn pod_of(&self, pos: Position) -> usize {
        // from_rows guarantees the dimension has an integer square root
        let size = pod_size(self.dim()).unwrap_or(1);
        size * (pos.row / size) + pos.col / size
    }

    /// Single-line rendering, one digit character per cell. Like
    /// [`Grid::from_string`], this only covers boards up to 9×9; a two-digit
    /// cell value has no single-character form.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .map(|v| char::from(b'0' + v))
            .collect()
    }

    fn rows_valid(&self) -> bool {
        self.cells.iter().all(|row| valid_set(row))
    }

    fn cols_valid(&self) -> bool {
        // transpose, then reuse the row check
        let dim = self.dim();
        let mut cols = vec![Vec::with_capacity(dim); dim];
        for row in &self.cells {
            for (c, &v) in row.iter().enumerate() {
                cols[c].push(v);
            }
        }
        cols.iter().all(|col| valid_set(col))
    }

    fn pods_valid(&self) -> bool {
        let dim = self.dim();
        let mut pods = vec![Vec::with_capacity(dim); dim];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                pods[self.pod_of(Position::new(r, c))].push(v);
            }
        }
        pods.iter().all(|pod| valid_set(pod))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Duplicate check over one row/column/pod: walk the values keeping a seen
/// set; a repeated nonzero value makes the set invalid.
fn valid_set(values: &[u8]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    for &v in values {
        if v != UNKNOWN && !seen.insert(v) {
            return false;
        }
    }
    true
}

/// Integer square root of `n`, or `None` if `n` is zero or not a perfect
/// square. A board needs at least one 1×1 pod, so 0 is not a usable root.
fn pod_size(n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let mut root = 1;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    (root * root == n).then_some(root)
}
