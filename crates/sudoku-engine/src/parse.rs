//! Text input for boards.
//!
//! Boards arrive as whitespace-separated rows, one row per line. The first
//! non-blank line fixes the board width and exactly that many rows are read,
//! so a 9-column first line yields a 9×9 board. Tokens that fail to parse as
//! a digit (letters, negatives, overlong numbers) become the unknown marker;
//! the shape and range rules of [`Grid::from_rows`] still apply afterwards.

use crate::{Grid, SolveError, UNKNOWN};
use std::io::BufRead;

/// Read a board from a line-oriented reader (stdin, a file, a string).
///
/// Blank lines before and between rows are skipped. A row with a different
/// token count than the first, or too few rows before EOF, is `InvalidBoard`.
pub fn read_board<R: BufRead>(reader: R) -> Result<Grid, SolveError> {
    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut width: Option<usize> = None;

    for line in reader.lines() {
        let line = line.map_err(|_| SolveError::InvalidBoard)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(tokens.len());
        if tokens.len() != expected {
            return Err(SolveError::InvalidBoard);
        }

        rows.push(tokens.iter().map(|t| parse_cell(t)).collect());
        if rows.len() == expected {
            break;
        }
    }

    match width {
        Some(expected) if rows.len() == expected => Grid::from_rows(rows),
        _ => Err(SolveError::InvalidBoard),
    }
}

/// Map one token to a cell value. Anything that is not a small nonnegative
/// integer reads as unknown.
fn parse_cell(token: &str) -> u8 {
    token.parse::<u8>().unwrap_or(UNKNOWN)
}
