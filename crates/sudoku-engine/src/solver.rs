//! Recursive backtracking search.
//!
//! No candidate bookkeeping, no propagation, no heuristics: each call
//! re-checks the whole board, branches on the first unknown cell in
//! row-major order, and owns a private clone per attempted digit. Worst-case
//! depth is the number of unknown cells, so the stack stays shallow even
//! when the search tree is large.

use crate::{Grid, SolveError};

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle by exhaustive backtracking.
    ///
    /// Returns the solved board, `InvalidBoard` if the input already breaks
    /// a uniqueness rule, or `CannotSolveBoard` if every assignment to the
    /// unknown cells has been tried without success.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolveError> {
        solve_recursive(grid.deep_clone())
    }
}

fn solve_recursive(grid: Grid) -> Result<Grid, SolveError> {
    let complete = grid.is_complete();
    let valid = grid.is_valid();

    if complete && valid {
        return Ok(grid);
    }
    if !valid {
        // covers both a bad input board and a contradicting candidate
        // assignment made one level up
        return Err(SolveError::InvalidBoard);
    }

    // valid but incomplete, so an unknown cell must exist
    let Some(pos) = grid.first_unknown() else {
        return Err(SolveError::CannotSolveBoard);
    };

    let dim = grid.dim() as u8;
    for candidate in 1..=dim {
        let mut attempt = grid.deep_clone();
        attempt.set(pos, candidate);
        if let Ok(solved) = solve_recursive(attempt) {
            // first success wins
            return Ok(solved);
        }
    }

    // every digit at this cell, and thus every path below it, failed
    Err(SolveError::CannotSolveBoard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, UNKNOWN};

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solves_classic_board() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        assert!(solution.is_complete());
        assert!(solution.is_valid());
        assert_eq!(solution.to_string_compact(), CLASSIC_SOLVED);
        assert_eq!(solution.to_string().lines().next(), Some("5 3 4 6 7 8 9 1 2"));
    }

    #[test]
    fn test_solved_board_returned_unchanged() {
        let solved = Grid::from_string(CLASSIC_SOLVED).unwrap();
        let result = Solver::new().solve(&solved).unwrap();
        assert_eq!(result, solved);
    }

    #[test]
    fn test_input_board_is_not_mutated() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let before = grid.deep_clone();
        let _ = Solver::new().solve(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_row_duplicate_rejected_before_search() {
        let mut rows = vec![vec![UNKNOWN; 9]; 9];
        rows[2][0] = 5;
        rows[2][6] = 5;
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(Solver::new().solve(&grid), Err(SolveError::InvalidBoard));
    }

    #[test]
    fn test_complete_but_invalid_fails_as_invalid() {
        // completeness never overrides invalidity
        let grid = Grid::from_rows(vec![vec![1; 9]; 9]).unwrap();
        assert_eq!(Solver::new().solve(&grid), Err(SolveError::InvalidBoard));
    }

    #[test]
    fn test_unsolvable_but_currently_valid_board() {
        // (0,0) is forced to 9 by its row, but column 0 already holds a 9:
        // no duplicate exists yet, so the board reads as valid, yet no
        // completion can exist.
        let mut rows = vec![vec![UNKNOWN; 9]; 9];
        for c in 1..9 {
            rows[0][c] = c as u8;
        }
        rows[1][0] = 9;
        let grid = Grid::from_rows(rows).unwrap();
        assert!(grid.is_valid());
        assert_eq!(
            Solver::new().solve(&grid),
            Err(SolveError::CannotSolveBoard)
        );
    }

    #[test]
    fn test_solves_4x4_board() {
        let rows = vec![
            vec![1, 0, 3, 4],
            vec![3, 4, 0, 2],
            vec![2, 1, 4, 3],
            vec![0, 3, 2, 1],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        assert_eq!(solution.get(Position::new(0, 1)), 2);
        assert_eq!(solution.get(Position::new(1, 2)), 1);
        assert_eq!(solution.get(Position::new(3, 0)), 4);
        assert!(solution.is_complete() && solution.is_valid());
    }

    #[test]
    fn test_solves_1x1_board() {
        let grid = Grid::from_rows(vec![vec![UNKNOWN]]).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        assert_eq!(solution.get(Position::new(0, 0)), 1);
    }

    #[test]
    fn test_candidates_tried_ascending() {
        // an empty 4×4 board solves to the lexicographically smallest fill,
        // which pins the fixed row-major / ascending-candidate order
        let grid = Grid::from_rows(vec![vec![UNKNOWN; 4]; 4]).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        assert_eq!(solution.to_string_compact(), "1234341221434321");
    }
}
