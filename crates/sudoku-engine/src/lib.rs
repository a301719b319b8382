//! Brute-force Sudoku engine.
//!
//! The engine is split into a board model ([`Grid`]) that knows the rules of
//! the game, and a [`Solver`] that fills the board by exhaustive recursive
//! backtracking. Text input lives in [`parse`]; callers at the process
//! boundary map [`SolveError`] to exit codes via [`SolveError::code`].
//!
//! ```
//! use sudoku_engine::{Grid, Solver};
//!
//! let puzzle =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
//! let grid = Grid::from_string(puzzle).unwrap();
//! let solution = Solver::new().solve(&grid).unwrap();
//! assert!(solution.is_complete() && solution.is_valid());
//! ```

mod error;
mod grid;
pub mod parse;
mod solver;

pub use error::SolveError;
pub use grid::{Grid, Position, UNKNOWN};
pub use solver::Solver;
