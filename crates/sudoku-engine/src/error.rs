use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy of the engine. Both kinds are terminal: the solver never
/// retries past them, and no partial board accompanies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum SolveError {
    /// The board breaks a row, column, or pod uniqueness rule.
    #[error("invalid board")]
    InvalidBoard,
    /// The board is well-formed but exhaustive search found no solution.
    #[error("cannot solve board")]
    CannotSolveBoard,
}

impl SolveError {
    /// Stable numeric code for process-exit mapping.
    pub fn code(&self) -> i32 {
        match self {
            SolveError::InvalidBoard => 10,
            SolveError::CannotSolveBoard => 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(SolveError::InvalidBoard.code(), 10);
        assert_eq!(SolveError::CannotSolveBoard.code(), 11);
    }

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(SolveError::InvalidBoard.to_string(), "invalid board");
        assert_eq!(SolveError::CannotSolveBoard.to_string(), "cannot solve board");
    }
}
