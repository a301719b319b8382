//! Basic example of using the Sudoku engine

use sudoku_engine::{Grid, Position, SolveError, Solver};

fn main() {
    // Parse the classic sample board from a compact string
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_string(puzzle_string).expect("sample board is well-formed");

    println!("Puzzle ({} empty cells):", puzzle.empty_count());
    println!("{}", puzzle);

    // Solve it
    let solver = Solver::new();
    match solver.solve(&puzzle) {
        Ok(solution) => {
            println!("Solution:");
            println!("{}", solution);
            println!("Compact: {}", solution.to_string_compact());
        }
        Err(e) => println!("No solution: {} (code {})", e, e.code()),
    }

    // Error handling: a board with two 5s in the same row is rejected
    // before any search happens
    let mut bad = puzzle.deep_clone();
    bad.set(Position::new(0, 8), 5);
    match solver.solve(&bad) {
        Err(SolveError::InvalidBoard) => println!("\nBad board rejected as expected"),
        other => println!("\nUnexpected result: {:?}", other),
    }
}
