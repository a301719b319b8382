//! Command-line front end for the brute-force Sudoku engine.
//!
//! Reads a board from stdin by default, solves it, and prints the solution
//! to stdout. Rule violations exit with code 10, unsolvable boards with 11,
//! I/O problems with 1. Set `RUST_LOG=debug` for parse and timing output.

use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use sudoku_engine::{parse, Grid, SolveError, Solver};
use thiserror::Error;

#[derive(Parser)]
#[command(
    version,
    about = "Solve a Sudoku board by exhaustive backtracking",
    long_about = "Reads a board as whitespace-separated rows from stdin (or a file), \
                  with 0 marking empty cells, and prints the solved board."
)]
struct Cli {
    /// Read the board from a text file instead of stdin
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Read the board as a compact digit string (81 chars for 9x9, 0 or . for empty)
    #[arg(short = 's', long, value_name = "STRING", conflicts_with = "input")]
    puzzle: Option<String>,

    /// Print the solution as a single compact digit string
    #[arg(short = 'c', long)]
    compact: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Solve(#[from] SolveError),
}

impl CliError {
    fn code(&self) -> i32 {
        match self {
            CliError::Io(_) => 1,
            CliError::Solve(e) => e.code(),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(solution) => {
            if cli.compact {
                println!("{}", solution.to_string_compact());
            } else {
                print!("{}", solution);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.code());
        }
    }
}

fn run(cli: &Cli) -> Result<Grid, CliError> {
    let grid = load_board(cli)?;
    debug!("parsed {}x{} board, {} empty cells", grid.dim(), grid.dim(), grid.empty_count());

    let started = Instant::now();
    let solution = Solver::new().solve(&grid)?;
    info!("solved in {:.2?}", started.elapsed());

    Ok(solution)
}

fn load_board(cli: &Cli) -> Result<Grid, CliError> {
    if let Some(s) = &cli.puzzle {
        return Ok(Grid::from_string(s)?);
    }
    if let Some(path) = &cli.input {
        let file = File::open(path)?;
        return Ok(parse::read_board(BufReader::new(file))?);
    }
    Ok(parse::read_board(io::stdin().lock())?)
}
