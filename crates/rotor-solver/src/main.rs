//! CLI entry point for the rotor solver.
//!
//! Usage:
//!   rotor-solver solve --start <STATE> [--target <STATE>] [options]
//!   rotor-solver solve --file <puzzle.json> [options]
//!   rotor-solver solve --stdin [options]
//!   rotor-solver reachable --start <STATE> [--moves <MOVES>]
//!
//! A STATE is `goldEscape,silverSpoke,silverEscape,goldSpoke,asc|desc`,
//! e.g. `E34,S45,E56,S45,asc`. The target defaults to the solved state.
//!
//! Options:
//!   --moves <MOVES>   Comma-separated moves to allow (default: L/G,L/S,S/G,S/S)
//!   --locate          First find the start from the solved state, then solve
//!
//! Exits 0 when every requested search is solved, 1 when any is unsolvable
//! and 2 on bad input.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;
use serde::{Deserialize, Serialize};

use rotor_solver::{
    eccentricity, find_shortest_path, reachable_states, Move, PuzzleState, RotorError,
    RotorResult, SearchStats, SolverConfig, SolverResult,
};

#[derive(Parser)]
#[command(name = "rotor-solver")]
#[command(about = "Shortest-path solver for the gold/silver rotor puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest move sequence between two states
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle JSON from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Start state
        #[arg(long)]
        start: Option<PuzzleState>,

        /// Target state (default: solved)
        #[arg(long)]
        target: Option<PuzzleState>,

        /// Moves the search may use, in expansion order
        #[arg(long, value_delimiter = ',')]
        moves: Option<Vec<Move>>,

        /// Also report how to reach the start from the solved state
        #[arg(long)]
        locate: bool,
    },

    /// Count the states reachable from a start state
    Reachable {
        #[arg(long)]
        start: PuzzleState,

        #[arg(long, value_delimiter = ',')]
        moves: Option<Vec<Move>>,
    },
}

/// Puzzle description accepted on stdin or from a file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PuzzleRequest {
    start: PuzzleState,
    #[serde(default)]
    target: Option<PuzzleState>,
    #[serde(default)]
    moves: Option<Vec<Move>>,
}

/// One search leg in the output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LegOutput {
    from: PuzzleState,
    to: PuzzleState,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<Move>>,
    stats: SearchStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    /// True only if the locate leg (when requested) and the solution both succeeded
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    locate: Option<LegOutput>,
    solution: LegOutput,
}

impl SolveOutput {
    fn new(locate: Option<LegOutput>, solution: LegOutput) -> Self {
        let solved = solution.solved && locate.as_ref().map_or(true, |leg| leg.solved);
        Self {
            solved,
            locate,
            solution,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReachableOutput {
    start: PuzzleState,
    reachable_states: usize,
    eccentricity: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the requested puzzle was solved
fn run(cli: Cli) -> RotorResult<bool> {
    match cli.command {
        Commands::Solve {
            file,
            stdin,
            start,
            target,
            moves,
            locate,
        } => {
            let request = read_request(file, stdin, start, target, moves)?;
            let config = request
                .moves
                .map(|m| SolverConfig::with_moves(&m))
                .unwrap_or_default();
            let target = request.target.unwrap_or(PuzzleState::SOLVED);

            // Locating the start is its own search, composed with the solve below.
            let locate = if locate {
                info!("locating {} from the solved state", request.start);
                let result = find_shortest_path(&PuzzleState::SOLVED, &request.start, &config);
                Some(format_leg(PuzzleState::SOLVED, request.start, &result))
            } else {
                None
            };

            let result = find_shortest_path(&request.start, &target, &config);
            let solution = format_leg(request.start, target, &result);
            let output = SolveOutput::new(locate, solution);

            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(output.solved)
        }

        Commands::Reachable { start, moves } => {
            let moves = moves.unwrap_or_else(|| Move::ALL.to_vec());
            let output = ReachableOutput {
                start,
                reachable_states: reachable_states(&start, &moves).len(),
                eccentricity: eccentricity(&start, &moves),
            };

            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(true)
        }
    }
}

/// Merge JSON input with command-line overrides
fn read_request(
    file: Option<PathBuf>,
    stdin: bool,
    start: Option<PuzzleState>,
    target: Option<PuzzleState>,
    moves: Option<Vec<Move>>,
) -> RotorResult<PuzzleRequest> {
    let json_content = if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Some(buffer)
    } else if let Some(path) = file {
        Some(fs::read_to_string(&path)?)
    } else {
        None
    };

    let mut request = match (json_content, start) {
        (Some(json), _) => serde_json::from_str::<PuzzleRequest>(&json)?,
        (None, Some(start)) => PuzzleRequest {
            start,
            target: None,
            moves: None,
        },
        (None, None) => return Err(RotorError::MissingState),
    };

    if let Some(start) = start {
        request.start = start;
    }
    if target.is_some() {
        request.target = target;
    }
    if moves.is_some() {
        request.moves = moves;
    }
    Ok(request)
}

fn format_leg(from: PuzzleState, to: PuzzleState, result: &SolverResult) -> LegOutput {
    LegOutput {
        from,
        to,
        solved: result.is_solved(),
        moves: result.path().map(|p| p.to_vec()),
        stats: result.stats,
    }
}
