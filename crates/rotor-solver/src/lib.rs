//! Solver library for the gold/silver rotor interlocking puzzle.
//!
//! This crate models how the two rings mesh, which manipulations are
//! physically possible, and finds a shortest sequence of moves between two
//! configurations with a breadth-first search.

pub mod clearance;
pub mod engine;
pub mod error;
pub mod puzzle;
pub mod solver;

// Re-export main types
pub use clearance::{can_slide_on_gold, can_slide_on_silver, escape_clears};
pub use engine::{
    apply_move, loop_on_gold, loop_on_silver, replay, slide_on_gold, slide_on_silver, successors,
    verify_solution,
};
pub use error::{RotorError, RotorResult};
pub use puzzle::{is_clockwise_of, ContactPoint, Escape, Move, Piece, PuzzleState, Spoke};
pub use solver::{
    distances_from, eccentricity, find_shortest_path, reachable_states, SearchStats,
    SolveOutcome, SolverConfig, SolverResult,
};
