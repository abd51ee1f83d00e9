//! Move engine: the four physical manipulations of the puzzle.
//!
//! Loops turn the whole assembly over and always succeed; they advance one
//! piece's escape and the other piece's spoke and flip the orientation.
//! Slides drag a single spoke one position, never touch the orientation, and
//! are gated by the clearance rules in [`crate::clearance`].

use smallvec::SmallVec;

use crate::clearance::{can_slide, spoke_direction};
use crate::puzzle::{Move, Piece, PuzzleState};

/// Successor list for one state, in the order the moves were requested
pub type Successors = SmallVec<[(Move, PuzzleState); 4]>;

/// Loop on `piece`: advance its escape and the other piece's spoke, flip orientation.
pub fn loop_on(state: &PuzzleState, piece: Piece) -> PuzzleState {
    let other = piece.other();

    // The escape travels against the direction its own spoke would be dragged.
    let escape = state
        .escape_of(piece)
        .step(!spoke_direction(state, piece));
    let spoke = state.spoke_of(other).step(spoke_direction(state, other));

    state
        .with_escape(piece, escape)
        .with_spoke(other, spoke)
        .flipped()
}

/// Slide on `piece`: advance only the other piece's spoke.
///
/// Returns `None` when `piece`'s escape cannot clear the spoke in its way.
pub fn slide_on(state: &PuzzleState, piece: Piece) -> Option<PuzzleState> {
    if !can_slide(state, piece) {
        return None;
    }

    let other = piece.other();
    let spoke = state.spoke_of(other).step(spoke_direction(state, other));
    Some(state.with_spoke(other, spoke))
}

pub fn loop_on_gold(state: &PuzzleState) -> PuzzleState {
    loop_on(state, Piece::Gold)
}

pub fn loop_on_silver(state: &PuzzleState) -> PuzzleState {
    loop_on(state, Piece::Silver)
}

pub fn slide_on_gold(state: &PuzzleState) -> Option<PuzzleState> {
    slide_on(state, Piece::Gold)
}

pub fn slide_on_silver(state: &PuzzleState) -> Option<PuzzleState> {
    slide_on(state, Piece::Silver)
}

/// Apply a single move, `None` if it is an infeasible slide
pub fn apply_move(state: &PuzzleState, mv: Move) -> Option<PuzzleState> {
    if mv.is_loop() {
        Some(loop_on(state, mv.piece()))
    } else {
        slide_on(state, mv.piece())
    }
}

/// Expand `state` through each of `moves`, skipping infeasible slides.
pub fn successors(state: &PuzzleState, moves: &[Move]) -> Successors {
    moves
        .iter()
        .filter_map(|&mv| apply_move(state, mv).map(|next| (mv, next)))
        .collect()
}

/// Replay a move sequence from `start`.
///
/// Returns the final state, or `None` if any move along the way is infeasible.
pub fn replay(start: &PuzzleState, moves: &[Move]) -> Option<PuzzleState> {
    moves
        .iter()
        .try_fold(*start, |state, &mv| apply_move(&state, mv))
}

/// Simple verification: does `moves` take `start` to `target`?
pub fn verify_solution(start: &PuzzleState, target: &PuzzleState, moves: &[Move]) -> bool {
    replay(start, moves).as_ref() == Some(target)
}
