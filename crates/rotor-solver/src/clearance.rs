//! Clearance rules deciding whether a slide is physically possible.
//!
//! A slide drags one piece's escape over a spoke of the other piece. Whether
//! the escape gets over depends only on which spoke is in the way and how wide
//! the escape is:
//!
//! - S45 is too thick for any escape.
//! - S25 stops only the narrow E12 escape.
//! - S05 has the gap, so every escape passes.

use crate::puzzle::{Escape, Piece, PuzzleState, Spoke};

/// Check if `escape` can be dragged over `spoke`
pub fn escape_clears(escape: Escape, spoke: Spoke) -> bool {
    match spoke {
        Spoke::S45 => false,
        Spoke::S25 => escape != Escape::E12,
        Spoke::S05 => true,
    }
}

/// Whether `piece`'s escape sits clockwise of `piece`'s own contacting spoke.
///
/// This fixes the direction in which the spoke of `piece` advances when it is
/// dragged by the other piece.
pub fn spoke_direction(state: &PuzzleState, piece: Piece) -> bool {
    state.escape_of(piece).is_clockwise_of(state.spoke_of(piece))
}

/// The spoke that `piece`'s escape must ride over when sliding on `piece`.
pub fn slide_obstacle(state: &PuzzleState, piece: Piece) -> Spoke {
    let other = piece.other();
    state
        .spoke_of(other)
        .step(!spoke_direction(state, other))
}

/// Check if a slide on `piece` can be performed from `state`
pub fn can_slide(state: &PuzzleState, piece: Piece) -> bool {
    escape_clears(state.escape_of(piece), slide_obstacle(state, piece))
}

pub fn can_slide_on_gold(state: &PuzzleState) -> bool {
    can_slide(state, Piece::Gold)
}

pub fn can_slide_on_silver(state: &PuzzleState) -> bool {
    can_slide(state, Piece::Silver)
}
