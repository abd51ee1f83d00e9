//! State model for the gold/silver rotor puzzle.
//!
//! Each piece has three spokes and three escapes laid out around a circle.
//! The puzzle state is the pair of contact points (one escape of each piece
//! resting against a spoke of the other piece) plus a single orientation flag.
//!
//! All directions assume the piece is held with its larger gap facing up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RotorError;

/// A radial spoke of a piece, in clockwise order starting from the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Spoke {
    /// The spoke with the gap in it.
    S05,
    /// Clockwise of S05.
    S25,
    /// Clockwise of S25, anti-clockwise of S05. The thick one.
    S45,
}

impl Spoke {
    pub const ALL: [Spoke; 3] = [Spoke::S05, Spoke::S25, Spoke::S45];

    /// The next spoke clockwise, wrapping S45 -> S05
    pub fn next(self) -> Spoke {
        match self {
            Spoke::S05 => Spoke::S25,
            Spoke::S25 => Spoke::S45,
            Spoke::S45 => Spoke::S05,
        }
    }

    /// The next spoke anti-clockwise, wrapping S05 -> S45
    pub fn previous(self) -> Spoke {
        match self {
            Spoke::S05 => Spoke::S45,
            Spoke::S25 => Spoke::S05,
            Spoke::S45 => Spoke::S25,
        }
    }

    /// Step one position in the given direction.
    pub fn step(self, clockwise: bool) -> Spoke {
        if clockwise {
            self.next()
        } else {
            self.previous()
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Spoke::S05 => "S05",
            Spoke::S25 => "S25",
            Spoke::S45 => "S45",
        }
    }
}

impl fmt::Display for Spoke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Spoke {
    type Err = RotorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Spoke::ALL
            .into_iter()
            .find(|spoke| spoke.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RotorError::UnknownSpoke(s.to_string()))
    }
}

/// A peripheral opening of a piece, in clockwise order starting right of S05.
///
/// Each escape has two sides (1/2, 3/4, 5/6). The lower-numbered side comes
/// first when measuring clockwise; this is what the orientation flag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Escape {
    /// The narrowest escape, clockwise of S05.
    E12,
    /// Clockwise of E12.
    E34,
    /// Clockwise of E34, the widest escape.
    E56,
}

impl Escape {
    pub const ALL: [Escape; 3] = [Escape::E12, Escape::E34, Escape::E56];

    /// The next escape clockwise, wrapping E56 -> E12
    pub fn next(self) -> Escape {
        match self {
            Escape::E12 => Escape::E34,
            Escape::E34 => Escape::E56,
            Escape::E56 => Escape::E12,
        }
    }

    /// The next escape anti-clockwise, wrapping E12 -> E56
    pub fn previous(self) -> Escape {
        match self {
            Escape::E12 => Escape::E56,
            Escape::E34 => Escape::E12,
            Escape::E56 => Escape::E34,
        }
    }

    /// Step one position in the given direction.
    pub fn step(self, clockwise: bool) -> Escape {
        if clockwise {
            self.next()
        } else {
            self.previous()
        }
    }

    /// Whether this escape sits clockwise of `spoke` on the same piece.
    ///
    /// E12 is clockwise only of S05, E34 of S05 and S25, E56 of S25 and S45.
    pub fn is_clockwise_of(self, spoke: Spoke) -> bool {
        match self {
            Escape::E12 => spoke == Spoke::S05,
            Escape::E34 => matches!(spoke, Spoke::S05 | Spoke::S25),
            Escape::E56 => matches!(spoke, Spoke::S25 | Spoke::S45),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Escape::E12 => "E12",
            Escape::E34 => "E34",
            Escape::E56 => "E56",
        }
    }
}

impl fmt::Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Escape {
    type Err = RotorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Escape::ALL
            .into_iter()
            .find(|escape| escape.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RotorError::UnknownEscape(s.to_string()))
    }
}

/// Free-function form of [`Escape::is_clockwise_of`].
pub fn is_clockwise_of(escape: Escape, spoke: Spoke) -> bool {
    escape.is_clockwise_of(spoke)
}

/// One of the two interlocking pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Gold,
    Silver,
}

impl Piece {
    pub fn other(self) -> Piece {
        match self {
            Piece::Gold => Piece::Silver,
            Piece::Silver => Piece::Gold,
        }
    }
}

/// One piece's escape pressed against the other piece's spoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactPoint {
    pub escape: Escape,
    pub spoke: Spoke,
}

impl ContactPoint {
    pub fn new(escape: Escape, spoke: Spoke) -> Self {
        Self { escape, spoke }
    }
}

/// The complete configuration of the puzzle.
///
/// Immutable value type; the move engine only ever builds new states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleState {
    /// Gold's escape, in contact with `silver_spoke`.
    pub gold_escape: Escape,
    pub silver_spoke: Spoke,
    /// Silver's escape, in contact with `gold_spoke`.
    pub silver_escape: Escape,
    pub gold_spoke: Spoke,
    /// Viewed with the contacted piece gap-up, whether the lower-numbered
    /// side of the escape sits above the higher-numbered side.
    pub ascending: bool,
}

impl PuzzleState {
    /// Both pieces disengaged through their gaps.
    pub const SOLVED: PuzzleState = PuzzleState {
        gold_escape: Escape::E12,
        silver_spoke: Spoke::S05,
        silver_escape: Escape::E12,
        gold_spoke: Spoke::S05,
        ascending: true,
    };

    /// Upper bound on the number of distinct states.
    pub const STATE_SPACE: usize = 3 * 3 * 3 * 3 * 2;

    pub fn new(
        gold_escape: Escape,
        silver_spoke: Spoke,
        silver_escape: Escape,
        gold_spoke: Spoke,
        ascending: bool,
    ) -> Self {
        Self {
            gold_escape,
            silver_spoke,
            silver_escape,
            gold_spoke,
            ascending,
        }
    }

    /// Build a state from its two contact points.
    pub fn from_contacts(gold: ContactPoint, silver: ContactPoint, ascending: bool) -> Self {
        Self::new(gold.escape, gold.spoke, silver.escape, silver.spoke, ascending)
    }

    /// The contact formed by `piece`'s escape against the other piece's spoke.
    pub fn contact(&self, piece: Piece) -> ContactPoint {
        match piece {
            Piece::Gold => ContactPoint::new(self.gold_escape, self.silver_spoke),
            Piece::Silver => ContactPoint::new(self.silver_escape, self.gold_spoke),
        }
    }

    /// The escape cut into `piece`.
    pub fn escape_of(&self, piece: Piece) -> Escape {
        match piece {
            Piece::Gold => self.gold_escape,
            Piece::Silver => self.silver_escape,
        }
    }

    /// The spoke of `piece` currently touching the other piece's escape.
    pub fn spoke_of(&self, piece: Piece) -> Spoke {
        match piece {
            Piece::Gold => self.gold_spoke,
            Piece::Silver => self.silver_spoke,
        }
    }

    pub fn with_escape(mut self, piece: Piece, escape: Escape) -> Self {
        match piece {
            Piece::Gold => self.gold_escape = escape,
            Piece::Silver => self.silver_escape = escape,
        }
        self
    }

    pub fn with_spoke(mut self, piece: Piece, spoke: Spoke) -> Self {
        match piece {
            Piece::Gold => self.gold_spoke = spoke,
            Piece::Silver => self.silver_spoke = spoke,
        }
        self
    }

    pub fn flipped(mut self) -> Self {
        self.ascending = !self.ascending;
        self
    }

    /// Every combination of fields, in a stable order. Not all are mutually reachable.
    pub fn all() -> impl Iterator<Item = PuzzleState> {
        Escape::ALL.into_iter().flat_map(|gold_escape| {
            Spoke::ALL.into_iter().flat_map(move |silver_spoke| {
                Escape::ALL.into_iter().flat_map(move |silver_escape| {
                    Spoke::ALL.into_iter().flat_map(move |gold_spoke| {
                        [true, false].into_iter().map(move |ascending| {
                            PuzzleState::new(
                                gold_escape,
                                silver_spoke,
                                silver_escape,
                                gold_spoke,
                                ascending,
                            )
                        })
                    })
                })
            })
        })
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.gold_escape,
            self.silver_spoke,
            self.silver_escape,
            self.gold_spoke,
            if self.ascending { "asc" } else { "desc" }
        )
    }
}

fn parse_orientation(s: &str) -> Result<bool, RotorError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "asc" | "ascending" | "true" => Ok(true),
        "desc" | "descending" | "false" => Ok(false),
        _ => Err(RotorError::UnknownOrientation(s.to_string())),
    }
}

impl FromStr for PuzzleState {
    type Err = RotorError;

    /// Parses `gold_escape,silver_spoke,silver_escape,gold_spoke,asc|desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != 5 {
            return Err(RotorError::MalformedState(s.to_string()));
        }

        Ok(PuzzleState::new(
            fields[0].parse()?,
            fields[1].parse()?,
            fields[2].parse()?,
            fields[3].parse()?,
            parse_orientation(fields[4])?,
        ))
    }
}

/// The four physical manipulations, labelled with their move tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "L/G")]
    LoopGold,
    #[serde(rename = "L/S")]
    LoopSilver,
    #[serde(rename = "S/G")]
    SlideGold,
    #[serde(rename = "S/S")]
    SlideSilver,
}

impl Move {
    /// Expansion order used by the search.
    pub const ALL: [Move; 4] = [
        Move::LoopGold,
        Move::LoopSilver,
        Move::SlideGold,
        Move::SlideSilver,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Move::LoopGold => "L/G",
            Move::LoopSilver => "L/S",
            Move::SlideGold => "S/G",
            Move::SlideSilver => "S/S",
        }
    }

    /// The piece the move is performed on
    pub fn piece(self) -> Piece {
        match self {
            Move::LoopGold | Move::SlideGold => Piece::Gold,
            Move::LoopSilver | Move::SlideSilver => Piece::Silver,
        }
    }

    pub fn is_loop(self) -> bool {
        matches!(self, Move::LoopGold | Move::LoopSilver)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = RotorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|mv| mv.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RotorError::UnknownMove(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoke_cycle() {
        assert_eq!(Spoke::S05.next(), Spoke::S25);
        assert_eq!(Spoke::S25.next(), Spoke::S45);
        assert_eq!(Spoke::S45.next(), Spoke::S05);

        for spoke in Spoke::ALL {
            assert_eq!(spoke.next().previous(), spoke);
            assert_eq!(spoke.next().next().next(), spoke);
            assert_eq!(spoke.step(true), spoke.next());
            assert_eq!(spoke.step(false), spoke.previous());
        }
    }

    #[test]
    fn test_escape_cycle() {
        assert_eq!(Escape::E12.previous(), Escape::E56);
        assert_eq!(Escape::E56.next(), Escape::E12);

        for escape in Escape::ALL {
            assert_eq!(escape.previous().next(), escape);
            assert_eq!(escape.previous().previous().previous(), escape);
        }
    }

    #[test]
    fn test_clockwise_table() {
        use Escape::*;
        use Spoke::*;

        let expected = [
            (E12, S05, true),
            (E12, S25, false),
            (E12, S45, false),
            (E34, S05, true),
            (E34, S25, true),
            (E34, S45, false),
            (E56, S05, false),
            (E56, S25, true),
            (E56, S45, true),
        ];
        for (escape, spoke, clockwise) in expected {
            assert_eq!(is_clockwise_of(escape, spoke), clockwise, "{escape} vs {spoke}");
        }
    }

    #[test]
    fn test_state_space_enumeration() {
        let states: std::collections::HashSet<PuzzleState> = PuzzleState::all().collect();
        assert_eq!(states.len(), PuzzleState::STATE_SPACE);
        assert!(states.contains(&PuzzleState::SOLVED));
    }

    #[test]
    fn test_contacts() {
        let state = PuzzleState::new(Escape::E34, Spoke::S45, Escape::E56, Spoke::S25, true);
        assert_eq!(
            state.contact(Piece::Gold),
            ContactPoint::new(Escape::E34, Spoke::S45)
        );
        assert_eq!(
            state.contact(Piece::Silver),
            ContactPoint::new(Escape::E56, Spoke::S25)
        );
        assert_eq!(
            PuzzleState::from_contacts(state.contact(Piece::Gold), state.contact(Piece::Silver), true),
            state
        );
    }

    #[test]
    fn test_parse_state() {
        let state: PuzzleState = "E34,S45,E56,S45,asc".parse().unwrap();
        assert_eq!(
            state,
            PuzzleState::new(Escape::E34, Spoke::S45, Escape::E56, Spoke::S45, true)
        );
        assert_eq!(state.to_string(), "E34,S45,E56,S45,asc");

        assert!(matches!(
            "E34,S45,E56,S45".parse::<PuzzleState>(),
            Err(RotorError::MalformedState(_))
        ));
        assert!(matches!(
            "E78,S45,E56,S45,asc".parse::<PuzzleState>(),
            Err(RotorError::UnknownEscape(_))
        ));
        assert!(matches!(
            "E34,S45,E56,S45,sideways".parse::<PuzzleState>(),
            Err(RotorError::UnknownOrientation(_))
        ));
    }

    #[test]
    fn test_move_labels() {
        for mv in Move::ALL {
            assert_eq!(mv.label().parse::<Move>().unwrap(), mv);
        }
        assert_eq!(
            serde_json::to_string(&Move::SlideSilver).unwrap(),
            "\"S/S\""
        );
        assert!(Move::LoopSilver.is_loop());
        assert_eq!(Move::SlideGold.piece(), Piece::Gold);
    }

    #[test]
    fn test_state_json() {
        let json = serde_json::to_string(&PuzzleState::SOLVED).unwrap();
        assert_eq!(
            json,
            r#"{"goldEscape":"E12","silverSpoke":"S05","silverEscape":"E12","goldSpoke":"S05","ascending":true}"#
        );
        let back: PuzzleState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PuzzleState::SOLVED);
    }
}
