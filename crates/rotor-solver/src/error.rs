//! Errors raised while reading puzzle input.
//!
//! The move engine and search never fail; these only cover text and file
//! input coming from outside the library.

/// Errors for parsing and loading puzzle descriptions
#[derive(thiserror::Error, Debug)]
pub enum RotorError {
    #[error("unknown escape {0:?} (expected E12, E34 or E56)")]
    UnknownEscape(String),

    #[error("unknown spoke {0:?} (expected S05, S25 or S45)")]
    UnknownSpoke(String),

    #[error("unknown move {0:?} (expected L/G, L/S, S/G or S/S)")]
    UnknownMove(String),

    #[error("unknown orientation {0:?} (expected asc or desc)")]
    UnknownOrientation(String),

    /// Wrong number of comma-separated fields
    #[error("malformed state {0:?} (expected gEscape,sSpoke,sEscape,gSpoke,asc|desc)")]
    MalformedState(String),

    #[error("no start state given (use --start, --file or --stdin)")]
    MissingState,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for puzzle input handling
pub type RotorResult<T> = Result<T, RotorError>;
