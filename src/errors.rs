//! Crate-wide error taxonomy.
//!
//! Queries (`is_*`, `can_*`, attack scans) return plain booleans and never
//! fail; only state-changing operations and parsing report errors. Every
//! variant is recoverable by retrying with different input.

use thiserror::Error;

use crate::board::chess_types::{CastleSide, Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Coordinates outside the `[0,7]` board range.
    #[error("coordinates ({row}, {col}) are outside the board")]
    OutOfBounds { row: i8, col: i8 },

    /// The origin square of a move holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// A move rejected by the rules engine. Callers need no finer
    /// sub-classification than this.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("{color:?} cannot castle {side:?}")]
    CastlingNotAllowed { color: Color, side: CastleSide },

    #[error("en passant capture from {from} to {to} is not available")]
    EnPassantNotAllowed { from: Square, to: Square },

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),
}
