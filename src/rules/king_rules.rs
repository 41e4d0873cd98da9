//! King movement geometry.
//!
//! The geometric rule is the one-square step only. Check-safety of the
//! destination is enforced by the board's legality simulation, and castling
//! eligibility lives in the board's castling state machine; keeping both out
//! of this rule lets the attacked-square scan call it without recursing.

use crate::board::board::Board;
use crate::board::chess_types::{CastleSide, Color, Square};

/// One square in any of the 8 directions, no friendly piece on the
/// destination.
pub fn is_geometrically_valid(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let row_delta = (to.row - from.row).abs();
    let col_delta = (to.col - from.col).abs();
    if row_delta > 1 || col_delta > 1 || (row_delta == 0 && col_delta == 0) {
        return false;
    }
    !matches!(board.piece_at(to), Some(target) if target.color == color)
}

/// True when `from -> to` has the shape of a castling move for `color`: the
/// king stands on its home square and slides exactly two columns along the
/// back rank.
pub fn is_castling_shape(color: Color, from: Square, to: Square) -> bool {
    from == king_home_square(color) && to.row == from.row && (to.col - from.col).abs() == 2
}

/// Side implied by a castling-shaped destination (king side when moving
/// toward the h-file).
pub fn castle_side_of(from: Square, to: Square) -> CastleSide {
    if to.col > from.col {
        CastleSide::KingSide
    } else {
        CastleSide::QueenSide
    }
}

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    Square::new(color.home_row(), 4)
}

#[inline]
pub const fn rook_home_square(color: Color, side: CastleSide) -> Square {
    let col = match side {
        CastleSide::KingSide => 7,
        CastleSide::QueenSide => 0,
    };
    Square::new(color.home_row(), col)
}

/// Where the king lands when castling: two columns toward the rook.
#[inline]
pub const fn king_castle_destination(color: Color, side: CastleSide) -> Square {
    let col = match side {
        CastleSide::KingSide => 6,
        CastleSide::QueenSide => 2,
    };
    Square::new(color.home_row(), col)
}

/// Where the rook lands when castling: beside the king's new square.
#[inline]
pub const fn rook_castle_destination(color: Color, side: CastleSide) -> Square {
    let col = match side {
        CastleSide::KingSide => 5,
        CastleSide::QueenSide => 3,
    };
    Square::new(color.home_row(), col)
}
