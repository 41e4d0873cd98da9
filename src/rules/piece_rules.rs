//! Exhaustive geometric-rule dispatch over piece kinds.
//!
//! Every rule is pure in the current occupancy: no game history, no
//! check-safety. The board layers king safety and castling on top, which
//! keeps the attack scan free of recursion.

use crate::board::board::Board;
use crate::board::chess_types::{Piece, PieceKind, Square};
use crate::rules::{
    bishop_rules, king_rules, knight_rules, pawn_rules, queen_rules, rook_rules,
};

/// Raw movement-rule test for `piece` standing on `from`.
pub fn is_geometrically_valid(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_rules::is_geometrically_valid(piece.color, from, to, board),
        PieceKind::Rook => rook_rules::is_geometrically_valid(piece.color, from, to, board),
        PieceKind::Knight => knight_rules::is_geometrically_valid(piece.color, from, to, board),
        PieceKind::Bishop => bishop_rules::is_geometrically_valid(piece.color, from, to, board),
        PieceKind::Queen => queen_rules::is_geometrically_valid(piece.color, from, to, board),
        PieceKind::King => king_rules::is_geometrically_valid(piece.color, from, to, board),
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Walks by unit steps, so `from`/`to` must be aligned on a rank, file, or
/// diagonal; the per-piece rules establish that before calling.
pub(crate) fn path_is_clear(from: Square, to: Square, board: &Board) -> bool {
    let step_row = (to.row - from.row).signum();
    let step_col = (to.col - from.col).signum();
    let mut current = Square::new(from.row + step_row, from.col + step_col);
    while current != to {
        if board.piece_at(current).is_some() {
            return false;
        }
        current = Square::new(current.row + step_row, current.col + step_col);
    }
    true
}
