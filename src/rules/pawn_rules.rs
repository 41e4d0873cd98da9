//! Pawn movement geometry, including en-passant eligibility.

use crate::board::board::Board;
use crate::board::chess_types::{Color, PieceKind, Square};

/// Forward advance to an empty square, double advance from the starting row,
/// diagonal capture of an enemy piece, or an eligible en-passant capture.
/// Never backward or sideways.
pub fn is_geometrically_valid(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let direction = color.pawn_direction();

    if is_en_passant_capture(color, from, to, board) {
        return true;
    }

    // Single advance.
    if to.row == from.row + direction && to.col == from.col {
        return board.piece_at(to).is_none();
    }

    // Double advance, only from the color's starting row, both squares empty.
    if from.row == color.pawn_row()
        && to.row == from.row + 2 * direction
        && to.col == from.col
    {
        let intermediate = Square::new(from.row + direction, from.col);
        return board.piece_at(intermediate).is_none() && board.piece_at(to).is_none();
    }

    // Diagonal move is a capture only.
    if to.row == from.row + direction && (to.col - from.col).abs() == 1 {
        return matches!(board.piece_at(to), Some(target) if target.color != color);
    }

    false
}

/// En-passant eligibility: a diagonal forward step into the empty square the
/// board currently marks as capturable, with an enemy pawn sitting beside the
/// origin on the destination file.
pub fn is_en_passant_capture(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let direction = color.pawn_direction();
    if to.row != from.row + direction || (to.col - from.col).abs() != 1 {
        return false;
    }
    if board.piece_at(to).is_some() {
        return false;
    }
    if board.en_passant_target() != Some(to) {
        return false;
    }

    let bypassed = Square::new(from.row, to.col);
    matches!(
        board.piece_at(bypassed),
        Some(neighbor) if neighbor.kind == PieceKind::Pawn && neighbor.color != color
    )
}
