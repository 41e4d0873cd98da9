//! Bishop movement geometry.

use crate::board::board::Board;
use crate::board::chess_types::{Color, Square};
use crate::rules::piece_rules::path_is_clear;

/// Diagonal move (equal absolute row/column delta) with an empty path and no
/// friendly piece on the destination.
pub fn is_geometrically_valid(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let row_delta = (to.row - from.row).abs();
    let col_delta = (to.col - from.col).abs();
    if row_delta != col_delta || row_delta == 0 {
        return false;
    }
    if !path_is_clear(from, to, board) {
        return false;
    }
    !matches!(board.piece_at(to), Some(target) if target.color == color)
}
