//! Knight movement geometry.

use crate::board::board::Board;
use crate::board::chess_types::{Color, Square};

/// Exact L-shape offset. Knights jump, so intervening pieces are ignored;
/// only a friendly destination blocks the move.
pub fn is_geometrically_valid(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let row_delta = (to.row - from.row).abs();
    let col_delta = (to.col - from.col).abs();
    if !((row_delta == 1 && col_delta == 2) || (row_delta == 2 && col_delta == 1)) {
        return false;
    }
    !matches!(board.piece_at(to), Some(target) if target.color == color)
}
