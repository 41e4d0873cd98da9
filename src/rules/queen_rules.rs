//! Queen movement geometry: the union of rook and bishop rules.

use crate::board::board::Board;
use crate::board::chess_types::{Color, Square};
use crate::rules::{bishop_rules, rook_rules};

pub fn is_geometrically_valid(color: Color, from: Square, to: Square, board: &Board) -> bool {
    rook_rules::is_geometrically_valid(color, from, to, board)
        || bishop_rules::is_geometrically_valid(color, from, to, board)
}
