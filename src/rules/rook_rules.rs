//! Rook movement geometry.

use crate::board::board::Board;
use crate::board::chess_types::{Color, Square};
use crate::rules::piece_rules::path_is_clear;

/// Same-rank or same-file move with an empty path and no friendly piece on
/// the destination.
pub fn is_geometrically_valid(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    if from.row != to.row && from.col != to.col {
        return false;
    }
    if !path_is_clear(from, to, board) {
        return false;
    }
    !matches!(board.piece_at(to), Some(target) if target.color == color)
}

#[cfg(test)]
mod tests {
    use super::is_geometrically_valid;
    use crate::board::board::Board;
    use crate::board::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn slides_along_ranks_and_files_until_blocked() {
        let mut board = Board::empty();
        board.place_piece(Square::new(4, 0), Piece::new(PieceKind::Rook, Color::White));
        board.place_piece(Square::new(4, 5), Piece::new(PieceKind::Pawn, Color::White));

        let from = Square::new(4, 0);
        assert!(is_geometrically_valid(Color::White, from, Square::new(4, 4), &board));
        assert!(is_geometrically_valid(Color::White, from, Square::new(0, 0), &board));
        // Blocked by the friendly pawn on c-file scan.
        assert!(!is_geometrically_valid(Color::White, from, Square::new(4, 6), &board));
        // Friendly destination.
        assert!(!is_geometrically_valid(Color::White, from, Square::new(4, 5), &board));
        // Diagonals are not rook moves.
        assert!(!is_geometrically_valid(Color::White, from, Square::new(5, 1), &board));
    }

    #[test]
    fn captures_enemy_piece_at_end_of_line() {
        let mut board = Board::empty();
        board.place_piece(Square::new(4, 0), Piece::new(PieceKind::Rook, Color::White));
        board.place_piece(Square::new(1, 0), Piece::new(PieceKind::Knight, Color::Black));
        assert!(is_geometrically_valid(
            Color::White,
            Square::new(4, 0),
            Square::new(1, 0),
            &board
        ));
        // Cannot jump past it.
        assert!(!is_geometrically_valid(
            Color::White,
            Square::new(4, 0),
            Square::new(0, 0),
            &board
        ));
    }
}
