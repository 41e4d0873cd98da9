//! Pluggable static position scoring.
//!
//! Search and the greedy engine delegate scoring to this trait so alternate
//! heuristics can be swapped without touching selection code. The baseline
//! scorer is pure material: no positional or mobility terms.

use crate::board::board::Board;
use crate::board::chess_types::{Color, PieceKind, Square};

pub trait BoardScorer {
    /// Score from `perspective`'s point of view (higher is better for them).
    fn score(&self, board: &Board, perspective: Color) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }

    /// Raw material balance, White's pieces positive and Black's negative.
    pub fn material_balance_white_minus_black(board: &Board) -> i32 {
        let mut score = 0i32;
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = board.piece_at(Square::new(row, col)) {
                    let value = Self::piece_value(piece.kind);
                    match piece.color {
                        Color::White => score += value,
                        Color::Black => score -= value,
                    }
                }
            }
        }
        score
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        let white_minus_black = Self::material_balance_white_minus_black(board);
        match perspective {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer};
    use crate::board::board::Board;
    use crate::board::chess_types::{Color, Square};

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new();
        assert_eq!(MaterialScorer::material_balance_white_minus_black(&board), 0);
        assert_eq!(MaterialScorer.score(&board, Color::White), 0);
        assert_eq!(MaterialScorer.score(&board, Color::Black), 0);
    }

    #[test]
    fn score_negates_for_the_black_perspective() {
        let mut board = Board::new();
        board.remove_piece(Square::new(0, 3));
        assert_eq!(MaterialScorer.score(&board, Color::White), 9);
        assert_eq!(MaterialScorer.score(&board, Color::Black), -9);
    }

    #[test]
    fn piece_values_match_the_classic_scale() {
        use crate::board::chess_types::PieceKind::*;
        assert_eq!(MaterialScorer::piece_value(Pawn), 1);
        assert_eq!(MaterialScorer::piece_value(Knight), 3);
        assert_eq!(MaterialScorer::piece_value(Bishop), 3);
        assert_eq!(MaterialScorer::piece_value(Rook), 5);
        assert_eq!(MaterialScorer::piece_value(Queen), 9);
        assert_eq!(MaterialScorer::piece_value(King), 100);
    }
}
