//! Full legal-move enumeration for one side.
//!
//! Scan order is deterministic and load-bearing: origins row-major, then
//! destinations row-major per origin. Greedy and minimax break ties by
//! keeping the first best move in exactly this order, so reordering the scan
//! changes observable move selection.

use crate::board::board::Board;
use crate::board::chess_types::{ChessMove, Color, Square};

pub fn all_legal_moves(board: &Board, color: Color) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for row in 0..8i8 {
        for col in 0..8i8 {
            let from = Square::new(row, col);
            match board.piece_at(from) {
                Some(piece) if piece.color == color => {
                    for to in board.legal_destinations(from) {
                        moves.push(ChessMove::new(from, to));
                    }
                }
                _ => {}
            }
        }
    }
    moves
}
