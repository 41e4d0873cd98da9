//! One-ply greedy material grabber.
//!
//! Probes every legal move on a board clone and keeps the one whose
//! resulting position scores best for the mover. Ties keep the first best
//! move in enumeration order, so the engine is fully deterministic.

use log::trace;

use crate::board::board::Board;
use crate::board::chess_types::{ChessMove, Color};
use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::move_enumeration::all_legal_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
    ) -> Result<Option<ChessMove>, ChessError> {
        let moves = all_legal_moves(board, side);
        if moves.is_empty() {
            return Ok(None);
        }

        let mut best_move = moves[0];
        let mut best_score = i32::MIN;
        for candidate in &moves {
            let mut probe = board.clone();
            probe.execute_move(candidate.from, candidate.to);
            let score = MaterialScorer.score(&probe, side);
            if score > best_score {
                best_score = score;
                best_move = *candidate;
            }
        }

        trace!("greedy picked {best_move} scoring {best_score} for {side:?}");
        Ok(Some(best_move))
    }
}
