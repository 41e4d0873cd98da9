//! One-shot strategy dispatch.
//!
//! Callers that do not want to hold an engine instance can describe the
//! selection policy as data and let this module build the engine per call.

use crate::board::board::Board;
use crate::board::chess_types::{ChessMove, Color};
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Greedy,
    Minimax { depth: u8 },
}

/// Pick a move for `side` using `strategy`. `Ok(None)` means no legal moves.
///
/// `Strategy::Random` builds a freshly OS-seeded engine each call; use
/// `RandomEngine::with_seed` directly when reproducibility matters.
pub fn choose_move(
    board: &Board,
    side: Color,
    strategy: Strategy,
) -> Result<Option<ChessMove>, ChessError> {
    match strategy {
        Strategy::Random => RandomEngine::new().choose_move(board, side),
        Strategy::Greedy => GreedyEngine::new().choose_move(board, side),
        Strategy::Minimax { depth } => MinimaxEngine::new(depth).choose_move(board, side),
    }
}
