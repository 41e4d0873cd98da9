//! Engine wrapper around the fixed-depth alpha-beta search.

use crate::board::board::Board;
use crate::board::chess_types::{ChessMove, Color};
use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;
use crate::search::minimax::search_root;

#[derive(Debug, Clone, Copy)]
pub struct MinimaxEngine {
    depth: u8,
}

impl MinimaxEngine {
    /// Engine searching `depth` plies; depth 0 is clamped to 1 so the engine
    /// always looks at least one move ahead.
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
    ) -> Result<Option<ChessMove>, ChessError> {
        Ok(search_root(board, side, self.depth))
    }
}
