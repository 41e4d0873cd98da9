//! Common interface every move-selection engine implements.

use crate::board::board::Board;
use crate::board::chess_types::{ChessMove, Color};
use crate::errors::ChessError;

/// A move selector. Implementations may keep internal state (a seeded RNG,
/// a search depth) between calls.
pub trait Engine {
    /// Short human-readable identifier for logs and match reports.
    fn name(&self) -> &str;

    /// Pick a move for `side` on `board`. `Ok(None)` means the side has no
    /// legal moves, which the caller resolves as checkmate or stalemate.
    fn choose_move(&mut self, board: &Board, side: Color)
        -> Result<Option<ChessMove>, ChessError>;
}
