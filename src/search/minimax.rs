//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The recursion is a pure function: alpha and beta travel by value down the
//! call chain and no search state is shared between sibling branches. Each
//! candidate is explored on its own board clone. Plies alternate strictly by
//! depth: maximizing nodes expand White's legal moves and minimizing nodes
//! Black's, with the evaluation always White-positive. There is no move
//! ordering, transposition table, or quiescence extension.

use log::debug;

use crate::board::board::Board;
use crate::board::chess_types::{ChessMove, Color};
use crate::search::move_enumeration::all_legal_moves;

/// Score bound that brackets every reachable material evaluation.
pub const SEARCH_BOUND: i32 = 10_000;

/// Pick the best move for `side` by searching `depth` plies. Returns `None`
/// when the side has no legal moves.
///
/// The root maximizes over the mover's legal moves and scores each reply
/// subtree with fresh alpha/beta bounds; ties keep the first move in
/// enumeration order.
pub fn search_root(board: &Board, side: Color, depth: u8) -> Option<ChessMove> {
    let moves = all_legal_moves(board, side);
    if moves.is_empty() {
        return None;
    }

    let mut best_move = moves[0];
    let mut best_value = -SEARCH_BOUND;
    for candidate in &moves {
        let mut probe = board.clone();
        probe.execute_move(candidate.from, candidate.to);
        let value = minimax(
            &probe,
            depth.saturating_sub(1),
            -SEARCH_BOUND,
            SEARCH_BOUND,
            false,
        );
        if value > best_value {
            best_value = value;
            best_move = *candidate;
        }
    }

    debug!(
        "minimax depth {depth} for {side:?}: {} candidates, picked {best_move} valued {best_value}",
        moves.len()
    );
    Some(best_move)
}

/// Depth-limited alpha-beta value of `board`. Terminates at depth 0 or when
/// either side is checkmated or stalemated, returning the static material
/// evaluation.
pub fn minimax(board: &Board, depth: u8, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
    if depth == 0
        || board.is_checkmate(Color::White)
        || board.is_checkmate(Color::Black)
        || board.is_stalemate(Color::White)
        || board.is_stalemate(Color::Black)
    {
        return board.evaluate_position();
    }

    if maximizing {
        let mut best = -SEARCH_BOUND;
        for candidate in all_legal_moves(board, Color::White) {
            let mut probe = board.clone();
            probe.execute_move(candidate.from, candidate.to);
            let value = minimax(&probe, depth - 1, alpha, beta, false);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SEARCH_BOUND;
        for candidate in all_legal_moves(board, Color::Black) {
            let mut probe = board.clone();
            probe.execute_move(candidate.from, candidate.to);
            let value = minimax(&probe, depth - 1, alpha, beta, true);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
