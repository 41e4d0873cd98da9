//! Uniform random move selection.
//!
//! The RNG is injected at construction rather than drawn from the clock, so
//! two engines built with the same seed replay the same game move for move.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::board::chess_types::{ChessMove, Color};
use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;
use crate::search::move_enumeration::all_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Engine seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a fixed seed, for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
    ) -> Result<Option<ChessMove>, ChessError> {
        let moves = all_legal_moves(board, side);
        let chosen = moves.choose(&mut self.rng).copied();
        if let Some(mv) = chosen {
            trace!("random picked {mv} out of {} moves", moves.len());
        }
        Ok(chosen)
    }
}
