//! Crate root module declarations for the Quince Chess engine.
//!
//! This file exposes all top-level subsystems (board model, per-piece movement
//! rules, search, and selectable engines) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod errors;

pub mod board {
    pub mod board;
    pub mod chess_types;
}

pub mod rules {
    pub mod bishop_rules;
    pub mod king_rules;
    pub mod knight_rules;
    pub mod pawn_rules;
    pub mod piece_rules;
    pub mod queen_rules;
    pub mod rook_rules;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod move_enumeration;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod strategy;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
