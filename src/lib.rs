//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the position model, legal move generation, the game controller
//! state machine, evaluation and alpha-beta search, engines and utility
//! helpers so binaries, benches and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod game_controller {
    pub mod action_log;
    pub mod actions;
    pub mod controller;
    pub mod events;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod threading;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod layout;
    pub mod render_game_state;
}
