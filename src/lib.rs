//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! This file exposes all top-level subsystems (board state, per-piece move
//! legality rules, check and terminal-state detection, the game session
//! state machine, and utility helpers) so binaries, tests, and external
//! front ends can import stable module paths.

pub mod board_location;
pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game_session;
}

pub mod rules {
    pub mod check_detector;
    pub mod move_validator;
    pub mod moves_bishop;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_queen;
    pub mod moves_rook;
    pub mod shared;
    pub mod terminal_state;
}

pub mod utils {
    pub mod match_harness;
    pub mod placement_parser;
    pub mod render_board;
}
