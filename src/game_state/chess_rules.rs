//! Canonical chess-rule constants.
//!
//! Board geometry, the per-side special ranks and the default starting
//! layout in the setup-grid character format (lowercase = `Player::A`).

pub const BOARD_DIMENSIONS: u8 = 8;

pub const PAWN_START_RANK_A: u8 = 1;
pub const PAWN_START_RANK_B: u8 = 6;
pub const EN_PASSANT_RANK_A: u8 = 4;
pub const EN_PASSANT_RANK_B: u8 = 3;

/// Starting position as written in a board diagram: first row is rank 8.
pub const STARTING_LAYOUT: [&str; 8] = [
    "CNBQKBNC", "PPPPPPPP", "........", "........", "........", "........", "pppppppp",
    "cnbqkbnc",
];
