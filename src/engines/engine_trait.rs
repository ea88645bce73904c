//! Automated actor contract.
//!
//! An engine only proposes a move for a position; the caller submits it
//! through the game controller like any human move.

use crate::errors::EngineResult;
use crate::game_state::{chess_types::Move, position::Position};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for `position.side_to_move`.
    fn choose_move(&mut self, position: &Position) -> EngineResult<EngineOutput>;
}
