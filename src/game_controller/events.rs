//! Notifications emitted by the controller after each state change.
//!
//! Events are observational only; nothing a subscriber does with them feeds
//! back into the game.

use crate::game_controller::actions::ActionBatch;
use crate::game_controller::controller::GameState;
use crate::game_state::chess_types::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The actions one accepted move performed, in order.
    BoardChanged(ActionBatch),
    /// The given player is in check and still has a legal reply.
    PlayerInCheck(Player),
    GameStateChanged(GameState),
    /// It is now this player's turn.
    TurnSwapped(Player),
}
