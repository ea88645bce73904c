//! Error types shared across the rules engine, notation helpers and search.
//!
//! Recoverable failures (illegal moves, malformed notation, bad layouts) are
//! returned as values. A position without a king is a corrupted caller state
//! and panics instead of producing one of these errors.

use thiserror::Error;

use crate::game_controller::controller::GameState;
use crate::game_state::chess_types::{Move, Player, Square};

/// Reasons the game controller refuses a move or a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is not being played (state: {0:?})")]
    GameNotPlaying(GameState),

    #[error("no piece on origin square {0}")]
    EmptySquare(Square),

    #[error("piece on {square} does not belong to {side_to_move:?}")]
    NotSideToMove { square: Square, side_to_move: Player },

    #[error("move {0} is not legal in the current position")]
    IllegalMove(Move),

    #[error("cannot change game state from {from:?} to {to:?}")]
    InvalidStateTransition { from: GameState, to: GameState },
}

/// Malformed square or move text, rejected before it reaches the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("expected {expected} characters, got {found} in '{text}'")]
    WrongLength {
        text: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid file '{0}', expected a-h")]
    InvalidFile(char),

    #[error("invalid rank '{0}', expected 1-8")]
    InvalidRank(char),
}

/// Malformed 8x8 setup grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout must have 8 rows, got {0}")]
    WrongRowCount(usize),

    #[error("layout row {row} must have 8 squares, got {found}")]
    WrongRowLength { row: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Search was asked for a move in a position where the side to move has
    /// none. The controller ends the game before this can happen.
    #[error("side to move has no legal moves")]
    NoLegalMoves,

    #[error("search was cancelled")]
    Cancelled,

    #[error("search worker disconnected before reporting a result")]
    WorkerDisconnected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Game(#[from] GameError),
}

pub type GameResult<T> = Result<T, GameError>;
pub type SearchResult<T> = Result<T, SearchError>;
pub type EngineResult<T> = Result<T, EngineError>;
