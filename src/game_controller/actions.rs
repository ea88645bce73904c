//! Replayable records of what an applied move did to the board.
//!
//! A single turn yields one or two actions: the move itself (plain move,
//! capture, en passant capture or castle), optionally followed by a
//! promotion.

use smallvec::SmallVec;

use crate::game_state::chess_types::{Move, PieceKind, Player, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move {
        who: Player,
        piece: PieceKind,
        mv: Move,
    },
    Capture {
        who: Player,
        moving: PieceKind,
        captured: PieceKind,
        mv: Move,
    },
    EnPassantCapture {
        who: Player,
        moving: PieceKind,
        mv: Move,
        captured_pawn: Square,
    },
    Castle {
        who: Player,
        king_move: Move,
        rook_move: Move,
    },
    Promotion {
        who: Player,
        square: Square,
        new_kind: PieceKind,
    },
}

impl Action {
    pub fn who(&self) -> Player {
        match *self {
            Action::Move { who, .. }
            | Action::Capture { who, .. }
            | Action::EnPassantCapture { who, .. }
            | Action::Castle { who, .. }
            | Action::Promotion { who, .. } => who,
        }
    }

    /// The from/to pair that produced this action; the king's move for a
    /// castle, `None` for a promotion.
    pub fn primary_move(&self) -> Option<Move> {
        match *self {
            Action::Move { mv, .. }
            | Action::Capture { mv, .. }
            | Action::EnPassantCapture { mv, .. } => Some(mv),
            Action::Castle { king_move, .. } => Some(king_move),
            Action::Promotion { .. } => None,
        }
    }
}

/// Actions produced by one applied move.
pub type ActionBatch = SmallVec<[Action; 2]>;
