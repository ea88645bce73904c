//! Board mutation for one move, including the castle rook hop, en passant
//! removal, auto-queen promotion and en passant flag bookkeeping.
//!
//! Applying never flips `side_to_move`; callers decide when a turn ends.

use smallvec::smallvec;

use crate::errors::{GameError, GameResult};
use crate::game_controller::actions::{Action, ActionBatch};
use crate::game_state::{chess_types::*, position::Position};

/// Rook file offsets from the king for (king side, queen side).
const KING_SIDE_ROOK_OFFSET: i8 = 3;
const QUEEN_SIDE_ROOK_OFFSET: i8 = -4;

/// Applies `mv` to `position` for the owner of the piece on `mv.from`.
///
/// The move is assumed to come from the generator; only an empty origin is
/// rejected.
pub fn apply_move_in_place(position: &mut Position, mv: Move) -> GameResult<ActionBatch> {
    let mover = position
        .piece_at(mv.from)
        .ok_or(GameError::EmptySquare(mv.from))?;
    let who = mover.owner;
    let target = position.piece_at(mv.to);
    let file_delta = mv.to.file as i8 - mv.from.file as i8;
    let rank_delta = mv.to.rank as i8 - mv.from.rank as i8;

    let mut actions: ActionBatch = match (mover.kind, target) {
        (PieceKind::Pawn, None) if file_delta != 0 => {
            let captured_pawn = Square {
                file: mv.to.file,
                rank: mv.from.rank,
            };
            position.remove(captured_pawn);
            relocate(position, mv);
            smallvec![Action::EnPassantCapture {
                who,
                moving: PieceKind::Pawn,
                mv,
                captured_pawn,
            }]
        }
        (PieceKind::King, None) if file_delta.abs() == 2 => {
            let rook_offset = if file_delta > 0 {
                KING_SIDE_ROOK_OFFSET
            } else {
                QUEEN_SIDE_ROOK_OFFSET
            };
            let rook_from = mv.from.offset(rook_offset, 0).ok_or(GameError::IllegalMove(mv))?;
            let rook_to = mv
                .from
                .offset(file_delta.signum(), 0)
                .ok_or(GameError::IllegalMove(mv))?;
            let rook_move = Move::new(rook_from, rook_to);
            relocate(position, rook_move);
            relocate(position, mv);
            smallvec![Action::Castle {
                who,
                king_move: mv,
                rook_move,
            }]
        }
        (moving, Some(captured)) => {
            relocate(position, mv);
            smallvec![Action::Capture {
                who,
                moving,
                captured: captured.kind,
                mv,
            }]
        }
        (piece, None) => {
            relocate(position, mv);
            smallvec![Action::Move { who, piece, mv }]
        }
    };

    if mover.kind == PieceKind::Pawn {
        if let Some(record) = position.at_mut(mv.to).as_mut() {
            if rank_delta.abs() == 2 {
                record.en_passant_eligible = true;
            }
            if mv.to.rank == who.promotion_rank() {
                record.kind = PieceKind::Queen;
                actions.push(Action::Promotion {
                    who,
                    square: mv.to,
                    new_kind: PieceKind::Queen,
                });
            }
        }
    }

    clear_en_passant_flags(position, who.opposite());
    Ok(actions)
}

/// Copy-make: returns the position after `mv` with the turn handed over.
pub fn apply_move(position: &Position, mv: Move) -> GameResult<Position> {
    let mut next = position.clone();
    apply_move_in_place(&mut next, mv)?;
    next.side_to_move = next.side_to_move.opposite();
    Ok(next)
}

fn relocate(position: &mut Position, mv: Move) {
    if let Some(mut record) = position.remove(mv.from) {
        record.has_moved = true;
        position.place(mv.to, record);
    }
}

/// The window for capturing a double-stepped pawn closes once its owner's
/// opponent has made any other move.
fn clear_en_passant_flags(position: &mut Position, owner: Player) {
    for sq in Square::all() {
        if let Some(record) = position.at_mut(sq).as_mut() {
            if record.owner == owner && record.kind == PieceKind::Pawn {
                record.en_passant_eligible = false;
            }
        }
    }
}
