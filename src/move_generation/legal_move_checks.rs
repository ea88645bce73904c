//! Attack detection by scanning outward from the target square: sliding rays,
//! knight and king jumps, and the two diagonal squares a pawn could strike
//! from.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

/// True when `player`'s king is attacked by the opponent.
///
/// # Panics
/// If `player` has no king on the board. Every position reachable through
/// the rules keeps both kings, so a missing king means the board is corrupt.
pub fn is_in_check(position: &Position, player: Player) -> bool {
    let king = position
        .king_square(player)
        .unwrap_or_else(|| panic!("no king for {player:?} on the board"));
    is_square_attacked(position, king, player.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker: Player) -> bool {
    let owned_by_attacker = |record: PieceRecord, kinds: &[PieceKind]| {
        record.owner == attacker && kinds.contains(&record.kind)
    };

    for &(d_file, d_rank) in &ROOK_DIRECTIONS {
        if let Some(record) = first_piece_along(position, square, d_file, d_rank) {
            if owned_by_attacker(record, &[PieceKind::Rook, PieceKind::Queen]) {
                return true;
            }
        }
    }

    for &(d_file, d_rank) in &BISHOP_DIRECTIONS {
        if let Some(record) = first_piece_along(position, square, d_file, d_rank) {
            if owned_by_attacker(record, &[PieceKind::Bishop, PieceKind::Queen]) {
                return true;
            }
        }
    }

    let jumps = [
        (&KNIGHT_OFFSETS, PieceKind::Knight),
        (&KING_OFFSETS, PieceKind::King),
    ];
    for (offsets, kind) in jumps {
        for &(d_file, d_rank) in offsets {
            if let Some(record) = square.offset(d_file, d_rank).and_then(|sq| position.piece_at(sq)) {
                if owned_by_attacker(record, &[kind]) {
                    return true;
                }
            }
        }
    }

    // An attacking pawn sits one rank behind the target from its own
    // point of view.
    let behind = -attacker.pawn_direction();
    for d_file in [-1, 1] {
        if let Some(record) = square.offset(d_file, behind).and_then(|sq| position.piece_at(sq)) {
            if owned_by_attacker(record, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    false
}

fn first_piece_along(position: &Position, from: Square, d_file: i8, d_rank: i8) -> Option<PieceRecord> {
    let mut current = from;
    while let Some(next) = current.offset(d_file, d_rank) {
        if let Some(record) = position.piece_at(next) {
            return Some(record);
        }
        current = next;
    }
    None
}
