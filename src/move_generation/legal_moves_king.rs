use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_moves, KING_OFFSETS};

/// King steps plus castling. Castling is only offered to the side to move,
/// since its safety test depends on whose turn it is.
pub fn generate_king_moves(position: &Position, from: Square, player: Player, out: &mut Vec<Move>) {
    push_step_moves(position, from, player, &KING_OFFSETS, out);

    if player == position.side_to_move {
        generate_castling_moves(position, from, player, out);
    }
}

fn generate_castling_moves(position: &Position, from: Square, player: Player, out: &mut Vec<Move>) {
    let Some(king) = position.piece_at(from) else {
        return;
    };
    if king.has_moved || is_square_attacked(position, from, player.opposite()) {
        return;
    }

    // King side rook three files over, queen side rook four.
    for rook_offset in [3, -4] {
        if let Some(mv) = castle_toward(position, from, player, rook_offset) {
            out.push(mv);
        }
    }
}

fn castle_toward(position: &Position, from: Square, player: Player, rook_offset: i8) -> Option<Move> {
    let direction = rook_offset.signum();
    let rook_square = from.offset(rook_offset, 0)?;
    match position.piece_at(rook_square) {
        Some(PieceRecord {
            owner,
            kind: PieceKind::Rook,
            has_moved: false,
            ..
        }) if owner == player => {}
        _ => return None,
    }

    for step in 1..rook_offset.abs() {
        if !position.is_empty(from.offset(direction * step, 0)?) {
            return None;
        }
    }

    // Only the squares the king crosses and lands on must be safe.
    for step in 1..=2 {
        if is_square_attacked(position, from.offset(direction * step, 0)?, player.opposite()) {
            return None;
        }
    }

    Some(Move::new(from, from.offset(2 * direction, 0)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASTLE_READY: [&str; 8] = [
        "C...K..C",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "c...k..c",
    ];

    fn castles(position: &Position, player: Player) -> Vec<String> {
        let from = position.king_square(player).expect("king");
        let mut out = Vec::new();
        generate_king_moves(position, from, player, &mut out);
        let mut names: Vec<String> = out
            .iter()
            .filter(|m| (m.to.file as i8 - m.from.file as i8).abs() == 2)
            .map(|m| m.to_string())
            .collect();
        names.sort();
        names
    }

    fn with_row(rows: [&'static str; 8], index: usize, row: &'static str) -> Position {
        let mut rows = rows;
        rows[index] = row;
        Position::from_layout(&rows, Player::A).expect("layout")
    }

    #[test]
    fn both_sides_available_when_clear() {
        let position = Position::from_layout(&CASTLE_READY, Player::A).expect("layout");
        assert_eq!(castles(&position, Player::A), ["e1c1", "e1g1"]);
    }

    #[test]
    fn only_side_to_move_may_castle() {
        let position = Position::from_layout(&CASTLE_READY, Player::A).expect("layout");
        assert!(castles(&position, Player::B).is_empty());

        let position = Position::from_layout(&CASTLE_READY, Player::B).expect("layout");
        assert_eq!(castles(&position, Player::B), ["e8c8", "e8g8"]);
    }

    #[test]
    fn moved_rook_or_king_forbids_castling() {
        let mut position = Position::from_layout(&CASTLE_READY, Player::A).expect("layout");
        let h1: Square = "h1".parse().expect("square");
        if let Some(rook) = position.at_mut(h1).as_mut() {
            rook.has_moved = true;
        }
        assert_eq!(castles(&position, Player::A), ["e1c1"]);

        let e1: Square = "e1".parse().expect("square");
        if let Some(king) = position.at_mut(e1).as_mut() {
            king.has_moved = true;
        }
        assert!(castles(&position, Player::A).is_empty());
    }

    #[test]
    fn pieces_between_block_castling() {
        let position = with_row(CASTLE_READY, 7, "cn..k..c");
        assert_eq!(castles(&position, Player::A), ["e1g1"]);
    }

    #[test]
    fn attacked_transit_square_blocks_that_side() {
        // Rook on f8 covers f1.
        let position = with_row(CASTLE_READY, 0, "C...KC..");
        assert_eq!(castles(&position, Player::A), ["e1c1"]);
    }

    #[test]
    fn attacked_b_file_does_not_block_queen_side() {
        let position = with_row(CASTLE_READY, 0, "CC..K..C");
        assert_eq!(castles(&position, Player::A), ["e1c1", "e1g1"]);
    }

    #[test]
    fn pawn_diagonal_counts_as_an_attack() {
        // B pawn on e2 covers d1 and f1 but does not give check.
        let position = with_row(CASTLE_READY, 6, "....P...");
        assert!(castles(&position, Player::A).is_empty());
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let position = with_row(CASTLE_READY, 0, "C...C..K");
        assert!(castles(&position, Player::A).is_empty());
    }
}
