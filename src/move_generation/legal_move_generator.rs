//! Full legal move generation pipeline.
//!
//! Collects piece-wise candidate moves for one player, simulates each on a
//! scratch copy of the position, and drops any that leave that player's own
//! king attacked.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Every legal move for `player`, in file-major order of the moving piece.
///
/// Generation never yields the same from/to pair twice, so the list doubles
/// as a set.
///
/// # Panics
/// If `player` has no king on the board.
pub fn legal_moves(position: &Position, player: Player) -> Vec<Move> {
    let pseudo = pseudo_legal_moves(position, player);
    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        if leaves_king_safe(position, mv, player) {
            legal.push(mv);
        }
    }
    legal
}

/// Stops at the first legal move found.
pub fn has_legal_move(position: &Position, player: Player) -> bool {
    pseudo_legal_moves(position, player)
        .into_iter()
        .any(|mv| leaves_king_safe(position, mv, player))
}

pub fn legal_moves_from(position: &Position, from: Square) -> Vec<Move> {
    let Some(record) = position.piece_at(from) else {
        return Vec::new();
    };
    let mut pseudo = Vec::with_capacity(28);
    generate_piece_moves(position, from, record, &mut pseudo);
    pseudo.retain(|&mv| leaves_king_safe(position, mv, record.owner));
    pseudo
}

pub fn is_legal_move(position: &Position, player: Player, mv: Move) -> bool {
    match position.piece_at(mv.from) {
        Some(record) if record.owner == player => legal_moves_from(position, mv.from).contains(&mv),
        _ => false,
    }
}

fn pseudo_legal_moves(position: &Position, player: Player) -> Vec<Move> {
    assert!(
        position.king_square(player).is_some(),
        "no king for {player:?} on the board"
    );
    let mut pseudo = Vec::with_capacity(64);
    for (from, record) in position.pieces_of(player) {
        generate_piece_moves(position, from, record, &mut pseudo);
    }
    pseudo
}

fn generate_piece_moves(position: &Position, from: Square, record: PieceRecord, out: &mut Vec<Move>) {
    let player = record.owner;
    match record.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, player, out),
        PieceKind::Knight => generate_knight_moves(position, from, player, out),
        PieceKind::Bishop => generate_bishop_moves(position, from, player, out),
        PieceKind::Rook => generate_rook_moves(position, from, player, out),
        PieceKind::Queen => generate_queen_moves(position, from, player, out),
        PieceKind::King => generate_king_moves(position, from, player, out),
    }
}

// Illegal if own king is in check after the move.
fn leaves_king_safe(position: &Position, mv: Move, player: Player) -> bool {
    let mut scratch = position.clone();
    match apply_move_in_place(&mut scratch, mv) {
        Ok(_) => !is_in_check(&scratch, player),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn names(moves: &[Move]) -> Vec<String> {
        let mut names: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn start_position_has_twenty_moves_each() {
        let position = Position::new_game();
        assert_eq!(legal_moves(&position, Player::A).len(), 20);
        assert_eq!(legal_moves(&position, Player::B).len(), 20);
    }

    #[test]
    fn generated_moves_are_unique_and_stay_on_board() {
        let position = Position::from_layout(
            &[
                "C...K..C",
                "P.PPQPB.",
                "BN..PNP.",
                "...pn...",
                ".P..p...",
                "..n..q.P",
                "pppbbppp",
                "c...k..c",
            ],
            Player::A,
        )
        .expect("layout");
        let moves = legal_moves(&position, Player::A);
        let unique: HashSet<Move> = moves.iter().copied().collect();
        assert_eq!(unique.len(), moves.len());
        assert_eq!(moves.len(), 48);
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        let position = Position::from_layout(
            &[
                "....K...",
                "....C...",
                "........",
                "........",
                "........",
                "........",
                "....n...",
                "....k...",
            ],
            Player::A,
        )
        .expect("layout");
        let e2 = "e2".parse().expect("square");
        assert!(legal_moves_from(&position, e2).is_empty());
        assert!(legal_moves(&position, Player::A)
            .iter()
            .all(|mv| mv.from != e2));
    }

    #[test]
    fn no_returned_move_leaves_own_king_attacked() {
        let mut position = Position::new_game();
        for text in ["e2e4", "f7f6", "d1h5"] {
            let mv: Move = text.parse().expect("move");
            apply_move_in_place(&mut position, mv).expect("apply");
        }
        position.side_to_move = Player::B;
        assert!(is_in_check(&position, Player::B));

        let moves = legal_moves(&position, Player::B);
        assert_eq!(names(&moves), ["g7g6"]);
        for mv in moves {
            let mut scratch = position.clone();
            apply_move_in_place(&mut scratch, mv).expect("apply");
            assert!(!is_in_check(&scratch, Player::B));
        }
    }

    #[test]
    fn king_captures_are_never_generated() {
        let position = Position::from_layout(
            &[
                "........",
                "........",
                "........",
                "........",
                "...K....",
                "........",
                "...q....",
                "k.......",
            ],
            Player::A,
        )
        .expect("layout");
        let moves = legal_moves(&position, Player::A);
        assert!(moves.iter().all(|mv| position.piece_at(mv.to).is_none()));
    }

    #[test]
    fn legality_query_checks_owner_and_rules() {
        let position = Position::new_game();
        assert!(is_legal_move(&position, Player::A, "e2e4".parse().expect("move")));
        assert!(!is_legal_move(&position, Player::B, "e2e4".parse().expect("move")));
        assert!(!is_legal_move(&position, Player::A, "e2e5".parse().expect("move")));
        assert!(has_legal_move(&position, Player::B));
    }
}
