use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::is_capturable_by;

/// Pushes, diagonal captures and en passant for the pawn on `from`.
/// Promotion is implicit: a pawn reaching the last rank always becomes a queen.
pub fn generate_pawn_moves(position: &Position, from: Square, player: Player, out: &mut Vec<Move>) {
    let direction = player.pawn_direction();

    if let Some(one_step) = from.offset(0, direction) {
        if position.is_empty(one_step) {
            out.push(Move::new(from, one_step));

            if from.rank == player.pawn_start_rank() {
                if let Some(two_step) = from.offset(0, 2 * direction) {
                    if position.is_empty(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(to) = from.offset(d_file, direction) else {
            continue;
        };
        match position.piece_at(to) {
            Some(target) => {
                if is_capturable_by(&target, player) {
                    out.push(Move::new(from, to));
                }
            }
            None => {
                if from.rank != player.en_passant_rank() {
                    continue;
                }
                let passed = from.offset(d_file, 0).and_then(|sq| position.piece_at(sq));
                if matches!(
                    passed,
                    Some(PieceRecord {
                        owner,
                        kind: PieceKind::Pawn,
                        en_passant_eligible: true,
                        ..
                    }) if owner != player
                ) {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves_from(position: &Position, from: &str, player: Player) -> Vec<String> {
        let mut out = Vec::new();
        generate_pawn_moves(position, from.parse().expect("square"), player, &mut out);
        let mut names: Vec<String> = out.iter().map(|m| m.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let position = Position::new_game();
        assert_eq!(moves_from(&position, "e2", Player::A), ["e2e3", "e2e4"]);
        assert_eq!(moves_from(&position, "e7", Player::B), ["e7e5", "e7e6"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let position = Position::from_layout(
            &[
                "....K...",
                "........",
                "........",
                "........",
                "........",
                "....N...",
                "....p...",
                "....k...",
            ],
            Player::A,
        )
        .expect("layout");
        assert!(moves_from(&position, "e2", Player::A).is_empty());
    }

    #[test]
    fn en_passant_requires_flagged_neighbour_on_the_right_rank() {
        let mut position = Position::from_layout(
            &[
                "....K...",
                "........",
                "........",
                "...Pp...",
                "........",
                "........",
                "........",
                "....k...",
            ],
            Player::A,
        )
        .expect("layout");
        assert_eq!(moves_from(&position, "e5", Player::A), ["e5e6"]);

        let d5 = "d5".parse().expect("square");
        if let Some(record) = position.at_mut(d5).as_mut() {
            record.en_passant_eligible = true;
        }
        assert_eq!(moves_from(&position, "e5", Player::A), ["e5d6", "e5e6"]);
    }

    #[test]
    fn pawns_never_capture_kings() {
        let position = Position::from_layout(
            &[
                "........",
                "........",
                "........",
                "........",
                "........",
                "...K....",
                "....p...",
                "....k...",
            ],
            Player::A,
        )
        .expect("layout");
        assert_eq!(moves_from(&position, "e2", Player::A), ["e2e3", "e2e4"]);
    }
}
