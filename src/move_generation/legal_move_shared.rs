use crate::game_state::{chess_types::*, position::Position};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// Kings are never capture targets; a legal game never reaches that point.
#[inline]
pub fn is_capturable_by(target: &PieceRecord, player: Player) -> bool {
    target.is_enemy_of(player) && target.kind != PieceKind::King
}

/// Rays outward from `from` until the board edge or the first occupied
/// square, which is included when it holds a capturable enemy.
pub fn push_sliding_moves(
    position: &Position,
    from: Square,
    player: Player,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_file, d_rank) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_file, d_rank) {
            match position.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(target) => {
                    if is_capturable_by(&target, player) {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Single jumps (knight, king) to each on-board offset not held by a friend.
pub fn push_step_moves(
    position: &Position,
    from: Square,
    player: Player,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_file, d_rank) in offsets {
        let Some(to) = from.offset(d_file, d_rank) else {
            continue;
        };
        match position.piece_at(to) {
            None => out.push(Move::new(from, to)),
            Some(target) if is_capturable_by(&target, player) => out.push(Move::new(from, to)),
            Some(_) => {}
        }
    }
}
