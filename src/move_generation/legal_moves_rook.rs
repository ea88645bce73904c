use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::{push_sliding_moves, ROOK_DIRECTIONS};

pub fn generate_rook_moves(position: &Position, from: Square, player: Player, out: &mut Vec<Move>) {
    push_sliding_moves(position, from, player, &ROOK_DIRECTIONS, out);
}
