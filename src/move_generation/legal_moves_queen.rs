use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::{push_sliding_moves, QUEEN_DIRECTIONS};

pub fn generate_queen_moves(position: &Position, from: Square, player: Player, out: &mut Vec<Move>) {
    push_sliding_moves(position, from, player, &QUEEN_DIRECTIONS, out);
}
