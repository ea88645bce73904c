use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::{push_sliding_moves, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(position: &Position, from: Square, player: Player, out: &mut Vec<Move>) {
    push_sliding_moves(position, from, player, &BISHOP_DIRECTIONS, out);
}
