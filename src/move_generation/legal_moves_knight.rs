use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_OFFSETS};

pub fn generate_knight_moves(position: &Position, from: Square, player: Player, out: &mut Vec<Move>) {
    push_step_moves(position, from, player, &KNIGHT_OFFSETS, out);
}
