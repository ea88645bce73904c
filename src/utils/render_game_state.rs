//! Plain-text board renderer for the console game, tests and diagnostics.
//!
//! Uses the layout characters (lowercase for `Player::A`, uppercase for
//! `Player::B`), so a rendered board reads like a setup grid.

use crate::game_controller::controller::{GameController, GameState};
use crate::game_state::{chess_types::*, position::Position};
use crate::utils::layout::piece_to_char;

/// Render the board with rank 8 at the top and file/rank labels on all sides.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = Square { file, rank };
            match position.piece_at(square) {
                Some(record) => out.push(piece_to_char(&record)),
                None => out.push('.'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// One line describing whose turn it is or how the game ended.
pub fn render_status(game: &GameController) -> String {
    let side = game.side_to_move();
    match game.state() {
        GameState::Playing if game.is_in_check(side) => format!("{side:?} to move (in check)"),
        GameState::Playing => format!("{side:?} to move"),
        GameState::WonByCheckmate => format!("{side:?} wins by checkmate"),
        GameState::WonByStalemate => format!("{side:?} wins by stalemate"),
        GameState::Paused => "game paused".to_owned(),
        GameState::Ended => "game ended".to_owned(),
    }
}
