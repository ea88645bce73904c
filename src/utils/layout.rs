//! Setup-grid parsing for literal board layouts.
//!
//! A layout is 8 rows of 8 characters written the way a board diagram reads:
//! the first row is rank 8 (index 7) and the last row is rank 1 (index 0).
//! Lowercase letters belong to `Player::A`, uppercase to `Player::B`:
//! `p` pawn, `c` rook ("castle"), `n` knight, `b` bishop, `q` queen, `k` king.
//! Any other character is an empty square.

use crate::errors::LayoutError;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub fn parse_layout(rows: &[&str], side_to_move: Player) -> Result<Position, LayoutError> {
    if rows.len() != 8 {
        return Err(LayoutError::WrongRowCount(rows.len()));
    }

    let mut position = Position::new_empty(side_to_move);
    for (row_index, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != 8 {
            return Err(LayoutError::WrongRowLength {
                row: row_index,
                found,
            });
        }

        let rank = 7 - row_index as u8;
        for (file, ch) in row.chars().enumerate() {
            if let Some(record) = char_to_piece(ch) {
                let square = Square {
                    file: file as u8,
                    rank,
                };
                position.place(square, record);
            }
        }
    }

    Ok(position)
}

pub fn char_to_piece(ch: char) -> Option<PieceRecord> {
    let owner = if ch.is_ascii_lowercase() {
        Player::A
    } else {
        Player::B
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'c' => PieceKind::Rook,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(PieceRecord::new(owner, kind))
}

pub fn piece_to_char(record: &PieceRecord) -> char {
    let ch = match record.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Rook => 'c',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match record.owner {
        Player::A => ch,
        Player::B => ch.to_ascii_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_characters_are_empty_squares() {
        let rows = [
            "e.e.K.e.", "........", "xxxxxxxx", "        ", "--------", "........", "........",
            "....k...",
        ];
        let position = parse_layout(&rows, Player::B).expect("layout should parse");
        assert_eq!(position.occupied().count(), 2);
        assert_eq!(position.side_to_move, Player::B);
        assert_eq!(position.king_square(Player::B), Square::new(4, 7));
        assert_eq!(position.king_square(Player::A), Square::new(4, 0));
    }

    #[test]
    fn rook_uses_castle_letter() {
        let record = char_to_piece('C').expect("C is a rook");
        assert_eq!(record.kind, PieceKind::Rook);
        assert_eq!(record.owner, Player::B);
        assert_eq!(piece_to_char(&record), 'C');
        assert_eq!(char_to_piece('r'), None);
    }

    #[test]
    fn wrong_dimensions_are_rejected() {
        let short = ["........"; 7];
        assert_eq!(
            parse_layout(&short, Player::A),
            Err(LayoutError::WrongRowCount(7))
        );

        let mut rows = ["........"; 8];
        rows[3] = ".......";
        assert_eq!(
            parse_layout(&rows, Player::A),
            Err(LayoutError::WrongRowLength { row: 3, found: 7 })
        );
    }
}
