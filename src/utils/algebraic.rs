//! Square and move coordinates in text form.
//!
//! Files `a`-`h` map to indices 0-7 and ranks `1`-`8` to indices 0-7. A move
//! is exactly four characters: from-file, from-rank, to-file, to-rank
//! (for example `d2d4`). Castling is written as the king's move (`e1g1`).

use std::fmt;
use std::str::FromStr;

use crate::errors::NotationError;
use crate::game_state::chess_types::{Move, Square};

/// Convert a coordinate such as `"e4"` to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, NotationError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 2 {
        return Err(NotationError::WrongLength {
            text: text.to_owned(),
            expected: 2,
            found: chars.len(),
        });
    }
    Ok(Square {
        file: file_from_char(chars[0])?,
        rank: rank_from_char(chars[1])?,
    })
}

pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file);
    let rank_char = char::from(b'1' + square.rank);
    format!("{file_char}{rank_char}")
}

/// Parse a four-character move string such as `"d2d4"`.
pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let trimmed = text.trim();
    let found = trimmed.chars().count();
    if found != 4 {
        return Err(NotationError::WrongLength {
            text: trimmed.to_owned(),
            expected: 4,
            found,
        });
    }
    // Split on a char boundary; the text may hold multi-byte chars.
    let split = trimmed
        .char_indices()
        .nth(2)
        .map(|(idx, _)| idx)
        .unwrap_or(trimmed.len());
    let from = algebraic_to_square(&trimmed[..split])?;
    let to = algebraic_to_square(&trimmed[split..])?;
    Ok(Move::new(from, to))
}

pub fn move_to_algebraic(mv: Move) -> String {
    format!(
        "{}{}",
        square_to_algebraic(mv.from),
        square_to_algebraic(mv.to)
    )
}

fn file_from_char(ch: char) -> Result<u8, NotationError> {
    match ch {
        'a'..='h' => Ok(ch as u8 - b'a'),
        _ => Err(NotationError::InvalidFile(ch)),
    }
}

fn rank_from_char(ch: char) -> Result<u8, NotationError> {
    match ch {
        '1'..='8' => Ok(ch as u8 - b'1'),
        _ => Err(NotationError::InvalidRank(ch)),
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corner_squares() {
        assert_eq!(algebraic_to_square("a1"), Ok(Square { file: 0, rank: 0 }));
        assert_eq!(algebraic_to_square("h8"), Ok(Square { file: 7, rank: 7 }));
        assert_eq!(square_to_algebraic(Square { file: 3, rank: 1 }), "d2");
    }

    #[test]
    fn parses_move_strings() {
        let mv: Move = "d2d4".parse().expect("move should parse");
        assert_eq!(mv.from, Square { file: 3, rank: 1 });
        assert_eq!(mv.to, Square { file: 3, rank: 3 });
        assert_eq!(mv.to_string(), "d2d4");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_move("i2i4"), Err(NotationError::InvalidFile('i')));
        assert_eq!(parse_move("a0a4"), Err(NotationError::InvalidRank('0')));
        assert_eq!(parse_move("a2a9"), Err(NotationError::InvalidRank('9')));
        assert!(matches!(
            parse_move("e2e4q"),
            Err(NotationError::WrongLength { found: 5, .. })
        ));
        assert!(matches!(
            parse_move("e2"),
            Err(NotationError::WrongLength { found: 2, .. })
        ));
        assert_eq!(parse_move("é2e4"), Err(NotationError::InvalidFile('é')));
    }
}
