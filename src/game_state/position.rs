//! Mailbox board representation.
//!
//! `Position` is plain data: an 8x8 grid of optional piece records indexed by
//! `[file][rank]` plus the side to move. It is cheap to clone, and search and
//! legality checks always work on clones so the live game is never aliased.

use crate::errors::LayoutError;
use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::chess_types::*;
use crate::utils::layout::parse_layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<PieceRecord>; 8]; 8],
    pub side_to_move: Player,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_empty(Player::A)
    }
}

impl Position {
    pub fn new_empty(side_to_move: Player) -> Self {
        Self {
            squares: [[None; 8]; 8],
            side_to_move,
        }
    }

    /// Standard starting layout with `Player::A` to move.
    pub fn new_game() -> Self {
        parse_layout(&STARTING_LAYOUT, Player::A).expect("starting layout should always parse")
    }

    /// Builds a position from a board diagram, first row = rank 8.
    pub fn from_layout(rows: &[&str], side_to_move: Player) -> Result<Self, LayoutError> {
        parse_layout(rows, side_to_move)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PieceRecord> {
        self.squares[square.file as usize][square.rank as usize]
    }

    #[inline]
    pub fn at_mut(&mut self, square: Square) -> &mut Option<PieceRecord> {
        &mut self.squares[square.file as usize][square.rank as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Puts `record` on `square`, returning whatever was there.
    #[inline]
    pub fn place(&mut self, square: Square, record: PieceRecord) -> Option<PieceRecord> {
        self.at_mut(square).replace(record)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<PieceRecord> {
        self.at_mut(square).take()
    }

    pub fn king_square(&self, player: Player) -> Option<Square> {
        Square::all().find(|&sq| {
            matches!(
                self.piece_at(sq),
                Some(PieceRecord { owner, kind: PieceKind::King, .. }) if owner == player
            )
        })
    }

    /// Every occupied square in file-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceRecord)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|record| (sq, record)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, PieceRecord)> + '_ {
        self.occupied().filter(move |(_, record)| record.owner == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    #[test]
    fn default_layout_matches_standard_setup() {
        let position = Position::new_game();
        assert_eq!(position.side_to_move, Player::A);

        for file in 0..8u8 {
            for rank in 0..8u8 {
                let sq = Square::new(file, rank).expect("square on board");
                let piece = position.piece_at(sq);
                match rank {
                    0 | 7 => {
                        let owner = if rank == 0 { Player::A } else { Player::B };
                        let record = piece.expect("home rank is full");
                        assert_eq!(record.kind, HOME_RANK[file as usize]);
                        assert_eq!(record.owner, owner);
                        assert!(!record.has_moved);
                    }
                    1 | 6 => {
                        let owner = if rank == 1 { Player::A } else { Player::B };
                        let record = piece.expect("pawn rank is full");
                        assert_eq!(record.kind, PieceKind::Pawn);
                        assert_eq!(record.owner, owner);
                    }
                    _ => assert!(piece.is_none(), "rank {rank} should be empty"),
                }
            }
        }
    }

    #[test]
    fn kings_are_found_on_e_file() {
        let position = Position::new_game();
        assert_eq!(position.king_square(Player::A), Square::new(4, 0));
        assert_eq!(position.king_square(Player::B), Square::new(4, 7));
        assert_eq!(Position::default().king_square(Player::A), None);
    }

    #[test]
    fn place_and_remove_round_trip() {
        let mut position = Position::new_empty(Player::B);
        let sq = Square::new(3, 3).expect("d4");
        let knight = PieceRecord::new(Player::B, PieceKind::Knight);
        assert_eq!(position.place(sq, knight), None);
        assert_eq!(position.pieces_of(Player::B).count(), 1);
        assert_eq!(position.remove(sq), Some(knight));
        assert!(position.is_empty(sq));
    }
}
