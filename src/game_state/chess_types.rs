/// Core value types for the mailbox rules engine: sides, piece kinds,
/// squares, moves and the per-square piece record.
use crate::game_state::chess_rules::{
    BOARD_DIMENSIONS, EN_PASSANT_RANK_A, EN_PASSANT_RANK_B, PAWN_START_RANK_A,
    PAWN_START_RANK_B,
};

/// One of the two sides. `A` starts on ranks 0-1 and moves toward rank 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    A,
    B,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Rank delta of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Rank from which a pawn may advance two squares.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Player::A => PAWN_START_RANK_A,
            Player::B => PAWN_START_RANK_B,
        }
    }

    /// Rank a pawn must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Player::A => EN_PASSANT_RANK_A,
            Player::B => EN_PASSANT_RANK_B,
        }
    }

    /// Farthest rank, where pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Player::A => BOARD_DIMENSIONS - 1,
            Player::B => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Board coordinate, file and rank both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_DIMENSIONS && rank < BOARD_DIMENSIONS {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Square displaced by `(d_file, d_rank)`, or `None` past the edge.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..BOARD_DIMENSIONS as i8).contains(&file) && (0..BOARD_DIMENSIONS as i8).contains(&rank)
        {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, file-major, rank-minor.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_DIMENSIONS)
            .flat_map(|file| (0..BOARD_DIMENSIONS).map(move |rank| Square { file, rank }))
    }
}

/// A from/to pair. Castling is expressed as the king's two-file move and
/// en passant as the capturing pawn's diagonal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Contents of an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRecord {
    pub owner: Player,
    pub kind: PieceKind,
    pub has_moved: bool,
    /// Set on a pawn for exactly the opponent's next ply after it advanced
    /// two ranks.
    pub en_passant_eligible: bool,
}

impl PieceRecord {
    #[inline]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self {
            owner,
            kind,
            has_moved: false,
            en_passant_eligible: false,
        }
    }

    #[inline]
    pub fn is_enemy_of(&self, player: Player) -> bool {
        self.owner != player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::new(0, 0).expect("a1 is on the board");
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(7, 7), Square::new(7, 7));
        assert_eq!(corner.offset(8, 0), None);
    }

    #[test]
    fn all_squares_are_unique_and_complete() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        let mut sorted = squares.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 64);
    }

    #[test]
    fn player_rank_rules_mirror() {
        assert_eq!(Player::A.pawn_start_rank(), 1);
        assert_eq!(Player::B.pawn_start_rank(), 6);
        assert_eq!(Player::A.en_passant_rank(), 4);
        assert_eq!(Player::B.en_passant_rank(), 3);
        assert_eq!(Player::A.promotion_rank(), 7);
        assert_eq!(Player::B.promotion_rank(), 0);
        assert_eq!(Player::A.opposite(), Player::B);
    }
}
