//! Pluggable board evaluation.
//!
//! Search delegates static scoring to [`BoardScorer`], so heuristics can be
//! swapped without touching the search itself. The default scorer combines
//! material with per-kind piece-square tables.

use crate::game_state::{chess_types::*, position::Position};

/// Magnitude of a decided game. Far above any material sum.
pub const MATE_SCORE: i32 = 1_000_000;

pub trait BoardScorer: Send + Sync {
    /// Score from `perspective`'s point of view; positive is good for it.
    fn score(&self, position: &Position, perspective: Player) -> i32;
}

/// Material weights indexed by [`PieceKind::index`].
pub const MATERIAL_VALUES: [i32; 6] = [20, 80, 100, 200, 300, 3000];

type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN_TABLE: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: Table = [
    [  0,   0,   0,   5,   5,   0,   0,   0],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN_TABLE: Table = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_TABLE: Table = [
    [ 20,  30,  10,   0,   0,  10,  30,  20],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
];

/// Evaluation data. Bonus tables are `[rank][file]` as seen by `Player::A`;
/// `Player::B` reads them with the ranks flipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSquareTables {
    pub material: [i32; 6],
    pub bonus: [Table; 6],
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        Self {
            material: MATERIAL_VALUES,
            bonus: [
                PAWN_TABLE,
                KNIGHT_TABLE,
                BISHOP_TABLE,
                ROOK_TABLE,
                QUEEN_TABLE,
                KING_TABLE,
            ],
        }
    }
}

impl PieceSquareTables {
    #[inline]
    pub fn piece_value(&self, record: &PieceRecord, square: Square) -> i32 {
        let relative_rank = match record.owner {
            Player::A => square.rank,
            Player::B => 7 - square.rank,
        };
        let kind = record.kind.index();
        self.material[kind] + self.bonus[kind][relative_rank as usize][square.file as usize]
    }
}

#[derive(Debug, Clone, Default)]
pub struct PieceSquareScorer {
    tables: PieceSquareTables,
}

impl PieceSquareScorer {
    pub fn new(tables: PieceSquareTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &PieceSquareTables {
        &self.tables
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, position: &Position, perspective: Player) -> i32 {
        position
            .occupied()
            .map(|(square, record)| {
                let value = self.tables.piece_value(&record, square);
                if record.owner == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

/// Material only, no positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position, perspective: Player) -> i32 {
        position
            .occupied()
            .map(|(_, record)| {
                let value = MATERIAL_VALUES[record.kind.index()];
                if record.owner == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
