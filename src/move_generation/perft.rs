//! Move-path enumeration used to validate the generator against published
//! node counts.

use std::thread;

use crate::game_controller::actions::Action;
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub terminal: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.terminal += rhs.terminal;
    }
}

/// Leaf count only.
pub fn perft(position: &Position, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    let mover = position.side_to_move;
    let moves = legal_moves(position, mover);
    if depth == 1 {
        return moves.len();
    }

    let mut nodes = 0;
    for mv in moves {
        let mut child = position.clone();
        if apply_move_in_place(&mut child, mv).is_err() {
            continue;
        }
        child.side_to_move = mover.opposite();
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Leaf count per root move, sorted by move text.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(Move, usize)> {
    let mover = position.side_to_move;
    let mut split: Vec<(Move, usize)> = legal_moves(position, mover)
        .into_iter()
        .filter_map(|mv| {
            let mut child = position.clone();
            apply_move_in_place(&mut child, mv).ok()?;
            child.side_to_move = mover.opposite();
            Some((mv, perft(&child, depth.saturating_sub(1))))
        })
        .collect();
    split.sort_by_key(|(mv, _)| mv.to_string());
    split
}

/// Leaf statistics, classified by the actions of the final move.
pub fn perft_detailed(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    let mut total = PerftCounts::default();
    perft_recurse(position, depth, &mut total);
    total
}

/// Splits the root moves across scoped threads.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft_detailed(position, depth);
    }

    let mover = position.side_to_move;
    let root_moves = legal_moves(position, mover);
    let mut total = PerftCounts::default();

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    let mut child = position.clone();
                    if let Ok(actions) = apply_move_in_place(&mut child, mv) {
                        child.side_to_move = mover.opposite();
                        if depth == 1 {
                            record_leaf(&child, &actions, &mut local);
                        } else {
                            perft_recurse(&child, depth - 1, &mut local);
                        }
                    }
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });

    total
}

fn perft_recurse(position: &Position, depth: u8, counts: &mut PerftCounts) {
    let mover = position.side_to_move;
    for mv in legal_moves(position, mover) {
        let mut child = position.clone();
        let Ok(actions) = apply_move_in_place(&mut child, mv) else {
            continue;
        };
        child.side_to_move = mover.opposite();

        if depth == 1 {
            record_leaf(&child, &actions, counts);
        } else {
            perft_recurse(&child, depth - 1, counts);
        }
    }
}

fn record_leaf(child: &Position, actions: &[Action], counts: &mut PerftCounts) {
    counts.nodes += 1;
    for action in actions {
        match action {
            Action::Capture { .. } => counts.captures += 1,
            Action::EnPassantCapture { .. } => {
                counts.captures += 1;
                counts.en_passant += 1;
            }
            Action::Castle { .. } => counts.castles += 1,
            Action::Promotion { .. } => counts.promotions += 1,
            Action::Move { .. } => {}
        }
    }
    let defender = child.side_to_move;
    if is_in_check(child, defender) {
        counts.checks += 1;
    }
    if !has_legal_move(child, defender) {
        counts.terminal += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITION_3: [&str; 8] = [
        "........",
        "..P.....",
        "...P....",
        "kp.....C",
        ".c...P.K",
        "........",
        "....p.p.",
        "........",
    ];

    const KIWIPETE: [&str; 8] = [
        "C...K..C",
        "P.PPQPB.",
        "BN..PNP.",
        "...pn...",
        ".P..p...",
        "..n..q.P",
        "pppbbppp",
        "c...k..c",
    ];

    #[test]
    fn start_position_counts() {
        let position = Position::new_game();
        assert_eq!(perft(&position, 1), 20);
        assert_eq!(perft(&position, 2), 400);
        assert_eq!(perft(&position, 3), 8902);
    }

    #[test]
    fn start_position_detail_at_depth_three() {
        let counts = perft_detailed(&Position::new_game(), 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.castles, 0);
    }

    #[test]
    fn endgame_position_exercises_en_passant_and_pins() {
        let position = Position::from_layout(&POSITION_3, Player::A).expect("layout");
        assert_eq!(perft(&position, 1), 14);
        assert_eq!(perft(&position, 2), 191);
        assert_eq!(perft(&position, 3), 2812);
    }

    #[test]
    fn kiwipete_counts() {
        let position = Position::from_layout(&KIWIPETE, Player::A).expect("layout");
        assert_eq!(perft(&position, 1), 48);
        assert_eq!(perft(&position, 2), 2039);

        let counts = perft_detailed(&position, 1);
        assert_eq!(counts.captures, 8);
        assert_eq!(counts.castles, 2);
    }

    #[test]
    fn threaded_matches_single_threaded() {
        let position = Position::from_layout(&KIWIPETE, Player::A).expect("layout");
        assert_eq!(perft_multi_threaded(&position, 2), perft_detailed(&position, 2));
    }

    #[test]
    fn divide_sums_to_total() {
        let position = Position::new_game();
        let split = perft_divide(&position, 2);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|&(_, nodes)| nodes == 20));
        assert_eq!(split.iter().map(|&(_, n)| n).sum::<usize>(), 400);
    }
}
