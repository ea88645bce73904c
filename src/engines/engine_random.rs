//! Random-move engine.
//!
//! Selects uniformly from legal moves; used for diagnostics, match-harness
//! tests and as the weakest opponent.

use rand::{prelude::IndexedRandom, rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::EngineResult;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choice.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, position: &Position) -> EngineResult<EngineOutput> {
        let legal_moves = legal_moves(position, position.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let position = Position::new_game();
        let mut engine = RandomEngine::new();
        let out = engine.choose_move(&position).expect("choose");
        let mv = out.best_move.expect("start position has moves");
        assert!(legal_moves(&position, position.side_to_move).contains(&mv));
    }

    #[test]
    fn same_seed_same_choices() {
        let position = Position::new_game();
        let mut first = RandomEngine::with_seed(7);
        let mut second = RandomEngine::with_seed(7);
        for _ in 0..5 {
            assert_eq!(
                first.choose_move(&position).expect("choose").best_move,
                second.choose_move(&position).expect("choose").best_move
            );
        }
    }
}
