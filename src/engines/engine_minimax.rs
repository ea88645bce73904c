//! Engine wrapper over the fixed-depth alpha-beta search.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::EngineResult;
use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::minimax::{MinimaxSearch, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = PieceSquareScorer> {
    search: MinimaxSearch<S>,
}

impl MinimaxEngine<PieceSquareScorer> {
    pub fn new(depth: u8) -> Self {
        Self {
            search: MinimaxSearch::new(SearchConfig::with_depth(depth)),
        }
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_search(search: MinimaxSearch<S>) -> Self {
        Self { search }
    }

    pub fn search(&self) -> &MinimaxSearch<S> {
        &self.search
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, position: &Position) -> EngineResult<EngineOutput> {
        let outcome = self.search.best_move(position)?;
        Ok(EngineOutput {
            best_move: Some(outcome.best_move),
            score: Some(outcome.score),
            info_lines: vec![format!(
                "minimax depth {} score {} nodes {}",
                self.search.config().effective_depth(),
                outcome.score,
                outcome.nodes
            )],
        })
    }
}
