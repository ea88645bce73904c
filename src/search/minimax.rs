//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Every node works on its own copy of the position. Leaves are scored from
//! the searching player's perspective; there is no quiescence extension.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::errors::{SearchError, SearchResult};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer, MATE_SCORE};

const SCORE_INFINITY: i32 = MATE_SCORE * 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root. Zero is treated as one.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self { depth }
    }

    #[inline]
    pub fn effective_depth(self) -> u8 {
        self.depth.max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Minimax value of `best_move` for the side that searched.
    pub score: i32,
    pub nodes: u64,
}

#[derive(Debug, Clone)]
pub struct MinimaxSearch<S: BoardScorer = PieceSquareScorer> {
    config: SearchConfig,
    scorer: S,
}

impl MinimaxSearch<PieceSquareScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, PieceSquareScorer::default())
    }
}

impl Default for MinimaxSearch<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxSearch<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Best move for `position.side_to_move`. Fails with
    /// [`SearchError::NoLegalMoves`] if that side cannot move.
    pub fn best_move(&self, position: &Position) -> SearchResult<SearchOutcome> {
        self.best_move_until(position, &AtomicBool::new(false))
    }

    /// Same as [`Self::best_move`], but gives up with
    /// [`SearchError::Cancelled`] once `stop` is raised. The flag is read
    /// between root moves.
    pub fn best_move_until(&self, position: &Position, stop: &AtomicBool) -> SearchResult<SearchOutcome> {
        let searcher = position.side_to_move;
        let root_moves = legal_moves(position, searcher);
        if root_moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut context = SearchContext {
            scorer: &self.scorer,
            searcher,
            depth_limit: self.config.effective_depth(),
            nodes: 1,
        };

        let mut best: Option<(Move, i32)> = None;
        let mut alpha = -SCORE_INFINITY;
        for mv in root_moves {
            if stop.load(Ordering::Relaxed) {
                debug!(nodes = context.nodes, "search cancelled");
                return Err(SearchError::Cancelled);
            }
            let Ok(child) = apply_move(position, mv) else {
                continue;
            };
            let value = context.minimize(&child, 1, alpha);
            trace!(%mv, value, "root move scored");
            alpha = alpha.max(value);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        let (best_move, score) = best.ok_or(SearchError::NoLegalMoves)?;
        debug!(%best_move, score, nodes = context.nodes, "search finished");
        Ok(SearchOutcome {
            best_move,
            score,
            nodes: context.nodes,
        })
    }
}

struct SearchContext<'a, S: BoardScorer> {
    scorer: &'a S,
    searcher: Player,
    depth_limit: u8,
    nodes: u64,
}

impl<S: BoardScorer> SearchContext<'_, S> {
    /// Searcher to move. `beta` is the running minimum of the parent.
    fn maximize(&mut self, position: &Position, depth: u8, beta: i32) -> i32 {
        self.nodes += 1;
        if depth >= self.depth_limit {
            return self.scorer.score(position, self.searcher);
        }

        let moves = legal_moves(position, position.side_to_move);
        if moves.is_empty() {
            return -(MATE_SCORE - depth as i32);
        }

        let mut alpha = -SCORE_INFINITY;
        for mv in moves {
            let Ok(child) = apply_move(position, mv) else {
                continue;
            };
            alpha = alpha.max(self.minimize(&child, depth + 1, alpha));
            if alpha > beta {
                return alpha;
            }
        }
        alpha
    }

    /// Opponent to move. `alpha` is the running maximum of the parent.
    fn minimize(&mut self, position: &Position, depth: u8, alpha: i32) -> i32 {
        self.nodes += 1;
        if depth >= self.depth_limit {
            return self.scorer.score(position, self.searcher);
        }

        let moves = legal_moves(position, position.side_to_move);
        if moves.is_empty() {
            return MATE_SCORE - depth as i32;
        }

        let mut beta = SCORE_INFINITY;
        for mv in moves {
            let Ok(child) = apply_move(position, mv) else {
                continue;
            };
            beta = beta.min(self.maximize(&child, depth + 1, beta));
            if beta < alpha {
                return beta;
            }
        }
        beta
    }
}
