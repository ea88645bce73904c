//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through the game
//! controller, exactly as any other actor would play, with an optional seeded
//! random opening prefix.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{EngineResult, SearchError};
use crate::game_controller::controller::{GameController, GameState};
use crate::game_state::{chess_types::*, position::Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Checkmate { winner: Player },
    Stalemate { winner: Player },
    MaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            MatchOutcome::Checkmate { winner } | MatchOutcome::Stalemate { winner } => Some(winner),
            MatchOutcome::MaxPlies => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Cap on engine plies, not counting the random opening.
    pub max_plies: u16,
    pub opening_random_plies: u8,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_random_plies: 4,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    /// Indexed by [`Player::index`].
    pub move_counts: [u32; 2],
    pub think_time_ns: [u128; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub unfinished: u16,
    pub winners: Vec<Option<PlayerId>>,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} unfinished={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.unfinished,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play one seeded match from the standard layout. `engine_a` moves first.
pub fn play_engine_match(
    engine_a: &mut dyn Engine,
    engine_b: &mut dyn Engine,
    config: MatchConfig,
) -> EngineResult<MatchResult> {
    play_engine_match_from(Position::new_game(), engine_a, engine_b, config)
}

/// Play one match from `start`. The random opening still applies when
/// `config.opening_random_plies` is non-zero.
pub fn play_engine_match_from(
    start: Position,
    engine_a: &mut dyn Engine,
    engine_b: &mut dyn Engine,
    config: MatchConfig,
) -> EngineResult<MatchResult> {
    engine_a.new_game();
    engine_b.new_game();
    debug!(a = engine_a.name(), b = engine_b.name(), "match started");

    let mut game = GameController::from_position(start);
    let opening_moves = apply_seeded_random_opening(&mut game, config.seed, config.opening_random_plies)?;

    let mut played_moves = Vec::new();
    let mut move_counts = [0u32; 2];
    let mut think_time_ns = [0u128; 2];

    for _ in 0..config.max_plies {
        if game.state() != GameState::Playing {
            break;
        }

        let mover = game.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Player::A => engine_a.choose_move(game.position())?,
            Player::B => engine_b.choose_move(game.position())?,
        };
        let elapsed_ns = started.elapsed().as_nanos();
        move_counts[mover.index()] = move_counts[mover.index()].saturating_add(1);
        think_time_ns[mover.index()] = think_time_ns[mover.index()].saturating_add(elapsed_ns);

        let chosen = out.best_move.ok_or(SearchError::NoLegalMoves)?;
        debug!(?mover, %chosen, "engine move");
        game.propose_move(chosen)?;
        played_moves.push(chosen);
    }

    let outcome = match (game.state(), game.winner()) {
        (GameState::WonByCheckmate, Some(winner)) => MatchOutcome::Checkmate { winner },
        (GameState::WonByStalemate, Some(winner)) => MatchOutcome::Stalemate { winner },
        _ => MatchOutcome::MaxPlies,
    };

    Ok(MatchResult {
        outcome,
        final_position: game.position().clone(),
        opening_moves,
        played_moves,
        move_counts,
        think_time_ns,
    })
}

/// Play a series of matches and aggregate results.
///
/// Player sides are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> EngineResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);
    let mut moves = [0u32; 2];
    let mut time_ns = [0u128; 2];

    for i in 0..config.games {
        let player1_is_a = side_rng.random_bool(0.5);
        let per_game = MatchConfig {
            seed: config.base_seed.wrapping_add(u64::from(i)),
            ..config.per_game
        };

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_a {
            play_engine_match(player1.as_mut(), player2.as_mut(), per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), per_game)?
        };

        let id_of = |player: Player| match (player, player1_is_a) {
            (Player::A, true) | (Player::B, false) => PlayerId::Player1,
            _ => PlayerId::Player2,
        };
        for player in [Player::A, Player::B] {
            let slot = match id_of(player) {
                PlayerId::Player1 => 0,
                PlayerId::Player2 => 1,
            };
            moves[slot] = moves[slot].saturating_add(result.move_counts[player.index()]);
            time_ns[slot] = time_ns[slot].saturating_add(result.think_time_ns[player.index()]);
        }

        let winner = result.outcome.winner().map(id_of);
        match winner {
            Some(PlayerId::Player1) => stats.player1_wins += 1,
            Some(PlayerId::Player2) => stats.player2_wins += 1,
            None => stats.unfinished += 1,
        }
        stats.winners.push(winner);
        info!(
            game = i + 1,
            of = config.games,
            outcome = ?result.outcome,
            plies = result.played_moves.len(),
            "match finished"
        );
    }

    stats.player1_avg_move_time_ms = avg_ns_per_move_ms(time_ns[0], moves[0]);
    stats.player2_avg_move_time_ms = avg_ns_per_move_ms(time_ns[1], moves[1]);
    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(game: &mut GameController, seed: u64, plies: u8) -> EngineResult<Vec<Move>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::new();

    for _ in 0..plies {
        if game.state() != GameState::Playing {
            break;
        }
        let legal_moves = game.legal_moves();
        if legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        game.propose_move(chosen)?;
        opening_moves.push(chosen);
    }

    Ok(opening_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::errors::{EngineError, GameError};

    struct StubbornEngine(Move);

    impl Engine for StubbornEngine {
        fn name(&self) -> &str {
            "Stubborn"
        }

        fn choose_move(&mut self, _position: &Position) -> EngineResult<EngineOutput> {
            Ok(EngineOutput {
                best_move: Some(self.0),
                ..EngineOutput::default()
            })
        }
    }

    #[test]
    fn random_vs_minimax_runs_to_a_result() {
        let mut a = RandomEngine::with_seed(1);
        let mut b = MinimaxEngine::new(1);
        let result = play_engine_match(
            &mut a,
            &mut b,
            MatchConfig {
                max_plies: 40,
                opening_random_plies: 2,
                seed: 42,
            },
        )
        .expect("match should run");

        assert_eq!(result.opening_moves.len(), 2);
        let engine_plies = result.move_counts[0] + result.move_counts[1];
        assert_eq!(engine_plies as usize, result.played_moves.len());
        assert!(engine_plies <= 40);
    }

    #[test]
    fn same_seed_replays_the_same_opening() {
        let config = MatchConfig {
            max_plies: 0,
            opening_random_plies: 6,
            seed: 9,
        };
        let first = play_engine_match(&mut RandomEngine::new(), &mut RandomEngine::new(), config)
            .expect("match");
        let second = play_engine_match(&mut RandomEngine::new(), &mut RandomEngine::new(), config)
            .expect("match");
        assert_eq!(first.opening_moves, second.opening_moves);
        assert_eq!(first.outcome, MatchOutcome::MaxPlies);
    }

    #[test]
    fn mating_engine_wins_from_a_prepared_position() {
        let start = Position::from_layout(
            &[
                ".......K",
                "........",
                "......k.",
                "........",
                "........",
                "........",
                "........",
                "c.......",
            ],
            Player::A,
        )
        .expect("layout");
        let result = play_engine_match_from(
            start,
            &mut MinimaxEngine::new(2),
            &mut RandomEngine::with_seed(3),
            MatchConfig {
                max_plies: 10,
                opening_random_plies: 0,
                seed: 0,
            },
        )
        .expect("match");
        assert_eq!(result.outcome, MatchOutcome::Checkmate { winner: Player::A });
        assert_eq!(result.played_moves, vec!["a1a8".parse::<Move>().expect("move")]);
    }

    #[test]
    fn illegal_engine_move_is_rejected_by_the_controller() {
        let bad: Move = "e2e5".parse().expect("move");
        let err = play_engine_match(
            &mut StubbornEngine(bad),
            &mut RandomEngine::new(),
            MatchConfig {
                opening_random_plies: 0,
                ..MatchConfig::default()
            },
        )
        .expect_err("illegal move must fail");
        assert_eq!(err, EngineError::Game(GameError::IllegalMove(bad)));
    }

    #[test]
    fn series_counts_every_game() {
        let stats = play_engine_match_series(
            || Box::new(RandomEngine::with_seed(5)),
            || Box::new(MinimaxEngine::new(1)),
            MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 12,
                    opening_random_plies: 2,
                    seed: 0,
                },
            },
        )
        .expect("series should run");

        assert_eq!(stats.winners.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.unfinished, 3);
        assert!(stats.player1_avg_move_time_ms >= 0.0);
        assert!(stats.report().starts_with("games=3"));
    }
}
