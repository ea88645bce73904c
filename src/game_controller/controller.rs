//! The live game: one mutable position, its action log and the lifecycle
//! state machine. Every move from any actor goes through `propose_move`.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, info};

use crate::errors::{GameError, GameResult};
use crate::game_controller::action_log::ActionLog;
use crate::game_controller::actions::ActionBatch;
use crate::game_controller::events::GameEvent;
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    WonByCheckmate,
    WonByStalemate,
    Paused,
    Ended,
}

impl GameState {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GameState::WonByCheckmate | GameState::WonByStalemate | GameState::Ended
        )
    }
}

/// What an accepted move did: its actions and the events published for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub actions: ActionBatch,
    pub events: Vec<GameEvent>,
}

#[derive(Debug)]
pub struct GameController {
    position: Position,
    state: GameState,
    log: ActionLog,
    subscribers: Vec<Sender<GameEvent>>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Standard layout, `Player::A` to move.
    pub fn new() -> Self {
        Self::from_position(Position::new_game())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            state: GameState::Playing,
            log: ActionLog::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn side_to_move(&self) -> Player {
        self.position.side_to_move
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position, self.position.side_to_move)
    }

    pub fn is_in_check(&self, player: Player) -> bool {
        is_in_check(&self.position, player)
    }

    /// The player who delivered checkmate or stalemate. The turn is not
    /// handed over on a finishing move, so that is the side to move.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::WonByCheckmate | GameState::WonByStalemate => Some(self.position.side_to_move),
            _ => None,
        }
    }

    /// New channel receiving every event published from now on.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    /// Validates and applies `mv` for the side to move. On error nothing
    /// changes.
    pub fn propose_move(&mut self, mv: Move) -> GameResult<MoveReport> {
        if let Err(err) = self.validate(mv) {
            debug!(%mv, error = %err, "move rejected");
            return Err(err);
        }

        let mover = self.position.side_to_move;
        let opponent = mover.opposite();
        let actions = apply_move_in_place(&mut self.position, mv)?;
        self.log.extend_from_batch(&actions);
        debug!(?mover, %mv, actions = actions.len(), "move applied");

        let mut events = vec![GameEvent::BoardChanged(actions.clone())];

        // Castling availability depends on the side to move, so the reply
        // search runs with the turn already handed over.
        self.position.side_to_move = opponent;
        let opponent_in_check = is_in_check(&self.position, opponent);
        if has_legal_move(&self.position, opponent) {
            if opponent_in_check {
                events.push(GameEvent::PlayerInCheck(opponent));
            }
            events.push(GameEvent::TurnSwapped(opponent));
        } else {
            self.position.side_to_move = mover;
            self.state = if opponent_in_check {
                GameState::WonByCheckmate
            } else {
                GameState::WonByStalemate
            };
            info!(winner = ?mover, state = ?self.state, "game over");
            events.push(GameEvent::GameStateChanged(self.state));
        }

        self.publish(&events);
        Ok(MoveReport { actions, events })
    }

    /// Alias of [`GameController::propose_move`].
    pub fn apply(&mut self, mv: Move) -> GameResult<MoveReport> {
        self.propose_move(mv)
    }

    pub fn pause(&mut self) -> GameResult<()> {
        self.transition(GameState::Playing, GameState::Paused)
    }

    pub fn resume(&mut self) -> GameResult<()> {
        self.transition(GameState::Paused, GameState::Playing)
    }

    /// Ends the game from any state. Ending an ended game is a no-op.
    pub fn end(&mut self) {
        if self.state != GameState::Ended {
            self.set_state(GameState::Ended);
        }
    }

    pub fn reset(&mut self) {
        self.reset_to(Position::new_game());
    }

    /// Starts over from `position`, emptying the action log.
    pub fn reset_to(&mut self, position: Position) {
        self.position = position;
        self.log.clear();
        self.set_state(GameState::Playing);
    }

    fn validate(&self, mv: Move) -> GameResult<()> {
        if self.state != GameState::Playing {
            return Err(GameError::GameNotPlaying(self.state));
        }
        let side_to_move = self.position.side_to_move;
        match self.position.piece_at(mv.from) {
            None => return Err(GameError::EmptySquare(mv.from)),
            Some(record) if record.owner != side_to_move => {
                return Err(GameError::NotSideToMove {
                    square: mv.from,
                    side_to_move,
                });
            }
            Some(_) => {}
        }
        if !legal_moves(&self.position, side_to_move).contains(&mv) {
            return Err(GameError::IllegalMove(mv));
        }
        Ok(())
    }

    fn transition(&mut self, from: GameState, to: GameState) -> GameResult<()> {
        if self.state != from {
            return Err(GameError::InvalidStateTransition {
                from: self.state,
                to,
            });
        }
        self.set_state(to);
        Ok(())
    }

    fn set_state(&mut self, state: GameState) {
        debug!(from = ?self.state, to = ?state, "game state changed");
        self.state = state;
        self.publish(&[GameEvent::GameStateChanged(state)]);
    }

    fn publish(&mut self, events: &[GameEvent]) {
        // Drop subscribers whose receiver has gone away.
        self.subscribers
            .retain(|sender| events.iter().all(|event| sender.send(event.clone()).is_ok()));
    }
}
