//! Background search worker.
//!
//! The search runs on its own thread over a copy of the position and hands
//! back a plain [`SearchOutcome`]; it never touches the live game. Callers
//! poll or block on the handle, then submit the move through the controller
//! like any other actor.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, TryRecvError};

use crate::errors::{SearchError, SearchResult};
use crate::game_state::position::Position;
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{MinimaxSearch, SearchOutcome};

pub struct SearchHandle {
    receiver: Receiver<SearchResult<SearchOutcome>>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

/// Starts `search` on a worker thread.
pub fn spawn_search<S>(search: MinimaxSearch<S>, position: Position) -> SearchHandle
where
    S: BoardScorer + 'static,
{
    let (sender, receiver) = bounded(1);
    let stop = Arc::new(AtomicBool::new(false));
    let worker_stop = Arc::clone(&stop);

    let worker = thread::spawn(move || {
        let result = search.best_move_until(&position, &worker_stop);
        // The handle may already be gone; nobody is left to tell.
        let _ = sender.send(result);
    });

    SearchHandle {
        receiver,
        stop,
        worker: Some(worker),
    }
}

impl SearchHandle {
    /// Non-blocking poll. `None` while the worker is still searching. The
    /// result is delivered once; polling again afterwards reports
    /// [`SearchError::WorkerDisconnected`].
    pub fn try_result(&self) -> Option<SearchResult<SearchOutcome>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(SearchError::WorkerDisconnected)),
        }
    }

    /// Blocks until the worker finishes.
    pub fn wait(mut self) -> SearchResult<SearchOutcome> {
        let result = self
            .receiver
            .recv()
            .unwrap_or(Err(SearchError::WorkerDisconnected));
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                return Err(SearchError::WorkerDisconnected);
            }
        }
        result
    }

    /// Asks the worker to stop before its next root move.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
