//! Runs move choices on a dedicated thread so the caller's thread stays free.
//!
//! One request goes in, one reply comes out. A second request while the
//! first is still being searched is refused rather than queued, and a search
//! that has started always runs to completion.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use chess_core::{Color, Move, Position};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, unbounded};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::difficulty::{Difficulty, Opponent};
use crate::error::{Result, WorkerError};

/// Everything the worker needs to choose a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub id: u64,
    pub position: Position,
    pub color: Color,
    pub difficulty: Difficulty,
    /// Repetition keys of the game, ending with `position`
    pub history: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReply {
    /// Id of the request this answers
    pub id: u64,
    /// None when the side has no legal move
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Handle to the worker thread. Dropping it stops the thread once any
/// search in progress has finished.
pub struct SearchWorker {
    requests: Option<Sender<MoveRequest>>,
    replies: Receiver<MoveReply>,
    thread: Option<JoinHandle<()>>,
    pending: Option<u64>,
    next_id: u64,
}

impl SearchWorker {
    /// Starts the worker. With a seed, the random levels play the same
    /// moves every run.
    pub fn spawn(seed: Option<u64>) -> Result<Self> {
        let (request_tx, request_rx) = unbounded::<MoveRequest>();
        let (reply_tx, reply_rx) = unbounded::<MoveReply>();

        let thread = thread::Builder::new()
            .name("search-worker".into())
            .spawn(move || worker_loop(request_rx, reply_tx, seed))
            .map_err(|e| WorkerError::Spawn(e.to_string()))?;

        Ok(Self {
            requests: Some(request_tx),
            replies: reply_rx,
            thread: Some(thread),
            pending: None,
            next_id: 1,
        })
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Hands a position to the worker and returns the request id.
    pub fn submit(
        &mut self,
        position: &Position,
        color: Color,
        difficulty: Difficulty,
        history: &[u64],
    ) -> Result<u64> {
        if let Some(pending) = self.pending {
            return Err(WorkerError::Busy { pending });
        }
        let id = self.next_id;
        let request = MoveRequest {
            id,
            position: position.clone(),
            color,
            difficulty,
            history: history.to_vec(),
        };
        self.requests
            .as_ref()
            .ok_or(WorkerError::Disconnected)?
            .send(request)
            .map_err(|_| WorkerError::Disconnected)?;

        self.next_id += 1;
        self.pending = Some(id);
        Ok(id)
    }

    /// Blocks until the reply to the pending request arrives.
    pub fn recv(&mut self) -> Result<MoveReply> {
        if self.pending.is_none() {
            return Err(WorkerError::Idle);
        }
        let reply = self.replies.recv();
        self.pending = None;
        reply.map_err(|_| WorkerError::Disconnected)
    }

    /// The reply if it is ready, without blocking.
    pub fn try_recv(&mut self) -> Result<Option<MoveReply>> {
        if self.pending.is_none() {
            return Err(WorkerError::Idle);
        }
        match self.replies.try_recv() {
            Ok(reply) => {
                self.pending = None;
                Ok(Some(reply))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                Err(WorkerError::Disconnected)
            }
        }
    }

    /// Waits up to `timeout` for the reply. The search itself keeps running
    /// after a timeout; poll again later.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<Option<MoveReply>> {
        if self.pending.is_none() {
            return Err(WorkerError::Idle);
        }
        match self.replies.recv_timeout(timeout) {
            Ok(reply) => {
                self.pending = None;
                Ok(Some(reply))
            }
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                self.pending = None;
                Err(WorkerError::Disconnected)
            }
        }
    }

    /// Submits and waits: the blocking form of a single request.
    pub fn request_move(
        &mut self,
        position: &Position,
        color: Color,
        difficulty: Difficulty,
        history: &[u64],
    ) -> Result<MoveReply> {
        self.submit(position, color, difficulty, history)?;
        self.recv()
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the loop.
        self.requests.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("search worker panicked");
            }
        }
    }
}

fn worker_loop(requests: Receiver<MoveRequest>, replies: Sender<MoveReply>, seed: Option<u64>) {
    debug!("search worker started");
    let mut seeds = seed.map(StdRng::seed_from_u64);
    let mut opponent: Option<Opponent> = None;

    for req in requests.iter() {
        let reuse = opponent
            .as_ref()
            .is_some_and(|o| o.difficulty() == req.difficulty);
        if !reuse {
            opponent = Some(match seeds.as_mut() {
                Some(rng) => Opponent::seeded(req.difficulty, rng.r#gen()),
                None => Opponent::new(req.difficulty),
            });
        }
        let Some(opp) = opponent.as_mut() else {
            continue;
        };

        let result = opp.choose(&req.position, req.color, &req.history);
        let reply = MoveReply {
            id: req.id,
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
        };
        if replies.send(reply).is_err() {
            break;
        }
    }
    debug!("search worker stopped");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
