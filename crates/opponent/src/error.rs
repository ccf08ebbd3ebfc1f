//! Errors from talking to the move worker.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkerError {
    /// A request is already being searched; wait for its reply first.
    #[error("worker is busy with request {pending}")]
    Busy { pending: u64 },

    /// `recv` was called with nothing submitted.
    #[error("no request in flight")]
    Idle,

    /// The worker thread is gone (it panicked or was shut down).
    #[error("worker thread disconnected")]
    Disconnected,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(String),
}

pub type Result<T> = std::result::Result<T, WorkerError>;
