//! The computer opponent.
//!
//! [`Difficulty`] picks an engine for a level, [`Opponent`] asks it for a
//! move, and [`SearchWorker`] does the same on a background thread.

pub mod difficulty;
pub mod error;
pub mod worker;

pub use difficulty::{Difficulty, Opponent};
pub use error::WorkerError;
pub use worker::{MoveReply, MoveRequest, SearchWorker};

use chess_core::{Color, Move, Position};

/// One-shot move choice on the calling thread, for callers that do not keep
/// an [`Opponent`] around.
pub fn choose_move(
    pos: &Position,
    color: Color,
    difficulty: Difficulty,
    history: &[u64],
) -> Option<Move> {
    Opponent::new(difficulty).choose(pos, color, history).best_move
}
