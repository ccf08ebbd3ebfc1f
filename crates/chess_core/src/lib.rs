pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use attacks::{in_check, is_square_attacked};
pub use board::*;
pub use error::ChessError;
pub use game::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use types::*;
pub use zobrist::{ZOBRIST, repetition_key};

// =============================================================================
// Engine trait, implemented by every move chooser (search, heuristics, random)
// =============================================================================

/// What a caller allows a single move choice to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Repetition keys of the game so far, oldest first, ending with the
    /// position being searched. Empty when the position has no history.
    pub history: Vec<u64>,
}

impl SearchLimits {
    /// Limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            history: Vec::new(),
        }
    }

    /// Lets the search see positions already reached in the game.
    pub fn with_history(mut self, history: &[u64]) -> Self {
        self.history = history.to_vec();
        self
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns, positive when White is better
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a position with nothing to play.
    pub fn no_move(score: i32) -> Self {
        Self {
            best_move: None,
            score,
            depth: 0,
            nodes: 1,
        }
    }
}

/// Trait that all move choosers implement, so the opponent policy can swap a
/// random mover for a full search without the caller noticing.
pub trait Engine: Send {
    /// Picks a move for the side to move in `pos`.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Short display name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "chess-ai"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
