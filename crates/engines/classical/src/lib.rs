//! Classical Chess Engine
//!
//! Minimax search with alpha-beta pruning over a material, piece-square,
//! mobility and check evaluation. This is the engine behind the harder
//! difficulty levels.

mod eval;
mod search;

use chess_core::{Engine, Position, SearchLimits, SearchResult};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - White-maximizing minimax with alpha-beta pruning
/// - Captures-first move ordering
/// - Depth-biased mate scores, so shorter mates win
/// - 50-move rule, threefold repetition and insufficient material draws
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let outcome = search::pick_best_move(pos, pos.side_to_move, limits.depth, &limits.history);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: limits.depth.max(1),
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::{evaluate, square_bonus};
pub use search::{MATE_SCORE, SearchOutcome, best_move, order_moves, pick_best_move};

#[cfg(test)]
mod lib_tests;
