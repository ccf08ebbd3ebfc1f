//! Difficulty levels and the engine each one plays with.
//!
//! | level | engine |
//! |---|---|
//! | 1 | uniform random move |
//! | 2 | random capture, else random move |
//! | 3 | most valuable capture, else the move nearest the centre |
//! | 4+ | minimax at depth `min(level, 5)` |

use std::fmt;

use chess_core::{Color, Engine, Position, SearchLimits, SearchResult};
use classical_engine::ClassicalEngine;
use heuristic_engine::{CaptureEngine, GreedyEngine, RandomEngine};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A difficulty level, 1 and up. Anything below 1 is treated as 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// First level that searches instead of using a one-ply heuristic.
    pub const FIRST_SEARCH_LEVEL: u8 = 4;
    /// Depth cap, so the top levels stay responsive.
    pub const MAX_SEARCH_DEPTH: u8 = 5;

    pub fn new(level: u8) -> Self {
        Self(level.max(1))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn uses_search(self) -> bool {
        self.0 >= Self::FIRST_SEARCH_LEVEL
    }

    /// Plies searched at this level. The heuristic levels look one ply.
    pub fn search_depth(self) -> u8 {
        if self.uses_search() {
            self.0.min(Self::MAX_SEARCH_DEPTH)
        } else {
            1
        }
    }

    /// Builds the engine for this level. `seed` makes the random levels
    /// reproducible; the others ignore it.
    pub fn engine(self, seed: Option<u64>) -> Box<dyn Engine> {
        match (self.0, seed) {
            (1, Some(s)) => Box::new(RandomEngine::with_seed(s)),
            (1, None) => Box::new(RandomEngine::new()),
            (2, Some(s)) => Box::new(CaptureEngine::with_seed(s)),
            (2, None) => Box::new(CaptureEngine::new()),
            (3, _) => Box::new(GreedyEngine::new()),
            _ => Box::new(ClassicalEngine::new()),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::FIRST_SEARCH_LEVEL)
    }
}

impl From<u8> for Difficulty {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}

/// A computer player: a difficulty and the engine that plays it.
pub struct Opponent {
    difficulty: Difficulty,
    engine: Box<dyn Engine>,
}

impl Opponent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            engine: difficulty.engine(None),
        }
    }

    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            engine: difficulty.engine(Some(seed)),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Chooses a move for `color` in `pos`.
    ///
    /// `history` holds the game's repetition keys ending with `pos`, and may
    /// be empty. If `color` is not the side to move, the choice is made as if
    /// it were, with no en-passant target. `best_move` is None when `color`
    /// has no legal move; the caller classifies that position itself.
    pub fn choose(&mut self, pos: &Position, color: Color, history: &[u64]) -> SearchResult {
        let limits = SearchLimits::depth(self.difficulty.search_depth());
        let result = if pos.side_to_move == color {
            self.engine.search(pos, limits.with_history(history))
        } else {
            let mut turned = pos.clone();
            turned.side_to_move = color;
            turned.en_passant = None;
            self.engine.search(&turned, limits)
        };
        debug!(
            difficulty = %self.difficulty,
            engine = self.engine.name(),
            found = result.best_move.is_some(),
            score = result.score,
            nodes = result.nodes,
            "opponent chose"
        );
        result
    }
}

impl fmt::Debug for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opponent")
            .field("difficulty", &self.difficulty)
            .field("engine", &self.engine.name())
            .finish()
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
