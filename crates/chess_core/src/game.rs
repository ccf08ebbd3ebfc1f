//! Game history and terminal-state detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    attacks,
    board::Position,
    error::{ChessError, Result},
    movegen::{legal_moves, legal_moves_from},
    notation::{move_to_coord, resolve},
    types::*,
};

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawRepetition,
    DrawFiftyMove,
    DrawInsufficientMaterial,
}

impl GameStatus {
    /// True once no further moves may be played.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawRepetition
                | GameStatus::DrawFiftyMove
                | GameStatus::DrawInsufficientMaterial
        )
    }
}

/// Classifies `pos` seen `repetitions` times so far (1 for a fresh position).
///
/// Having no legal move outranks every draw rule, so a mate delivered on the
/// hundredth half-move is still a mate.
pub fn classify_with_repetitions(pos: &Position, repetitions: usize) -> GameStatus {
    let in_check = attacks::in_check(pos, pos.side_to_move);
    if legal_moves(pos).is_empty() {
        return if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }
    if repetitions >= 3 {
        GameStatus::DrawRepetition
    } else if pos.is_fifty_move_draw() {
        GameStatus::DrawFiftyMove
    } else if pos.is_insufficient_material() {
        GameStatus::DrawInsufficientMaterial
    } else if in_check {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}

/// Classifies a lone position with no history behind it.
pub fn classify(pos: &Position) -> GameStatus {
    classify_with_repetitions(pos, 1)
}

/// The authoritative game: current position plus the key of every position
/// reached so far, for repetition counting.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: Vec<u64>,
    moves: Vec<(Move, Position)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        let history = vec![position.repetition_key()];
        Game {
            position,
            history,
            moves: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Repetition keys of every position so far, oldest first, current last.
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    /// Moves played so far, in order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().map(|(mv, _)| *mv)
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// Legal moves of the piece on `sq`, if it belongs to the side to move.
    pub fn legal_moves_from(&self, sq: u8) -> Vec<Move> {
        match self.position.piece_at(sq) {
            Some(pc) if pc.color == self.position.side_to_move => {
                legal_moves_from(&self.position, sq)
            }
            _ => Vec::new(),
        }
    }

    /// How many times the current position has occurred.
    pub fn repetitions(&self) -> usize {
        let current = self.position.repetition_key();
        self.history.iter().filter(|&&k| k == current).count()
    }

    pub fn status(&self) -> GameStatus {
        classify_with_repetitions(&self.position, self.repetitions())
    }

    /// Plays `mv` if it is legal here.
    ///
    /// `mv` only needs the right from/to squares and promotion choice; it is
    /// replaced by the generator's fully-tagged move before being applied.
    pub fn play(&mut self, mv: Move) -> Result<Move> {
        let resolved = resolve(&self.position, mv.from, mv.to, mv.promotion()).ok_or_else(|| {
            ChessError::InvalidMove {
                mv: move_to_coord(mv),
            }
        })?;

        let before = self.position.clone();
        self.position.make_move(resolved);
        self.history.push(self.position.repetition_key());
        self.moves.push((resolved, before));
        debug!(mv = %move_to_coord(resolved), status = ?self.status(), "move played");
        Ok(resolved)
    }

    /// Parses coordinate text such as `e2e4` and plays it.
    pub fn play_coord(&mut self, txt: &str) -> Result<Move> {
        let mv = crate::notation::parse_coord_move(&self.position, txt)?;
        self.play(mv)
    }

    /// Takes back the last move. Returns it, or None at the start of the game.
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, before) = self.moves.pop()?;
        self.history.pop();
        self.position = before;
        Some(mv)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
