//! Error types for the rules engine.
//!
//! Most "errors" in chess are just moves missing from the legal list; these
//! variants cover the few places a caller hands the core something it cannot
//! use.

use thiserror::Error;

/// Errors returned by the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not in the legal move list of the position it was played in.
    #[error("Invalid move: {mv}")]
    InvalidMove { mv: String },

    /// Position setup text could not be parsed.
    #[error("Invalid FEN: {reason}")]
    InvalidFen { reason: String },

    /// A square name such as `e4` could not be parsed.
    #[error("Invalid square: {text}")]
    InvalidSquare { text: String },

    /// Coordinate move text such as `e2e4` could not be parsed.
    #[error("Invalid move text: {text}")]
    InvalidMoveText { text: String },
}

impl ChessError {
    pub(crate) fn fen(reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            reason: reason.into(),
        }
    }
}

/// Result type alias for rules engine operations
pub type Result<T> = std::result::Result<T, ChessError>;
