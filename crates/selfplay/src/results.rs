//! Game records, tallies and the JSON dump.

use std::path::Path;

use chess_core::{Color, GameStatus};
use opponent::Difficulty;
use serde::{Deserialize, Serialize};

use crate::config::SelfPlayConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// Result of a game that ended in `status`, None while it is still going.
    pub fn from_status(status: GameStatus, side_to_move: Color) -> Option<Self> {
        match status {
            GameStatus::Checkmate => Some(match side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }),
            s if s.is_draw() => Some(GameResult::Draw),
            _ => None,
        }
    }

    pub fn as_score(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The rules ended it
    Status(GameStatus),
    /// The ply cap was reached first
    PlyLimit,
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: Difficulty,
    pub black: Difficulty,
    pub result: GameResult,
    pub reason: EndReason,
    /// Moves in coordinate notation
    pub moves: Vec<String>,
}

/// Tally from the first configured level's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score of the first level (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Counts `result`, where the first level played White if `first_is_white`.
    pub fn record(&mut self, result: GameResult, first_is_white: bool) {
        match (result, first_is_white) {
            (GameResult::Draw, _) => self.draws += 1,
            (GameResult::WhiteWins, true) | (GameResult::BlackWins, false) => self.wins += 1,
            _ => self.losses += 1,
        }
    }
}

/// Everything a series of games produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub config: SelfPlayConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self {
            config,
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    /// Adds a finished game; `first_is_white` says which colour the first
    /// configured level had in it.
    pub fn add_game(&mut self, record: GameRecord, first_is_white: bool) {
        self.result.record(record.result, first_is_white);
        self.games.push(record);
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== {} vs {} ===\n\n",
            self.config.white_level, self.config.black_level
        ));
        report.push_str(&format!(
            "{:<4} {:<10} {:<10} {:<8} {:>6}  {}\n",
            "#", "White", "Black", "Result", "Plies", "Ended by"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let ended = match game.reason {
                EndReason::Status(status) => format!("{status:?}"),
                EndReason::PlyLimit => "ply limit".to_string(),
            };
            report.push_str(&format!(
                "{:<4} {:<10} {:<10} {:<8} {:>6}  {}\n",
                i + 1,
                game.white.to_string(),
                game.black.to_string(),
                game.result.as_score(),
                game.moves.len(),
                ended
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws ({:.1}%)\n",
            self.config.white_level,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }
}
