//! Plays a series of games between two difficulty levels.

use chess_core::{Game, move_to_coord};
use opponent::{Difficulty, SearchWorker, WorkerError};
use tracing::{debug, info, warn};

use crate::config::SelfPlayConfig;
use crate::results::{EndReason, GameRecord, GameResult, MatchSummary};

/// Runs matches between two levels, asking a single worker for every move.
pub struct MatchRunner {
    config: SelfPlayConfig,
}

impl MatchRunner {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Plays every configured game.
    pub fn run(&self) -> Result<MatchSummary, WorkerError> {
        let mut worker = SearchWorker::spawn(self.config.seed)?;
        let mut summary = MatchSummary::new(self.config.clone());

        for index in 0..self.config.games {
            let (white, black) = self.config.levels_for_game(index);
            let record = self.play_game(&mut worker, white, black)?;
            let first_is_white = !(self.config.alternate_colors && index % 2 == 1);

            info!(
                game = index + 1,
                of = self.config.games,
                %white,
                %black,
                result = record.result.as_score(),
                plies = record.moves.len(),
                "game finished"
            );
            summary.add_game(record, first_is_white);
        }

        Ok(summary)
    }

    /// Plays one game from the initial position.
    pub fn play_game(
        &self,
        worker: &mut SearchWorker,
        white: Difficulty,
        black: Difficulty,
    ) -> Result<GameRecord, WorkerError> {
        let mut game = Game::new();
        let mut moves = Vec::new();

        let (result, reason) = loop {
            let status = game.status();
            if let Some(result) = GameResult::from_status(status, game.side_to_move()) {
                break (result, EndReason::Status(status));
            }
            if moves.len() as u32 >= self.config.max_plies {
                break (GameResult::Draw, EndReason::PlyLimit);
            }

            let mover = game.side_to_move();
            let level = if mover == chess_core::Color::White {
                white
            } else {
                black
            };
            let reply = worker.request_move(game.position(), mover, level, game.history())?;

            let Some(mv) = reply.best_move else {
                // The status check above rules this out for a sound engine.
                warn!(?mover, %level, "no move returned in a live position");
                break (GameResult::Draw, EndReason::Status(status));
            };
            match game.play(mv) {
                Ok(played) => {
                    debug!(ply = moves.len() + 1, mv = %move_to_coord(played), "ply");
                    moves.push(move_to_coord(played));
                }
                Err(e) => {
                    warn!(error = %e, "worker returned an unplayable move");
                    break (GameResult::Draw, EndReason::Status(status));
                }
            }
        };

        debug!("final position:\n{}", game.position().board);

        Ok(GameRecord {
            white,
            black,
            result,
            reason,
            moves,
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
