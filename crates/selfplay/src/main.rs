//! Self-play CLI
//!
//! Plays two difficulty levels against each other and prints a report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use opponent::Difficulty;
use selfplay::{MatchRunner, SelfPlayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Play computer opponents against each other", long_about = None)]
struct Args {
    /// TOML file with default settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Level playing White in the first game
    #[arg(short, long)]
    white: Option<u8>,

    /// Level playing Black in the first game
    #[arg(short, long)]
    black: Option<u8>,

    /// Number of games
    #[arg(short, long)]
    games: Option<u32>,

    /// Half-moves before a game is scored as a draw
    #[arg(long)]
    max_plies: Option<u32>,

    /// Seed for the random levels
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the same colours every game
    #[arg(long)]
    no_alternate: bool,

    /// Write the games and tally here as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every move
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<(SelfPlayConfig, Option<PathBuf>)> {
        let mut cfg = match &self.config {
            Some(path) => SelfPlayConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SelfPlayConfig::default(),
        };
        if let Some(level) = self.white {
            cfg.white_level = Difficulty::new(level);
        }
        if let Some(level) = self.black {
            cfg.black_level = Difficulty::new(level);
        }
        if let Some(games) = self.games {
            cfg.games = games;
        }
        if let Some(plies) = self.max_plies {
            cfg.max_plies = plies;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.no_alternate {
            cfg.alternate_colors = false;
        }
        Ok((cfg, self.output))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (cfg, output) = args.into_config()?;
    info!(
        white = %cfg.white_level,
        black = %cfg.black_level,
        games = cfg.games,
        max_plies = cfg.max_plies,
        "starting self-play"
    );

    let summary = MatchRunner::new(cfg).run().context("self-play failed")?;
    println!("{}", summary.generate_report());

    if let Some(path) = output {
        summary
            .save(&path)
            .with_context(|| format!("writing results to {}", path.display()))?;
        info!(path = %path.display(), "results written");
    }

    Ok(())
}
