//! Self-play harness
//!
//! Plays computer opponents of two difficulty levels against each other and
//! tallies the results. Handy for checking that a stronger level really is
//! stronger, and as a long-running smoke test of the rules and the worker.
//!
//! # Usage
//!
//! ```bash
//! # Level 4 against level 2, ten games, colours alternating
//! cargo run -p selfplay -- --white 4 --black 2 --games 10
//!
//! # Settings from a file, results written as JSON
//! cargo run -p selfplay -- --config selfplay.toml --output results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
