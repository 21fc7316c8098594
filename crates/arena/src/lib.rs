//! Arena Runner for rock-paper-scissors strategies
//!
//! This crate provides the shell around `rps_core`:
//! - Building strategies from command-line specs
//! - Running unattended bot-vs-bot series
//! - Tracking Elo ratings across series
//!
//! # Usage
//!
//! ```bash
//! # Play against a randomly drawn opponent
//! cargo run -p arena -- play
//!
//! # Run a 100-match series between two bots
//! cargo run -p arena -- sim mirror cycle --matches 100
//! ```

mod roster;
mod scoreboard;
mod session;

pub use roster::*;
pub use scoreboard::*;
pub use session::*;
