//! The move domain and the win rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three playable moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// The full move domain, in cycle order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns true iff `self` defeats `other`.
    ///
    /// Exactly one of `a.beats(b)` / `b.beats(a)` holds for distinct moves;
    /// equal moves tie and neither holds.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    /// The next move in the rock -> paper -> scissors -> rock cycle.
    pub fn next_in_cycle(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Parse user text into a move, normalizing case and whitespace.
    pub fn parse(txt: &str) -> Option<Move> {
        match txt.trim().to_lowercase().as_str() {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
