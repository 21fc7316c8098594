//! Elo rating tracking for strategies across series.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::session::SeriesResult;

/// Rating assigned to a strategy the board has not seen yet.
pub const DEFAULT_ELO: f64 = 1500.0;

/// Rating swing per match at maximum surprise.
pub const K_FACTOR: f64 = 32.0;

/// Persistent Elo standings for the strategy roster.
///
/// Keys are the roster spec strings (`mirror`, `fixed:rock`, ...), so the
/// same strategy accumulates rating across separate `sim` runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub ratings: HashMap<String, f64>,
    pub matches_played: HashMap<String, u32>,
    pub history: Vec<SeriesRecord>,
}

/// One finished series as the board saw it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub one: String,
    pub two: String,
    pub result: SeriesResult,
    /// Unix seconds at record time.
    pub timestamp: String,
    /// Rating points that moved from `two` to `one` (negative if the
    /// series went the other way).
    pub elo_change: f64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the scoreboard from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save the scoreboard to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Current rating for a strategy, [`DEFAULT_ELO`] if unseen.
    pub fn rating(&self, strategy: &str) -> f64 {
        self.ratings.get(strategy).copied().unwrap_or(DEFAULT_ELO)
    }

    /// Expected series score for `one` against `two` on the logistic
    /// Elo curve; 0.5 when their ratings are level.
    pub fn expected_score(&self, one: &str, two: &str) -> f64 {
        let gap = self.rating(two) - self.rating(one);
        1.0 / (1.0 + 10.0_f64.powf(gap / 400.0))
    }

    /// Fold a finished series into the standings.
    ///
    /// The swing scales with how far the series landed from expectation,
    /// K points per match; the two sides move by the same amount in
    /// opposite directions.
    pub fn update_ratings(&mut self, one: &str, two: &str, result: &SeriesResult) {
        let surprise = result.score() - self.expected_score(one, two);
        let swing = K_FACTOR * result.total_matches() as f64 * surprise;

        let new_one = self.rating(one) + swing;
        let new_two = self.rating(two) - swing;
        self.ratings.insert(one.to_string(), new_one);
        self.ratings.insert(two.to_string(), new_two);

        for name in [one, two] {
            *self.matches_played.entry(name.to_string()).or_insert(0) +=
                result.total_matches();
        }

        self.history.push(SeriesRecord {
            one: one.to_string(),
            two: two.to_string(),
            result: result.clone(),
            timestamp: unix_timestamp(),
            elo_change: swing,
        });
    }

    /// Standings sorted best-first: (strategy, rating, matches played).
    pub fn standings(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                (
                    name.clone(),
                    rating,
                    self.matches_played.get(name).copied().unwrap_or(0),
                )
            })
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Print the standings to stdout
    pub fn print_leaderboard(&self) {
        if self.ratings.is_empty() {
            println!("\nNo rated strategies yet.\n");
            return;
        }

        println!("\n=== Standings ===");
        for (rank, (name, rating, matches)) in self.standings().iter().enumerate() {
            println!(
                "{:>2}. {:<16} {:7.1}  ({} matches)",
                rank + 1,
                name,
                rating,
                matches
            );
        }
        println!();
    }
}

/// Simple timestamp without external dependency
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}

#[cfg(test)]
#[path = "scoreboard_tests.rs"]
mod scoreboard_tests;
