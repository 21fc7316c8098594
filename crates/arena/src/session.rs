//! Series runner for playing unattended matches between bot strategies.

use rps_core::{Game, PlayerId, Strategy};
use serde::{Deserialize, Serialize};

/// Configuration for a series of matches
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Number of matches to play
    pub num_matches: u32,
    /// Abandonment bound on rounds per match. The engine's sudden death is
    /// unbounded, and two deadlocked bots (fixed vs the same fixed) would
    /// hang an unattended series without this.
    pub max_rounds: u32,
    /// Print progress during the series
    pub verbose: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            num_matches: 10,
            max_rounds: 1000,
            verbose: true,
        }
    }
}

/// Tally for a series, from player one's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesResult {
    pub wins_one: u32,
    pub wins_two: u32,
    /// Matches still tied at the round bound.
    pub unresolved: u32,
}

impl SeriesResult {
    pub fn total_matches(&self) -> u32 {
        self.wins_one + self.wins_two + self.unresolved
    }

    /// Score for player one (1 per win, 0.5 per unresolved match).
    pub fn score(&self) -> f64 {
        let total = self.total_matches() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins_one as f64 + 0.5 * self.unresolved as f64) / total
    }
}

/// Runs series of matches between two strategies
pub struct SeriesRunner {
    config: SeriesConfig,
}

impl SeriesRunner {
    pub fn new(config: SeriesConfig) -> Self {
        Self { config }
    }

    /// Run a series between two strategy factories.
    ///
    /// Each match gets freshly built strategies; a finished match is
    /// history and strategies are never reset or reused.
    pub fn run_series<F1, F2>(&self, mut make_one: F1, mut make_two: F2) -> SeriesResult
    where
        F1: FnMut() -> Box<dyn Strategy>,
        F2: FnMut() -> Box<dyn Strategy>,
    {
        let mut result = SeriesResult::default();

        for match_num in 0..self.config.num_matches {
            let mut game = Game::new(make_one(), make_two());

            while !game.is_decided() && game.rounds_played() < self.config.max_rounds {
                game.play_round();
            }

            let outcome = if game.is_decided() {
                match game.winner() {
                    Some(PlayerId::One) => {
                        result.wins_one += 1;
                        "1-0"
                    }
                    _ => {
                        result.wins_two += 1;
                        "0-1"
                    }
                }
            } else {
                result.unresolved += 1;
                "abandoned"
            };

            if self.config.verbose {
                let (s1, s2) = game.scores();
                println!(
                    "Match {}/{}: {} in {} rounds ({}-{}) - Series: {}-{}-{}",
                    match_num + 1,
                    self.config.num_matches,
                    outcome,
                    game.rounds_played(),
                    s1,
                    s2,
                    result.wins_one,
                    result.wins_two,
                    result.unresolved
                );
            }
        }

        result
    }
}

/// Quick utility to run a single series
pub fn quick_series<F1, F2>(make_one: F1, make_two: F2, num_matches: u32) -> SeriesResult
where
    F1: FnMut() -> Box<dyn Strategy>,
    F2: FnMut() -> Box<dyn Strategy>,
{
    let config = SeriesConfig {
        num_matches,
        verbose: false,
        ..Default::default()
    };
    let runner = SeriesRunner::new(config);
    runner.run_series(make_one, make_two)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
