//! Strategy specs: the names the CLI accepts and how they map to strategies.

use cycle_strategy::CycleStrategy;
use fixed_strategy::FixedStrategy;
use mirror_strategy::MirrorStrategy;
use rand::seq::SliceRandom;
use rand::thread_rng;
use random_strategy::RandomStrategy;
use rps_core::{Move, Strategy};

/// The bot specs a match can be built from.
pub const BOT_SPECS: [&str; 4] = ["fixed", "random", "mirror", "cycle"];

/// Build a strategy from a spec string.
///
/// Accepted: `fixed` (rock), `fixed:<move>`, `random`, `mirror`, `cycle`.
pub fn create_strategy(spec: &str) -> Result<Box<dyn Strategy>, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "fixed" => {
            if parts.len() > 1 {
                let mv = Move::parse(parts[1])
                    .ok_or_else(|| format!("Unknown move in spec: {}", parts[1]))?;
                Ok(Box::new(FixedStrategy::new(mv)))
            } else {
                Ok(Box::new(FixedStrategy::default()))
            }
        }
        "random" => Ok(Box::new(RandomStrategy::new())),
        "mirror" => Ok(Box::new(MirrorStrategy::new())),
        "cycle" => Ok(Box::new(CycleStrategy::new())),
        _ => Err(format!("Unknown strategy: {spec}")),
    }
}

/// Draw a bot spec uniformly at random, for `play` without an opponent.
pub fn random_opponent_spec() -> &'static str {
    BOT_SPECS
        .choose(&mut thread_rng())
        .copied()
        .unwrap_or("random")
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
