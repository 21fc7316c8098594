//! Random-Move Strategy
//!
//! Samples uniformly from the move domain each round. Any strategy with an
//! actual read on the opponent should beat this over a long series, which
//! makes it the baseline opponent for comparisons.

use rand::seq::SliceRandom;
use rand::thread_rng;
use rps_core::{Move, Strategy};

#[cfg(test)]
mod lib_tests;

/// A strategy that plays a uniformly random move every round.
///
/// Round feedback is ignored; past rounds carry no information here.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self) -> Move {
        // The domain is non-empty and fixed, so choose always succeeds.
        *Move::ALL
            .choose(&mut thread_rng())
            .unwrap_or(&Move::Rock)
    }

    fn name(&self) -> &str {
        "random"
    }
}
