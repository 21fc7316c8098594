//! Mirror Strategy
//!
//! Plays whatever the opponent played last round. With no history yet, the
//! opening move is drawn uniformly at random; a fixed opening would hand
//! the opponent a guaranteed first round.

use rand::seq::SliceRandom;
use rand::thread_rng;
use rps_core::{Move, Strategy};


/// A strategy that reflects the opponent's previous move back at them.
#[derive(Debug, Clone)]
pub struct MirrorStrategy {
    next_move: Move,
}

impl MirrorStrategy {
    pub fn new() -> Self {
        let seed = *Move::ALL.choose(&mut thread_rng()).unwrap_or(&Move::Rock);
        Self { next_move: seed }
    }
}

impl Default for MirrorStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MirrorStrategy {
    fn select_move(&mut self) -> Move {
        self.next_move
    }

    fn observe(&mut self, _own: Move, opponent: Move) {
        self.next_move = opponent;
    }

    fn name(&self) -> &str {
        "mirror"
    }
}
