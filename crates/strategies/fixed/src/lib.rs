//! Fixed-Move Strategy
//!
//! Always plays one designated move. Useful for:
//! - A predictable baseline opponent (classic always-rock)
//! - Exercising the match engine in tests without randomness

use rps_core::{Move, Strategy};


/// A strategy that plays the same move every round.
///
/// Round feedback is ignored; there is nothing to learn.
#[derive(Debug, Clone)]
pub struct FixedStrategy {
    mv: Move,
    name: String,
}

impl FixedStrategy {
    pub fn new(mv: Move) -> Self {
        Self {
            mv,
            name: format!("fixed:{mv}"),
        }
    }
}

impl Default for FixedStrategy {
    fn default() -> Self {
        Self::new(Move::Rock)
    }
}

impl Strategy for FixedStrategy {
    fn select_move(&mut self) -> Move {
        self.mv
    }

    fn name(&self) -> &str {
        &self.name
    }
}
