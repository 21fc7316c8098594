//! Cycle Strategy
//!
//! Walks the move cycle rock -> paper -> scissors -> rock, starting at rock.
//! The step is taken from its own last move, not the opponent's; the
//! sequence is generative and ignores what the opponent does.

use rps_core::{Move, Strategy};


/// A strategy that plays each move of the cycle in turn.
#[derive(Debug, Clone)]
pub struct CycleStrategy {
    next_move: Move,
}

impl CycleStrategy {
    pub fn new() -> Self {
        Self {
            next_move: Move::Rock,
        }
    }
}

impl Default for CycleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for CycleStrategy {
    fn select_move(&mut self) -> Move {
        self.next_move
    }

    fn observe(&mut self, own: Move, _opponent: Move) {
        self.next_move = own.next_in_cycle();
    }

    fn name(&self) -> &str {
        "cycle"
    }
}
