//! Core rules and match engine for rock-paper-scissors.
//!
//! This crate holds everything that is independent of any particular
//! opponent or user interface:
//! - The [`Move`] domain and the `beats` win rule
//! - The [`Strategy`] trait implemented by all players
//! - The [`Game`] match engine (three rounds minimum, then sudden death)
//!
//! The engine performs no I/O and prints nothing; interactive shells drive
//! [`Game::play_round`] themselves when they want per-round reporting.

pub mod game;
pub mod moves;

pub use game::*;
pub use moves::*;

// =============================================================================
// Strategy trait — implemented by all players (fixed, random, mirror, ...)
// =============================================================================

/// Trait that all move-selection strategies implement.
///
/// This allows swapping between scripted opponents, adaptive opponents,
/// and a human at a terminal without the match engine caring which is which.
pub trait Strategy {
    /// Choose the next move to play.
    ///
    /// Must return a move from the fixed three-move domain. Deterministic
    /// strategies return the same move on repeated calls until the next
    /// `observe`; only `observe` advances their state.
    fn select_move(&mut self) -> Move;

    /// Round feedback: the move this strategy played and the opponent's.
    ///
    /// The engine calls this on both players after every round, in order,
    /// with no gaps. Stateless strategies ignore it.
    fn observe(&mut self, _own: Move, _opponent: Move) {}

    /// Returns the strategy's display name for reports and the scoreboard.
    fn name(&self) -> &str;
}
