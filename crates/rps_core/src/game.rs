//! The match engine: round resolution, scoring, and termination.

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::Strategy;

/// Rounds every match plays before the score can decide it.
pub const MIN_ROUNDS: u32 = 3;

/// Which side of the match a player is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

/// How a single round resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerOne,
    PlayerTwo,
    Tie,
}

/// Record of one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    pub move_one: Move,
    pub move_two: Move,
    pub outcome: RoundOutcome,
}

/// Final state of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    pub score_one: u32,
    pub score_two: u32,
    /// Total rounds played, sudden death included.
    pub rounds: u32,
    /// `None` only if queried while the match is still tied; a finished
    /// match always has a strict winner.
    pub winner: Option<PlayerId>,
}

/// A match between two strategies.
///
/// The game owns both strategies for its whole lifetime. Scores start at
/// zero and at most one increments per round. After [`Game::play`] returns
/// the game is finished history; there is no reset.
pub struct Game {
    player_one: Box<dyn Strategy>,
    player_two: Box<dyn Strategy>,
    score_one: u32,
    score_two: u32,
    rounds_played: u32,
}

impl Game {
    pub fn new(player_one: Box<dyn Strategy>, player_two: Box<dyn Strategy>) -> Self {
        Self {
            player_one,
            player_two,
            score_one: 0,
            score_two: 0,
            rounds_played: 0,
        }
    }

    /// Play one round: collect both moves, score the winner, and give both
    /// strategies their feedback.
    ///
    /// Player one always selects first. Ordering does not affect the game
    /// rules, but an interactive strategy blocks here until it has input,
    /// so the order has to be consistent.
    pub fn play_round(&mut self) -> RoundReport {
        let move_one = self.player_one.select_move();
        let move_two = self.player_two.select_move();

        let outcome = if move_one.beats(move_two) {
            self.score_one += 1;
            RoundOutcome::PlayerOne
        } else if move_two.beats(move_one) {
            self.score_two += 1;
            RoundOutcome::PlayerTwo
        } else {
            RoundOutcome::Tie
        };

        // Both feedback calls complete before the round is considered done.
        self.player_one.observe(move_one, move_two);
        self.player_two.observe(move_two, move_one);

        self.rounds_played += 1;

        RoundReport {
            round: self.rounds_played,
            move_one,
            move_two,
            outcome,
        }
    }

    /// True once the minimum round count is in and the score is strict.
    pub fn is_decided(&self) -> bool {
        self.rounds_played >= MIN_ROUNDS && self.score_one != self.score_two
    }

    /// Whether the match has entered sudden death (minimum rounds played,
    /// score still level).
    pub fn in_sudden_death(&self) -> bool {
        self.rounds_played >= MIN_ROUNDS && self.score_one == self.score_two
    }

    /// The current leader, or `None` while the score is level.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.score_one > self.score_two {
            Some(PlayerId::One)
        } else if self.score_two > self.score_one {
            Some(PlayerId::Two)
        } else {
            None
        }
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.score_one, self.score_two)
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn player_one_name(&self) -> &str {
        self.player_one.name()
    }

    pub fn player_two_name(&self) -> &str {
        self.player_two.name()
    }

    /// Snapshot of the score as a [`FinalResult`].
    pub fn result(&self) -> FinalResult {
        FinalResult {
            score_one: self.score_one,
            score_two: self.score_two,
            rounds: self.rounds_played,
            winner: self.winner(),
        }
    }

    /// Run the match to completion: three rounds, then one sudden-death
    /// round at a time while the score is level.
    ///
    /// There is no upper bound on sudden death. Two strategies that tie
    /// every round (two identical fixed players, say) never finish; callers
    /// that cannot tolerate that must bound the loop themselves via
    /// [`Game::play_round`] and [`Game::is_decided`].
    pub fn play(&mut self) -> FinalResult {
        while self.rounds_played < MIN_ROUNDS {
            self.play_round();
        }
        while !self.is_decided() {
            self.play_round();
        }
        self.result()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
