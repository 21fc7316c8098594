//! End-to-end matches between real strategies through the match engine.

use cycle_strategy::CycleStrategy;
use fixed_strategy::FixedStrategy;
use mirror_strategy::MirrorStrategy;
use rps_core::{Game, Move, PlayerId, RoundOutcome, Strategy, MIN_ROUNDS};

#[test]
fn cycle_vs_fixed_rock_breaks_its_tie_in_sudden_death() {
    // Round 1: rock vs rock ties. Round 2: paper beats rock. Round 3:
    // scissors loses to rock. 1-1 after the minimum rounds.
    let mut game = Game::new(
        Box::new(CycleStrategy::new()),
        Box::new(FixedStrategy::new(Move::Rock)),
    );

    for _ in 0..MIN_ROUNDS {
        game.play_round();
    }

    assert_eq!(game.scores(), (1, 1));
    assert!(game.in_sudden_death());

    // Sudden death: round 4 ties again (rock vs rock), round 5 is paper
    // vs rock and breaks the tie the moment the score moves.
    let result = game.play();

    assert_eq!(result.rounds, 5);
    assert_eq!((result.score_one, result.score_two), (2, 1));
    assert_eq!(result.winner, Some(PlayerId::One));
}

#[test]
fn cycle_vs_any_fixed_opponent_levels_every_three_rounds() {
    // Each pass through the cycle scores one win, one loss, one tie
    // against any constant move.
    for fixed in Move::ALL {
        let mut game = Game::new(
            Box::new(CycleStrategy::new()),
            Box::new(FixedStrategy::new(fixed)),
        );

        for _ in 0..MIN_ROUNDS {
            game.play_round();
        }

        assert_eq!(game.scores(), (1, 1), "cycle vs fixed:{fixed}");
        assert!(game.in_sudden_death());
    }
}

#[test]
fn mirror_locks_onto_a_fixed_opponent() {
    // Feed the mirror one round of history so its random opening is out
    // of the picture: it now reflects scissors from round 1 on.
    let mut mirror = MirrorStrategy::new();
    let opening = mirror.select_move();
    mirror.observe(opening, Move::Scissors);

    let mut game = Game::new(
        Box::new(mirror),
        Box::new(FixedStrategy::new(Move::Scissors)),
    );

    for _ in 0..20 {
        let report = game.play_round();
        assert_eq!(report.move_one, Move::Scissors);
        assert_eq!(report.move_two, Move::Scissors);
        assert_eq!(report.outcome, RoundOutcome::Tie);
    }

    assert_eq!(game.scores(), (0, 0));
    assert!(!game.is_decided());
}

#[test]
fn fixed_mismatch_is_decided_in_three_rounds() {
    let mut game = Game::new(
        Box::new(FixedStrategy::new(Move::Scissors)),
        Box::new(FixedStrategy::new(Move::Paper)),
    );

    let result = game.play();

    assert_eq!(result.rounds, MIN_ROUNDS);
    assert_eq!(result.winner, Some(PlayerId::One));
    assert_eq!((result.score_one, result.score_two), (3, 0));
}
