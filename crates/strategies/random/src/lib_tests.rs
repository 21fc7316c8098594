use super::*;

#[test]
fn random_strategy_stays_in_the_move_domain() {
    let mut strategy = RandomStrategy::new();

    for _ in 0..200 {
        let mv = strategy.select_move();
        assert!(Move::ALL.contains(&mv));
    }
}

#[test]
fn random_strategy_eventually_plays_every_move() {
    let mut strategy = RandomStrategy::new();
    let mut seen = [false; 3];

    // 200 uniform draws miss a given move with probability (2/3)^200;
    // treat that as never.
    for _ in 0..200 {
        match strategy.select_move() {
            Move::Rock => seen[0] = true,
            Move::Paper => seen[1] = true,
            Move::Scissors => seen[2] = true,
        }
    }

    assert_eq!(seen, [true, true, true]);
}

#[test]
fn random_strategy_ignores_feedback() {
    let mut strategy = RandomStrategy::new();

    strategy.observe(Move::Rock, Move::Paper);
    assert!(Move::ALL.contains(&strategy.select_move()));
}
