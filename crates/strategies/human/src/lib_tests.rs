use super::*;
use std::io::Cursor;

fn strategy_over(input: &str) -> HumanStrategy<Cursor<Vec<u8>>, Vec<u8>> {
    HumanStrategy::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn human_strategy_parses_a_valid_move() {
    let mut strategy = strategy_over("rock\n");
    assert_eq!(strategy.select_move(), Move::Rock);
}

#[test]
fn human_strategy_normalizes_case_and_whitespace() {
    let mut strategy = strategy_over("  PaPeR  \n");
    assert_eq!(strategy.select_move(), Move::Paper);
}

#[test]
fn human_strategy_reprompts_until_input_is_valid() {
    let mut strategy = strategy_over("lizard\n\nrok\nscissors\n");
    assert_eq!(strategy.select_move(), Move::Scissors);

    // One prompt per attempt, four attempts.
    let written = String::from_utf8(strategy.output).unwrap();
    assert_eq!(written.matches(PROMPT).count(), 4);
}

#[test]
fn human_strategy_reads_one_move_per_round() {
    let mut strategy = strategy_over("rock\npaper\n");
    assert_eq!(strategy.select_move(), Move::Rock);
    assert_eq!(strategy.select_move(), Move::Paper);
}

#[test]
#[should_panic(expected = "input closed")]
fn human_strategy_panics_on_eof() {
    let mut strategy = strategy_over("");
    strategy.select_move();
}
