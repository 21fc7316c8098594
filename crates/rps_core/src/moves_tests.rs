use super::*;

#[test]
fn test_beats_is_antisymmetric_for_distinct_moves() {
    for a in Move::ALL {
        for b in Move::ALL {
            if a == b {
                continue;
            }
            assert_ne!(a.beats(b), b.beats(a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_no_move_beats_itself() {
    for m in Move::ALL {
        assert!(!m.beats(m));
    }
}

#[test]
fn test_win_rule_cycle() {
    assert!(Move::Rock.beats(Move::Scissors));
    assert!(Move::Scissors.beats(Move::Paper));
    assert!(Move::Paper.beats(Move::Rock));

    assert!(!Move::Scissors.beats(Move::Rock));
    assert!(!Move::Paper.beats(Move::Scissors));
    assert!(!Move::Rock.beats(Move::Paper));
}

#[test]
fn test_cycle_successor_visits_all_moves() {
    assert_eq!(Move::Rock.next_in_cycle(), Move::Paper);
    assert_eq!(Move::Paper.next_in_cycle(), Move::Scissors);
    assert_eq!(Move::Scissors.next_in_cycle(), Move::Rock);
}

#[test]
fn test_parse_normalizes_case_and_whitespace() {
    assert_eq!(Move::parse("rock"), Some(Move::Rock));
    assert_eq!(Move::parse("  Paper \n"), Some(Move::Paper));
    assert_eq!(Move::parse("SCISSORS"), Some(Move::Scissors));
}

#[test]
fn test_parse_rejects_anything_else() {
    assert_eq!(Move::parse(""), None);
    assert_eq!(Move::parse("lizard"), None);
    assert_eq!(Move::parse("rock paper"), None);
}

#[test]
fn test_display_round_trips_through_parse() {
    for m in Move::ALL {
        assert_eq!(Move::parse(&m.to_string()), Some(m));
    }
}
