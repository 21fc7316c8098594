use super::*;

#[test]
fn test_every_roster_spec_builds() {
    for spec in BOT_SPECS {
        let strategy = create_strategy(spec);
        assert!(strategy.is_ok(), "spec {spec} failed to build");
    }
}

#[test]
fn test_fixed_spec_takes_a_move_qualifier() {
    let mut strategy = create_strategy("fixed:paper").unwrap();
    assert_eq!(strategy.select_move(), Move::Paper);
    assert_eq!(strategy.name(), "fixed:paper");
}

#[test]
fn test_bare_fixed_spec_defaults_to_rock() {
    let mut strategy = create_strategy("fixed").unwrap();
    assert_eq!(strategy.select_move(), Move::Rock);
}

#[test]
fn test_specs_are_case_insensitive() {
    assert!(create_strategy("Mirror").is_ok());
    assert!(create_strategy("CYCLE").is_ok());
}

#[test]
fn test_unknown_specs_are_rejected() {
    assert!(create_strategy("lizard").is_err());
    assert!(create_strategy("fixed:lizard").is_err());
    assert!(create_strategy("").is_err());
}

#[test]
fn test_random_opponent_comes_from_the_roster() {
    for _ in 0..20 {
        assert!(BOT_SPECS.contains(&random_opponent_spec()));
    }
}
