//! Arena CLI
//!
//! Play against a bot at the terminal, or run bot-vs-bot series and track
//! Elo ratings.

use arena::{create_strategy, random_opponent_spec, Scoreboard, SeriesConfig, SeriesRunner};
use human_strategy::HumanStrategy;
use rps_core::{Game, PlayerId, RoundOutcome, MIN_ROUNDS};
use std::env;
use std::io;

const SCOREBOARD_FILE: &str = "arena_elo.json";

fn print_usage() {
    println!("RPS Arena Runner");
    println!();
    println!("Usage:");
    println!("  arena play [opponent]");
    println!("  arena sim <one> <two> [--matches N] [--max-rounds R]");
    println!("  arena leaderboard");
    println!();
    println!("Strategies:");
    println!("  fixed         - always plays rock");
    println!("  fixed:MOVE    - always plays MOVE (rock, paper, or scissors)");
    println!("  random        - uniformly random move each round");
    println!("  mirror        - replays your previous move");
    println!("  cycle         - walks rock -> paper -> scissors");
    println!();
    println!("Examples:");
    println!("  arena play mirror");
    println!("  arena sim cycle fixed:rock --matches 100");
}

fn run_play(args: &[String]) {
    let opponent_spec = match args.first() {
        Some(spec) => spec.clone(),
        None => random_opponent_spec().to_string(),
    };

    let opponent = match create_strategy(&opponent_spec) {
        Ok(strategy) => strategy,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            return;
        }
    };

    println!("=== Match: you vs {opponent_spec} ===");
    println!("First to lead after {MIN_ROUNDS} rounds wins. Game start!");
    println!();

    let human = HumanStrategy::new(io::stdin().lock(), io::stdout());
    let mut game = Game::new(Box::new(human), opponent);

    while !game.is_decided() {
        if game.in_sudden_death() {
            println!("Score is level - sudden death round!");
        } else {
            println!("Round {} of {}:", game.rounds_played() + 1, MIN_ROUNDS);
        }

        let report = game.play_round();
        println!(
            "You played {}, {} played {}",
            report.move_one, opponent_spec, report.move_two
        );
        match report.outcome {
            RoundOutcome::PlayerOne => println!("** YOU TAKE THE ROUND **"),
            RoundOutcome::PlayerTwo => println!("** {} TAKES THE ROUND **", opponent_spec),
            RoundOutcome::Tie => println!("** TIE **"),
        }

        let (you, them) = game.scores();
        println!("Score: you {you}, {opponent_spec} {them}");
        println!();
    }

    let result = game.result();
    println!("=== Final Score ===");
    println!(
        "you {} - {} {} ({} rounds)",
        result.score_one, result.score_two, opponent_spec, result.rounds
    );
    match result.winner {
        Some(PlayerId::One) => println!("** YOU ARE THE CHAMPION **"),
        _ => println!("** {} IS THE CHAMPION **", opponent_spec),
    }
}

fn run_sim(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: sim requires two strategy specifications");
        print_usage();
        return;
    }

    let one_spec = &args[0];
    let two_spec = &args[1];

    // Validate both specs before the series starts
    for spec in [one_spec, two_spec] {
        if let Err(e) = create_strategy(spec) {
            eprintln!("Error: {e}");
            print_usage();
            return;
        }
    }

    // Parse optional arguments
    let mut num_matches: u32 = 10;
    let mut max_rounds: u32 = 1000;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--matches" | "-m" => {
                if i + 1 < args.len() {
                    num_matches = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--max-rounds" | "-r" => {
                if i + 1 < args.len() {
                    max_rounds = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Series: {one_spec} vs {two_spec} ===");
    println!("Matches: {num_matches}, round bound: {max_rounds}");
    println!();

    let config = SeriesConfig {
        num_matches,
        max_rounds,
        verbose: true,
    };
    let runner = SeriesRunner::new(config);
    let result = runner.run_series(
        || create_strategy(one_spec).expect("spec validated above"),
        || create_strategy(two_spec).expect("spec validated above"),
    );

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} unresolved",
        one_spec, result.wins_one, result.wins_two, result.unresolved
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    // Update the scoreboard
    let mut board = Scoreboard::load(SCOREBOARD_FILE).unwrap_or_default();
    board.update_ratings(one_spec, two_spec, &result);
    board.print_leaderboard();

    if let Err(e) = board.save(SCOREBOARD_FILE) {
        eprintln!("Warning: Failed to save scoreboard: {e}");
    }
}

fn show_leaderboard() {
    match Scoreboard::load(SCOREBOARD_FILE) {
        Ok(board) => board.print_leaderboard(),
        Err(_) => {
            println!("No arena data found. Run some series first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "sim" => run_sim(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
