use std::io::Cursor;
use std::sync::Mutex;

use log::{Level as LogLevel, Log, Metadata, Record};

use crate::expression::Expression;
use crate::game::{
    Game, GameConfig, GameError, LOADING_STEP_DELAY, LOADING_STEPS, Level, Round, SilentTerminal,
    standard_rounds,
};

fn quiet_config() -> GameConfig {
    GameConfig {
        show_intro: false,
        ..GameConfig::default()
    }
}

type GameRun = (Result<Vec<bool>, GameError>, String, SilentTerminal);

/// Keeps every record at warn level or above
struct LoudRecords(Mutex<Vec<String>>);

impl Log for LoudRecords {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LogLevel::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata())
            && let Ok(mut records) = self.0.lock()
        {
            records.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOUD_RECORDS: LoudRecords = LoudRecords(Mutex::new(Vec::new()));

fn run_game(answers: &str, config: GameConfig) -> GameRun {
    let mut game = Game::new(
        Cursor::new(answers.to_string()),
        Vec::new(),
        SilentTerminal::default(),
        config,
    );
    let result = game
        .run()
        .map(|summary| summary.outcomes.iter().map(|o| o.is_correct()).collect());
    let (_, output, terminal) = game.into_parts();
    (result, String::from_utf8_lossy(&output).into_owned(), terminal)
}

#[test]
fn test_all_correct_answers_score_four() {
    let (result, output, _) = run_game("20\n2\n15\n3\n", quiet_config());
    assert!(matches!(result, Ok(ref v) if v == &vec![true, true, true, true]));
    assert!(output.contains("Your final score is: 4 out of 4"));
    for answer in [20, 2, 15, 3] {
        assert!(output.contains(&format!("Correct! The result is {}", answer)));
    }
    assert!(!output.contains("Incorrect"));
}

#[test]
fn test_all_wrong_answers_score_zero() {
    let (result, output, _) = run_game("0\n0\n0\n0\n", quiet_config());
    assert!(matches!(result, Ok(ref v) if v.iter().all(|c| !c)));
    assert!(output.contains("Your final score is: 0 out of 4"));

    let reported: Vec<&str> = output
        .lines()
        .filter(|l| l.contains("Incorrect. The correct result is"))
        .collect();
    assert_eq!(
        reported,
        vec![
            "Enter your answer: Incorrect. The correct result is 20",
            "Enter your answer: Incorrect. The correct result is 2",
            "Enter your answer: Incorrect. The correct result is 15",
            "Enter your answer: Incorrect. The correct result is 3",
        ]
    );
}

#[test]
fn test_invalid_tokens_are_consumed_before_answer() {
    let (result, output, _) = run_game("abc\nx1\n20\n2\nfoo\n15\n4\n", quiet_config());
    assert!(matches!(result, Ok(ref v) if v == &vec![true, true, true, false]));
    assert_eq!(
        output
            .matches("Invalid input. Please enter an integer.")
            .count(),
        3
    );
    assert!(output.contains("Your final score is: 3 out of 4"));
}

#[test]
fn test_level_headings_printed_once_per_level() {
    let (_, output, _) = run_game("20\n2\n15\n3\n", quiet_config());
    assert_eq!(output.matches("=== Easy Level ===").count(), 1);
    assert_eq!(output.matches("=== Medium Level ===").count(), 1);
    assert_eq!(output.matches("=== Hard Level ===").count(), 1);

    let easy = output.find("=== Easy Level ===");
    let medium = output.find("=== Medium Level ===");
    let hard = output.find("=== Hard Level ===");
    assert!(easy < medium && medium < hard);
}

#[test]
fn test_round_transcript_layout() {
    let (_, output, _) = run_game("20\n2\n15\n3\n", quiet_config());
    let expected = "=== Easy Level ===\n\
        Expression Tree:\n\
        \n          4\n\
        *\n\
        \x20                   3\n\
        \x20         +\n\
        \x20                   2\n\
        Guess the result of the expression: (2 + 3) * 4\n\
        Enter your answer: Correct! The result is 20\n";
    assert!(output.starts_with(expected), "unexpected output:\n{}", output);
    assert!(output.contains("Guess the result of the expression: 10 / (2 + 3) * (4 - 1)\n"));
}

#[test]
fn test_input_closed_mid_game_reports_partial_score() {
    let (result, output, _) = run_game("20\n2\n", quiet_config());
    assert!(matches!(result, Ok(ref v) if v == &vec![true, true]));
    assert!(output.contains("=== Medium Level ==="));
    assert!(!output.contains("=== Hard Level ==="));
    assert!(output.contains("Enter your answer: \n\nYour final score is: 2 out of 4\n"));
    assert!(output.contains("Thank you for using the program!"));
}

#[test]
fn test_input_closed_before_first_answer() {
    let (result, output, _) = run_game("oops\n", quiet_config());
    assert!(matches!(result, Ok(ref v) if v.is_empty()));
    assert!(output.contains("Your final score is: 0 out of 4"));
}

#[test]
fn test_invalid_answers_only_show_reprompt() {
    let _ = log::set_logger(&LOUD_RECORDS);
    log::set_max_level(log::LevelFilter::Trace);

    let (result, output, _) = run_game("abc\n\n2.5\n20\n2\n15\n3\n", GameConfig::default());
    assert!(matches!(result, Ok(ref v) if v == &vec![true, true, true, true]));
    assert_eq!(
        output
            .matches("Invalid input. Please enter an integer.")
            .count(),
        3
    );
    assert!(!output.contains("abc"));

    let loud = LOUD_RECORDS.0.lock().map(|r| r.clone()).unwrap_or_default();
    assert!(loud.is_empty(), "unexpected log records: {:?}", loud);
}

#[test]
fn test_intro_draws_banner_and_loading() {
    let (result, output, terminal) = run_game("20\n2\n15\n3\n", GameConfig::default());
    assert!(result.is_ok());
    assert_eq!(terminal.clears, 2);
    assert_eq!(terminal.paused, LOADING_STEP_DELAY * LOADING_STEPS as u32);
    assert!(output.contains(&format!("Loading{}", ".".repeat(LOADING_STEPS))));
    assert!(output.contains("Thank you for using the program!"));
}

#[test]
fn test_no_intro_skips_terminal_effects() {
    let (_, output, terminal) = run_game("20\n2\n15\n3\n", quiet_config());
    assert_eq!(terminal.clears, 0);
    assert!(!output.contains("Loading"));
}

#[test]
fn test_play_custom_rounds() {
    fn zero_division() -> Expression {
        Expression::div(Expression::leaf(1), Expression::leaf(0))
    }

    let mut game = Game::new(
        Cursor::new("1\n"),
        Vec::new(),
        SilentTerminal::default(),
        quiet_config(),
    );
    let result = game.play(&[Round::new(Level::Hard, zero_division)]);
    assert!(matches!(result, Err(GameError::Expression(_))));
}

#[test]
fn test_standard_rounds() {
    let rounds = standard_rounds();
    let levels: Vec<Level> = rounds.iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![Level::Easy, Level::Easy, Level::Medium, Level::Hard]);

    let answers: Vec<i64> = rounds
        .iter()
        .filter_map(|r| r.expression().evaluate().ok())
        .collect();
    assert_eq!(answers, vec![20, 2, 15, 3]);
}

#[test]
fn test_custom_indent_changes_diagram() {
    let config = GameConfig {
        indent: 2,
        ..quiet_config()
    };
    let (_, output, _) = run_game("20\n2\n15\n3\n", config);
    assert!(output.contains("Expression Tree:\n\n  4\n*\n    3\n  +\n    2\n"));
}
