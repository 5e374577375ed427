//! Exprquiz - A console quiz built on arithmetic expression trees
//!
//! Each round draws a small fixed expression tree sideways, asks the player
//! for its value and scores the guess against the evaluated result.

pub mod expression;
pub mod game;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, TreeDiagram, render_lines};
pub use game::{Game, GameConfig, GameError, GameSummary};
pub use utils::{UtilsError, parse_answer};

/// Play a full game on the process's stdin and stdout
///
/// # Errors
///
/// This function will return an error if writing to stdout or reading from
/// stdin fails. Closing stdin early is not an error: the unanswered rounds
/// score nothing.
///
/// # Examples
///
/// ```no_run
/// use exprquiz::{GameConfig, play_on_console};
///
/// match play_on_console(GameConfig::default()) {
///     Ok(summary) => println!("Scored {}", summary.score),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn play_on_console(config: GameConfig) -> Result<GameSummary, GameError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = Game::new(stdin.lock(), stdout.lock(), game::ConsoleTerminal, config);
    game.run()
}
