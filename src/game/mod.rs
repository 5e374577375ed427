//! Console quiz: rounds, answer input and scoring

mod banner;
mod config;
mod errors;
mod input;
mod round;
mod session;
mod terminal;

pub use config::{GameConfig, LOADING_STEP_DELAY, LOADING_STEPS};
pub use errors::GameError;
pub use input::read_answer;
pub use round::{Level, Round, standard_rounds};
pub use session::{Game, GameSummary, RoundOutcome};
pub use terminal::{ConsoleTerminal, SilentTerminal, Terminal};

#[cfg(test)]
mod tests;
