use std::time::Duration;

use crate::expression::DEFAULT_INDENT;

/// Number of dots drawn by the loading indicator
pub const LOADING_STEPS: usize = 20;

/// Pause between two loading dots
pub const LOADING_STEP_DELAY: Duration = Duration::from_millis(100);

/// Tunables for a game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Columns per tree level in the expression diagram
    pub indent: usize,
    pub loading_steps: usize,
    pub loading_step_delay: Duration,
    /// Draw the welcome banner and loading indicator before the first round
    pub show_intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            loading_steps: LOADING_STEPS,
            loading_step_delay: LOADING_STEP_DELAY,
            show_intro: true,
        }
    }
}
