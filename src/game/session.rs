use std::io::{BufRead, Write};

use log::{debug, info};

use crate::expression::TreeDiagram;
use crate::game::banner::{THANK_YOU_ART, THANK_YOU_MESSAGE, WELCOME_ART};
use crate::game::config::GameConfig;
use crate::game::errors::GameError;
use crate::game::input::read_answer;
use crate::game::round::{Level, Round, standard_rounds};
use crate::game::terminal::Terminal;

/// Result of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub level: Level,
    pub guess: i64,
    pub correct_answer: i64,
}

impl RoundOutcome {
    pub fn is_correct(&self) -> bool {
        self.guess == self.correct_answer
    }
}

/// Final tally of a played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub score: usize,
    pub total: usize,
    pub outcomes: Vec<RoundOutcome>,
}

/// Console quiz session over an input and an output stream
pub struct Game<R, W, T> {
    input: R,
    output: W,
    terminal: T,
    config: GameConfig,
}

impl<R: BufRead, W: Write, T: Terminal> Game<R, W, T> {
    pub fn new(input: R, output: W, terminal: T, config: GameConfig) -> Self {
        Self {
            input,
            output,
            terminal,
            config,
        }
    }

    /// Plays the standard four rounds with intro and closing banners
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn run(&mut self) -> Result<GameSummary, GameError> {
        if self.config.show_intro {
            self.intro()?;
        }
        let summary = self.play(&standard_rounds())?;
        self.outro(&summary)?;
        Ok(summary)
    }

    /// Plays the given rounds in order and reports the score
    ///
    /// The level heading is printed only when the level differs from the
    /// previous round's. If input ends mid-game the remaining rounds are
    /// skipped and score nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or a round's expression cannot
    /// be evaluated.
    pub fn play(&mut self, rounds: &[Round]) -> Result<GameSummary, GameError> {
        let mut outcomes = Vec::with_capacity(rounds.len());
        let mut current_level = None;

        for round in rounds {
            if current_level != Some(round.level) {
                writeln!(self.output, "=== {} Level ===", round.level)?;
                current_level = Some(round.level);
            }
            match self.play_round(round) {
                Ok(outcome) => outcomes.push(outcome),
                Err(GameError::InputClosed) => {
                    info!(
                        "Input closed after {} of {} rounds",
                        outcomes.len(),
                        rounds.len()
                    );
                    writeln!(self.output)?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        let score = outcomes.iter().filter(|o| o.is_correct()).count();
        info!("Game finished with score {}/{}", score, rounds.len());

        Ok(GameSummary {
            score,
            total: rounds.len(),
            outcomes,
        })
    }

    fn play_round(&mut self, round: &Round) -> Result<RoundOutcome, GameError> {
        let expression = round.expression();
        debug!("Playing {} round: {}", round.level, expression);

        writeln!(self.output, "Expression Tree:")?;
        write!(
            self.output,
            "{}",
            TreeDiagram::new(&expression, self.config.indent)
        )?;
        writeln!(
            self.output,
            "\nGuess the result of the expression: {}",
            expression
        )?;

        let guess = read_answer(&mut self.input, &mut self.output)?;
        let correct_answer = expression.evaluate()?;
        let outcome = RoundOutcome {
            level: round.level,
            guess,
            correct_answer,
        };

        if outcome.is_correct() {
            writeln!(self.output, "Correct! The result is {}", correct_answer)?;
        } else {
            writeln!(
                self.output,
                "Incorrect. The correct result is {}",
                correct_answer
            )?;
        }
        info!(
            "{} round: guessed {}, answer {}",
            round.level, guess, correct_answer
        );

        Ok(outcome)
    }

    fn intro(&mut self) -> Result<(), GameError> {
        self.terminal.clear_screen(&mut self.output)?;
        writeln!(self.output, "{}", WELCOME_ART)?;

        write!(self.output, "Loading")?;
        self.output.flush()?;
        for _ in 0..self.config.loading_steps {
            write!(self.output, ".")?;
            self.output.flush()?;
            self.terminal.pause(self.config.loading_step_delay);
        }

        self.terminal.clear_screen(&mut self.output)?;
        Ok(())
    }

    fn outro(&mut self, summary: &GameSummary) -> Result<(), GameError> {
        writeln!(
            self.output,
            "\nYour final score is: {} out of {}",
            summary.score, summary.total
        )?;
        write!(self.output, "\n\n{}", THANK_YOU_ART)?;
        write!(self.output, "\n              {}\n\n", THANK_YOU_MESSAGE)?;
        self.output.flush()?;
        Ok(())
    }

    /// Hands back the streams and terminal, mostly for inspection in tests
    pub fn into_parts(self) -> (R, W, T) {
        (self.input, self.output, self.terminal)
    }
}
