use std::io::{BufRead, Write};

use log::debug;

use crate::game::errors::GameError;
use crate::utils::parse_answer;

pub const ANSWER_PROMPT: &str = "Enter your answer: ";
pub const INVALID_ANSWER_MESSAGE: &str = "Invalid input. Please enter an integer.";

/// Prompts until a line holding a valid integer is read
///
/// Malformed lines are discarded whole and the prompt is repeated.
///
/// # Errors
///
/// Returns [`GameError::InputClosed`] if the input ends before a valid answer,
/// or an I/O error from either stream.
pub fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64, GameError> {
    let mut line = String::new();
    loop {
        write!(output, "{}", ANSWER_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }

        match parse_answer(&line) {
            Ok(answer) => return Ok(answer),
            Err(e) => {
                debug!("Rejected answer: {}", e);
                writeln!(output, "{}", INVALID_ANSWER_MESSAGE)?;
            }
        }
    }
}
