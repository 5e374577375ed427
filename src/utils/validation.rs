use log::debug;

use crate::utils::errors::UtilsError;

/// Parses one line of user input as an integer answer
///
/// Surrounding whitespace is ignored; an optional leading sign is accepted.
///
/// # Errors
///
/// Returns an error if the line is blank or is not a whole integer that fits in an `i64`.
pub fn parse_answer(line: &str) -> Result<i64, UtilsError> {
    let trimmed = line.trim();
    debug!("Validating answer: '{}'", trimmed);

    if trimmed.is_empty() {
        debug!("Answer is empty");
        return Err(UtilsError::EmptyAnswer);
    }

    trimmed.parse::<i64>().map_err(|_| {
        debug!("Answer is not an integer: '{}'", trimmed);
        UtilsError::InvalidAnswer(trimmed.to_string())
    })
}
