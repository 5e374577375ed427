use thiserror::Error;

/// Errors that can occur validating user answers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Answer cannot be empty")]
    EmptyAnswer,
    #[error("Answer must be an integer: {0}")]
    InvalidAnswer(String),
}
