use std::io;

use thiserror::Error;

use crate::expression::ExpressionError;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Expression evaluation error: {0}")]
    Expression(#[from] ExpressionError),
    #[error("Input closed before an answer was given")]
    InputClosed,
}
