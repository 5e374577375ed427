use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow evaluating {left} {op} {right}")]
    Overflow { left: i64, op: char, right: i64 },
}
