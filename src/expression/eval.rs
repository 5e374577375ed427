use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::ops::Operator;

fn apply(op: Operator, left: i64, right: i64) -> Result<i64, ExpressionError> {
    let overflow = || ExpressionError::Overflow {
        left,
        op: op.symbol(),
        right,
    };

    match op {
        Operator::Add => left.checked_add(right).ok_or_else(overflow),
        Operator::Sub => left.checked_sub(right).ok_or_else(overflow),
        Operator::Mul => left.checked_mul(right).ok_or_else(overflow),
        Operator::Div => {
            if right == 0 {
                debug!("Division by zero attempted: {} / 0", left);
                Err(ExpressionError::DivisionByZero)
            } else {
                // Truncates toward zero
                left.checked_div(right).ok_or_else(overflow)
            }
        }
        Operator::Unknown(symbol) => {
            debug!("Unknown operator '{}' evaluates to 0", symbol);
            Ok(0)
        }
    }
}

impl Expression {
    /// Reduces the tree to a single integer, children first
    ///
    /// Operators outside `+ - * /` yield 0 instead of failing.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - An operation whose result does not fit in an `i64`
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let result = match self {
            Expression::Leaf(value) => Ok(*value),
            Expression::Operator { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                apply(*op, left, right)
            }
        };

        match &result {
            Ok(value) => debug!("Expression {} evaluated to: {}", self, value),
            Err(e) => debug!("Expression {} evaluation failed: {}", self, e),
        }

        result
    }
}
