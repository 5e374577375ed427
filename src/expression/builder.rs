//! Fixed trees played in the quiz rounds
//!
//! Each call builds a fresh tree; nothing is shared between calls.

use crate::expression::ast::Expression;

/// `(2 + 3) * 4`
pub fn easy_expression_1() -> Expression {
    Expression::mul(
        Expression::add(Expression::leaf(2), Expression::leaf(3)),
        Expression::leaf(4),
    )
}

/// `10 / (2 + 3)`
pub fn easy_expression_2() -> Expression {
    Expression::div(
        Expression::leaf(10),
        Expression::add(Expression::leaf(2), Expression::leaf(3)),
    )
}

/// `(2 + 3) * (4 - 1)`
pub fn medium_expression() -> Expression {
    Expression::mul(
        Expression::add(Expression::leaf(2), Expression::leaf(3)),
        Expression::sub(Expression::leaf(4), Expression::leaf(1)),
    )
}

/// `(10 / (2 + 3)) * (4 - 1)`
pub fn hard_expression() -> Expression {
    Expression::mul(
        Expression::div(
            Expression::leaf(10),
            Expression::add(Expression::leaf(2), Expression::leaf(3)),
        ),
        Expression::sub(Expression::leaf(4), Expression::leaf(1)),
    )
}
