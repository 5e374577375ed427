use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::ops::Operator;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Leaf(_) => u8::MAX,
                Expression::Operator { op, .. } => op.precedence(),
            }
        }

        fn right_needs_parens(parent: Operator, right: &Expression) -> bool {
            match right {
                Expression::Leaf(value) => *value < 0,
                Expression::Operator { op, .. } => {
                    let rp = op.precedence();
                    let pp = parent.precedence();
                    rp < pp || (rp == pp && !(parent == *op && parent.is_associative()))
                }
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Leaf(value) => write!(f, "{}", value),
                Expression::Operator { op, left, right } => {
                    let need_l = precedence(left) < op.precedence();
                    let need_r = right_needs_parens(*op, right);
                    write_with_parens(f, left, need_l)?;
                    write!(f, " {} ", op)?;
                    write_with_parens(f, right, need_r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
