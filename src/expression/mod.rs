//! Expression trees: model, fixed fixtures, evaluation and drawing

mod ast;
pub mod builder;
mod display;
mod errors;
mod eval;
mod ops;
mod render;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use ops::Operator;
pub use render::{DEFAULT_INDENT, MAX_INDENT, TreeDiagram, render_lines};
