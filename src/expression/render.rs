use std::fmt;

use crate::expression::ast::Expression;

/// Columns added per tree level
pub const DEFAULT_INDENT: usize = 10;

/// Widest indent a diagram is drawn with; larger requests are clamped
pub const MAX_INDENT: usize = 80;

/// Lays the tree out sideways: root in the leftmost column, right subtree
/// above it, left subtree below it
///
/// Each node gets its own line, indented by `indent` columns per level of
/// depth, with `indent` capped at [`MAX_INDENT`]. The right-self-left visiting
/// order is what makes the diagram read as a tree rotated a quarter turn.
pub fn render_lines(expr: &Expression, indent: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(expr.node_count());
    collect_lines(expr, 0, indent.min(MAX_INDENT), &mut lines);
    lines
}

fn collect_lines(expr: &Expression, depth: usize, indent: usize, lines: &mut Vec<String>) {
    match expr {
        Expression::Leaf(_) => lines.push(indented(expr, depth, indent)),
        Expression::Operator { left, right, .. } => {
            collect_lines(right, depth + 1, indent, lines);
            lines.push(indented(expr, depth, indent));
            collect_lines(left, depth + 1, indent, lines);
        }
    }
}

fn indented(expr: &Expression, depth: usize, indent: usize) -> String {
    let pad = " ".repeat(depth.saturating_mul(indent));
    format!("{}{}", pad, expr.label())
}

/// Console form of [`render_lines`]: every node line is preceded by a line
/// break, so the diagram opens with an empty line and has no trailing one
pub struct TreeDiagram<'a> {
    expr: &'a Expression,
    indent: usize,
}

impl<'a> TreeDiagram<'a> {
    pub fn new(expr: &'a Expression, indent: usize) -> Self {
        Self { expr, indent }
    }
}

impl fmt::Display for TreeDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in render_lines(self.expr, self.indent) {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}
