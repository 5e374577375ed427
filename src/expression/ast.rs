use crate::expression::ops::Operator;

/// A node of an arithmetic expression tree
///
/// Every operator owns exactly two children, so a node is a leaf iff it has
/// no children. Dropping the root releases the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Leaf(i64),
    Operator {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn leaf(value: i64) -> Self {
        Expression::Leaf(value)
    }

    pub fn operator(op: impl Into<Operator>, left: Expression, right: Expression) -> Self {
        Expression::Operator {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::operator(Operator::Add, left, right)
    }

    pub fn sub(left: Expression, right: Expression) -> Self {
        Self::operator(Operator::Sub, left, right)
    }

    pub fn mul(left: Expression, right: Expression) -> Self {
        Self::operator(Operator::Mul, left, right)
    }

    pub fn div(left: Expression, right: Expression) -> Self {
        Self::operator(Operator::Div, left, right)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Leaf(_))
    }

    /// Text drawn for this node in a tree diagram: the operand digits for a
    /// leaf, the operator symbol otherwise
    pub fn label(&self) -> String {
        match self {
            Expression::Leaf(value) => value.to_string(),
            Expression::Operator { op, .. } => op.symbol().to_string(),
        }
    }

    /// Number of levels in the tree, a lone leaf being 1
    pub fn depth(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::Operator { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}
