use std::fmt;

/// Binary operators an expression node can carry
///
/// Symbols outside `+ - * /` are kept as `Unknown` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Unknown(char),
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Unknown(c) => *c,
        }
    }

    /// Binding strength used when writing the expression in infix form
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Unknown(_) => 0,
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn is_associative(&self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }
}

impl From<char> for Operator {
    fn from(symbol: char) -> Self {
        match symbol {
            '+' => Operator::Add,
            '-' => Operator::Sub,
            '*' => Operator::Mul,
            '/' => Operator::Div,
            other => Operator::Unknown(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
