use std::fmt;

use crate::expression::Expression;
use crate::expression::builder::{
    easy_expression_1, easy_expression_2, hard_expression, medium_expression,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

/// One guess-the-result question
///
/// The tree is only built when the round is played, and is dropped when the
/// round ends.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub level: Level,
    pub build: fn() -> Expression,
}

impl Round {
    pub fn new(level: Level, build: fn() -> Expression) -> Self {
        Self { level, build }
    }

    pub fn expression(&self) -> Expression {
        (self.build)()
    }
}

/// The four rounds of a full game, one point each
pub fn standard_rounds() -> Vec<Round> {
    vec![
        Round::new(Level::Easy, easy_expression_1),
        Round::new(Level::Easy, easy_expression_2),
        Round::new(Level::Medium, medium_expression),
        Round::new(Level::Hard, hard_expression),
    ]
}
