use std::fmt::Display;

use super::ast::ToSource;

/// Arithmetic operators usable in a binary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }

    pub fn is_additive(&self) -> bool {
        matches!(self, BinaryOperator::Add | BinaryOperator::Subtract)
    }
}

/// Operators that compare two expressions inside a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalOperator {
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
}

impl RelationalOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(RelationalOperator::Equals),
            "!=" => Some(RelationalOperator::NotEquals),
            "<" => Some(RelationalOperator::Less),
            ">" => Some(RelationalOperator::Greater),
            "<=" => Some(RelationalOperator::LessEquals),
            ">=" => Some(RelationalOperator::GreaterEquals),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationalOperator::Equals => "==",
            RelationalOperator::NotEquals => "!=",
            RelationalOperator::Less => "<",
            RelationalOperator::Greater => ">",
            RelationalOperator::LessEquals => "<=",
            RelationalOperator::GreaterEquals => ">=",
        }
    }
}

/// Arithmetic expression.
///
/// Numbers and variables are leaves; `Binary` folds left to right within one
/// precedence level, so `a - b - c` is `Binary(-, Binary(-, a, b), c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Variable(String),
    Binary {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn to_operand_source(&self) -> String {
        match self {
            Expr::Binary { .. } => format!("({})", self.to_source()),
            _ => self.to_source(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "'{}'", name),
            Expr::Binary { operator, left, right } => {
                write!(f, "('{}', {}, {})", operator.as_str(), left, right)
            }
        }
    }
}

impl ToSource for Expr {
    fn to_source(&self) -> String {
        match self {
            Expr::Number(value) => value.to_string(),
            Expr::Variable(name) => name.clone(),
            Expr::Binary { operator, left, right } => format!(
                "{} {} {}",
                left.to_operand_source(),
                operator.as_str(),
                right.to_operand_source()
            ),
        }
    }
}

/// Relational comparison guarding an `if` or `while`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub operator: RelationalOperator,
    pub left: Expr,
    pub right: Expr,
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "('{}', {}, {})", self.operator.as_str(), self.left, self.right)
    }
}

impl ToSource for Condition {
    fn to_source(&self) -> String {
        format!(
            "{} {} {}",
            self.left.to_source(),
            self.operator.as_str(),
            self.right.to_source()
        )
    }
}
