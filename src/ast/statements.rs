use std::fmt::Display;

use super::{
    ast::ToSource,
    expressions::{Condition, Expr},
};

/// A single statement.
///
/// Branches and loop bodies hold exactly one statement; a missing `else` is
/// `None`, never an empty placeholder statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Assign {
        name: String,
        value: Expr,
    },
    If {
        condition: Condition,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Condition,
        body: Box<Stmt>,
    },
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Assign { name, value } => write!(f, "('=', '{}', {})", name, value),
            Stmt::If {
                condition,
                then_branch,
                else_branch: Some(else_branch),
            } => write!(f, "('if', {}, {}, {})", condition, then_branch, else_branch),
            Stmt::If {
                condition,
                then_branch,
                else_branch: None,
            } => write!(f, "('if', {}, {})", condition, then_branch),
            Stmt::While { condition, body } => write!(f, "('while', {}, {})", condition, body),
        }
    }
}

impl ToSource for Stmt {
    fn to_source(&self) -> String {
        match self {
            Stmt::Assign { name, value } => format!("{} = {}", name, value.to_source()),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let mut source = format!(
                    "if {} then {}",
                    condition.to_source(),
                    then_branch.to_source()
                );
                if let Some(else_branch) = else_branch {
                    source.push_str(" else ");
                    source.push_str(&else_branch.to_source());
                }
                source
            }
            Stmt::While { condition, body } => {
                format!("while {} do {}", condition.to_source(), body.to_source())
            }
        }
    }
}

/// Root of the tree: top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, stmt) in self.body.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", stmt)?;
        }
        write!(f, "]")
    }
}
