//! Statement nodes and the program root.

use std::fmt;

use super::expr::{Expression, Identifier};

/// `let <name> = <value>;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
}

/// `return <return_value>;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub return_value: Expression,
}

/// An expression used in statement position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

/// Statement node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn let_(name: impl Into<String>, value: Expression) -> Self {
        Statement::Let(LetStatement {
            name: Identifier::new(name),
            value,
        })
    }

    pub fn return_(return_value: Expression) -> Self {
        Statement::Return(ReturnStatement { return_value })
    }

    pub fn expr(expression: Expression) -> Self {
        Statement::Expression(ExpressionStatement { expression })
    }
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        Statement::expr(expression)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "let {} = {};", s.name, s.value),
            Statement::Return(s) => write!(f, "return {};", s.return_value),
            Statement::Expression(s) => write!(f, "{}", s.expression),
        }
    }
}

/// Write statements separated by a single space.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{stmt}")?;
    }
    Ok(())
}

/// A braced statement sequence: `if`/`else` arms and function bodies.
///
/// Renders without the surrounding braces; the enclosing node adds them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

/// Root node of a parsed source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}
