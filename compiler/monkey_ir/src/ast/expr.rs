//! Expression nodes.

use std::fmt;
use std::rc::Rc;

use super::operators::{InfixOp, PrefixOp};
use super::stmt::BlockStatement;

/// A name reference. Also used for `let` targets and function parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier {
            value: value.into(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// `<op><right>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixExpression {
    pub operator: PrefixOp,
    pub right: Box<Expression>,
}

/// `<left> <op> <right>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub operator: InfixOp,
    pub right: Box<Expression>,
}

/// `if (<condition>) { <consequence> } else { <alternative> }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

/// `fn(<parameters>) { <body> }`
///
/// Parameters and body are reference counted so a function object can
/// hold on to them without copying the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
}

/// `<function>(<arguments>)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// `<left>[<index>]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexExpression {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(i64),
    Boolean(bool),
    String(String),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(Vec<Expression>),
    Hash(Vec<(Expression, Expression)>),
    Index(IndexExpression),
}

// Factory methods

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn int(value: i64) -> Self {
        Expression::Integer(value)
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(value.into())
    }

    pub fn prefix(operator: PrefixOp, right: Expression) -> Self {
        Expression::Prefix(PrefixExpression {
            operator,
            right: Box::new(right),
        })
    }

    pub fn infix(left: Expression, operator: InfixOp, right: Expression) -> Self {
        Expression::Infix(InfixExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn if_(
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Expression::If(IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    pub fn function<I, S>(parameters: I, body: BlockStatement) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expression::Function(FunctionLiteral {
            parameters: parameters.into_iter().map(Identifier::new).collect(),
            body: Rc::new(body),
        })
    }

    pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call(CallExpression {
            function: Box::new(function),
            arguments,
        })
    }

    pub fn array(elements: Vec<Expression>) -> Self {
        Expression::Array(elements)
    }

    pub fn hash(pairs: Vec<(Expression, Expression)>) -> Self {
        Expression::Hash(pairs)
    }

    pub fn index(left: Expression, index: Expression) -> Self {
        Expression::Index(IndexExpression {
            left: Box::new(left),
            index: Box::new(index),
        })
    }
}

/// Write `items` separated by `", "`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_list(f, &self.parameters)?;
        write!(f, ") {{ {} }}", self.body)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer(n) => write!(f, "{n}"),
            Expression::Boolean(b) => write!(f, "{b}"),
            Expression::String(s) => write!(f, "{s:?}"),
            Expression::Prefix(p) => write!(f, "({}{})", p.operator, p.right),
            Expression::Infix(i) => write!(f, "({} {} {})", i.left, i.operator, i.right),
            Expression::If(e) => {
                write!(f, "if {} {{ {} }}", e.condition, e.consequence)?;
                if let Some(alt) = &e.alternative {
                    write!(f, " else {{ {alt} }}")?;
                }
                Ok(())
            }
            Expression::Function(func) => write!(f, "{func}"),
            Expression::Call(c) => {
                write!(f, "{}(", c.function)?;
                write_list(f, &c.arguments)?;
                f.write_str(")")
            }
            Expression::Array(elements) => {
                f.write_str("[")?;
                write_list(f, elements)?;
                f.write_str("]")
            }
            Expression::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Expression::Index(ix) => write!(f, "({}[{}])", ix.left, ix.index),
        }
    }
}
