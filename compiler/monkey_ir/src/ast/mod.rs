//! AST node types.
//!
//! # Module Structure
//!
//! - `expr`: Expression node and its payloads
//! - `operators`: Prefix and infix operator tokens
//! - `stmt`: Statements, blocks and the program root
//! - `node`: Borrowed view used as the evaluator's dispatch unit

mod expr;
mod node;
mod operators;
mod stmt;

pub use expr::{
    CallExpression, Expression, FunctionLiteral, Identifier, IfExpression, IndexExpression,
    InfixExpression, PrefixExpression,
};
pub use node::Node;
pub use operators::{InfixOp, PrefixOp};
pub use stmt::{BlockStatement, ExpressionStatement, LetStatement, Program, ReturnStatement, Statement};
