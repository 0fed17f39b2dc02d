//! Monkey IR - AST types handed to the evaluator.
//!
//! The lexer and parser live elsewhere; this crate only fixes the node
//! vocabulary they produce and the evaluator consumes:
//! - `Program`, `Statement`, `BlockStatement`
//! - `Expression` and its payload structs
//! - `PrefixOp` / `InfixOp` operator tokens
//! - `Node`, a borrowed view over any of the above
//!
//! Every node renders back to source form through `Display`. Function
//! objects rely on this to render their bodies.

pub mod ast;

pub use ast::{
    BlockStatement, CallExpression, Expression, ExpressionStatement, FunctionLiteral,
    Identifier, IfExpression, IndexExpression, InfixExpression, InfixOp, LetStatement, Node,
    PrefixExpression, PrefixOp, Program, ReturnStatement, Statement,
};
