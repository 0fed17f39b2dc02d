//! Tree-walking interpreter for Monkey.
//!
//! # Control Flow
//!
//! Inside the interpreter every step returns `EvalResult`:
//! - `Ok(Some(value))`: the node produced a value
//! - `Ok(None)`: the node produces nothing (`let`, unwired node kinds)
//! - `Err(ControlAction::Return(value))`: a `return` is unwinding
//! - `Err(ControlAction::Error(err))`: evaluation failed
//!
//! `?` is the propagation point for errors: the first error skips all
//! remaining sibling work. `Return` only unwinds statement sequences. A block
//! lets it through so the enclosing program (or function call) sees it, and a
//! program catches it and yields its payload. When it reaches an operand,
//! condition or `let`/`return` value instead, it turns back into an ordinary
//! `ReturnValue` object, and a block or program that later sees such an object
//! as a statement result stops there as well. At the public `eval` boundary
//! the two signals become `ReturnValue` and `Error` objects.
//!
//! # Unwired Node Kinds
//!
//! String, function, call, array, hash and index expressions exist in the
//! AST but carry no evaluation rule here. They yield no result, and so does
//! any prefix, infix or `if` expression with an absent operand or condition.
//! A `let` of an absent value binds nothing; a `return` of one unwinds with
//! `NULL`.

mod builder;

pub use builder::InterpreterBuilder;

use monkey_ir::{
    BlockStatement, Expression, IfExpression, InfixExpression, Node, PrefixExpression, Program,
    Statement,
};
use monkey_object::{depth_limit_exceeded, identifier_not_found, Environment, ErrorValue, Value};

use crate::eval_mode::EvalMode;
use crate::operators::evaluate_infix;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_prefix;

/// Non-local exits threaded through evaluation.
#[derive(Clone, Debug)]
pub enum ControlAction {
    /// A `return` statement is unwinding to the nearest program boundary.
    Return(Value),
    /// Evaluation failed; nothing after this point runs.
    Error(ErrorValue),
}

impl From<ErrorValue> for ControlAction {
    fn from(err: ErrorValue) -> Self {
        ControlAction::Error(err)
    }
}

/// Result of one evaluation step.
pub type EvalResult = Result<Option<Value>, ControlAction>;

/// What a driver does with a finished program.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// The program produced a value; render it with `inspect`.
    Value(Value),
    /// The program failed.
    Error(ErrorValue),
    /// The program produced nothing, e.g. it ended with a `let`.
    Empty,
}

/// Evaluate `node` in `env` with a default interpreter.
pub fn eval<'a>(node: impl Into<Node<'a>>, env: &Environment) -> Option<Value> {
    Interpreter::new().eval(node, env)
}

/// Tree-walking interpreter.
///
/// Holds only the depth policy and the current nesting depth; all program
/// state lives in the `Environment` handed to each call.
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Evaluation mode; decides the depth limit.
    mode: EvalMode,
    /// Current number of nested expression evaluations.
    depth: usize,
}

impl Interpreter {
    /// Create an interpreter in the default `Interpret` mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Get the current evaluation mode.
    #[inline]
    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    /// Evaluate any node.
    ///
    /// Returns `None` when the node produces no value. A `return` reaching
    /// this boundary from a non-program node comes back as a `ReturnValue`
    /// object; a failure comes back as an `Error` object.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval<'a>(&mut self, node: impl Into<Node<'a>>, env: &Environment) -> Option<Value> {
        let node = node.into();
        tracing::trace!(kind = node_kind_name(node), "eval");
        let result = match node {
            Node::Program(program) => self.eval_program_inner(program, env),
            Node::Statement(stmt) => self.eval_statement(stmt, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Expression(expr) => self.eval_expression(expr, env),
        };
        match result {
            Ok(value) => value,
            Err(ControlAction::Return(value)) => Some(Value::return_value(value)),
            Err(ControlAction::Error(err)) => {
                tracing::debug!(error = %err, "evaluation failed");
                Some(Value::error(err))
            }
        }
    }

    /// Evaluate a whole program in `env`.
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Option<Value> {
        self.eval(program, env)
    }

    /// Evaluate `program` in a fresh root environment.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn run(&mut self, program: &Program) -> Outcome {
        let env = Environment::new();
        match self.eval_program(program, &env) {
            None => Outcome::Empty,
            Some(value) => match value.as_error() {
                Some(err) => Outcome::Error(err.clone()),
                None => Outcome::Value(value),
            },
        }
    }

    /// Program: a top-level `return` ends execution with its bare payload.
    fn eval_program_inner(&mut self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = None;
        for stmt in &program.statements {
            match self.eval_statement(stmt, env) {
                Ok(Some(value)) => match value.as_return_value() {
                    Some(inner) => return Ok(Some(inner.clone())),
                    None => result = Some(value),
                },
                Ok(None) => result = None,
                Err(ControlAction::Return(value)) => return Ok(Some(value)),
                Err(err @ ControlAction::Error(_)) => return Err(err),
            }
        }
        Ok(result)
    }

    /// Block: returns and errors pass through untouched.
    fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut result = None;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env)?;
            if let Some(inner) = result.as_ref().and_then(Value::as_return_value) {
                return Err(ControlAction::Return(inner.clone()));
            }
        }
        Ok(result)
    }

    fn eval_statement(&mut self, stmt: &Statement, env: &Environment) -> EvalResult {
        match stmt {
            Statement::Expression(s) => self.eval_expression(&s.expression, env),
            Statement::Return(s) => {
                let value = self.eval_operand(&s.return_value, env)?;
                Err(ControlAction::Return(value.unwrap_or_else(Value::null)))
            }
            Statement::Let(s) => {
                if let Some(value) = self.eval_operand(&s.value, env)? {
                    env.set(s.name.value.as_str(), value);
                }
                Ok(None)
            }
        }
    }

    /// Evaluate an expression in operand position.
    ///
    /// Only an error short-circuits here. A `return` unwinding out of a nested
    /// block becomes an ordinary `ReturnValue` object that the enclosing
    /// block or program acts on once it reaches statement level.
    fn eval_operand(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        match self.eval_expression(expr, env) {
            Err(ControlAction::Return(value)) => Ok(Some(Value::return_value(value))),
            other => other,
        }
    }

    /// Entry point for expression evaluation with depth and stack safety.
    fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        if let Some(limit) = self.mode.max_depth() {
            if self.depth >= limit {
                return Err(depth_limit_exceeded(limit).into());
            }
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_expression_inner(expr, env));
        self.depth -= 1;
        result
    }

    /// Expression dispatch. Exhaustive over `Expression`; no catch-all.
    fn eval_expression_inner(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Integer(n) => Ok(Some(Value::integer(*n))),
            Expression::Boolean(b) => Ok(Some(Value::boolean(*b))),
            Expression::Identifier(ident) => env
                .get(&ident.value)
                .map(Some)
                .ok_or_else(|| identifier_not_found(&ident.value).into()),
            Expression::Prefix(prefix) => self.eval_prefix(prefix, env),
            Expression::Infix(infix) => self.eval_infix(infix, env),
            Expression::If(if_expr) => self.eval_if(if_expr, env),
            Expression::String(_)
            | Expression::Function(_)
            | Expression::Call(_)
            | Expression::Array(_)
            | Expression::Hash(_)
            | Expression::Index(_) => {
                tracing::debug!(node = %expr, "expression kind has no evaluation rule");
                Ok(None)
            }
        }
    }

    fn eval_prefix(&mut self, prefix: &PrefixExpression, env: &Environment) -> EvalResult {
        let Some(right) = self.eval_operand(&prefix.right, env)? else {
            return Ok(None);
        };
        Ok(Some(evaluate_prefix(prefix.operator, &right)?))
    }

    fn eval_infix(&mut self, infix: &InfixExpression, env: &Environment) -> EvalResult {
        let left = self.eval_operand(&infix.left, env)?;
        let right = self.eval_operand(&infix.right, env)?;
        let (Some(left), Some(right)) = (left, right) else {
            return Ok(None);
        };
        Ok(Some(evaluate_infix(infix.operator, &left, &right)?))
    }

    fn eval_if(&mut self, if_expr: &IfExpression, env: &Environment) -> EvalResult {
        let Some(condition) = self.eval_operand(&if_expr.condition, env)? else {
            return Ok(None);
        };
        if condition.is_truthy() {
            self.eval_block(&if_expr.consequence, env)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Some(Value::null()))
        }
    }
}

/// Short node label for trace spans.
fn node_kind_name(node: Node<'_>) -> &'static str {
    match node {
        Node::Program(_) => "program",
        Node::Statement(_) => "statement",
        Node::Block(_) => "block",
        Node::Expression(_) => "expression",
    }
}
