//! Monkey Eval - tree-walking evaluator for Monkey programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Interpreter`: recursive node dispatch over `monkey_ir::Node`
//! - `evaluate_infix`: direct enum-based infix operator dispatch
//! - `evaluate_prefix`: direct enum-based prefix operator dispatch
//! - `EvalMode`: depth policy for nested evaluation
//! - `Value` and `Environment` from `monkey_object`
//!
//! Early return and failure travel as `Err(ControlAction)` inside the
//! interpreter and surface as `ReturnValue`/`Error` objects at the
//! `Interpreter::eval` boundary.
//!
//! # Debugging
//!
//! - `RUST_LOG=monkey_eval=debug`: failures and skipped node kinds
//! - `RUST_LOG=monkey_eval=trace`: every `eval` entry

mod eval_mode;
pub mod interpreter;
mod operators;
mod stack;
mod unary_operators;

#[cfg(test)]
mod tests;

pub use eval_mode::EvalMode;
pub use interpreter::{eval, ControlAction, Interpreter, InterpreterBuilder, Outcome};
pub use operators::evaluate_infix;
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_prefix;

// Re-export the object model for hosts driving the evaluator.
pub use monkey_object::{Environment, ErrorValue, EvalErrorKind, Object, ObjectKind, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
