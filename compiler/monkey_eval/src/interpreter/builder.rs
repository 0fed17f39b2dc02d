//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::eval_mode::EvalMode;

/// Builder for creating `Interpreter` instances with various configurations.
///
/// The default mode is `Interpret`. Hosts that run untrusted programs should
/// pick a tighter bound with `max_depth`.
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    mode: EvalMode,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(EvalMode::Bounded { max_depth })`.
    #[must_use]
    pub fn max_depth(self, max_depth: usize) -> Self {
        self.mode(EvalMode::Bounded { max_depth })
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            mode: self.mode,
            depth: 0,
        }
    }
}
