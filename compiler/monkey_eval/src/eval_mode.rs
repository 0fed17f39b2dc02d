//! Evaluation modes.
//!
//! An `EvalMode` decides how deep nested evaluation may go before the
//! interpreter gives up with a `DepthLimitExceeded` error. Stack growth is
//! handled separately by `ensure_sufficient_stack`.

/// Depth policy for one interpreter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Standard mode, bounded at `EvalMode::DEFAULT_MAX_DEPTH`.
    #[default]
    Interpret,
    /// Caller-chosen bound, e.g. for sandboxed hosts.
    Bounded {
        /// Maximum number of nested expression evaluations.
        max_depth: usize,
    },
    /// No bound; runaway programs exhaust memory instead of failing cleanly.
    Unbounded,
}

impl EvalMode {
    /// Depth bound used by `Interpret`.
    pub const DEFAULT_MAX_DEPTH: usize = 10_000;

    /// Maximum nesting depth, or `None` for unlimited.
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => Some(Self::DEFAULT_MAX_DEPTH),
            Self::Bounded { max_depth } => Some(*max_depth),
            Self::Unbounded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interpret() {
        assert_eq!(EvalMode::default(), EvalMode::Interpret);
        assert_eq!(EvalMode::default().max_depth(), Some(10_000));
    }

    #[test]
    fn test_bounded_and_unbounded() {
        assert_eq!(EvalMode::Bounded { max_depth: 8 }.max_depth(), Some(8));
        assert_eq!(EvalMode::Unbounded.max_depth(), None);
    }
}
