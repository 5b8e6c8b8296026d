//! Evaluation trace types for debugging dispatch behavior.
//!
//! A [`MatchTrace`] records what a single `match_*_with_trace()` call did:
//! every predicate it evaluated (in order), whether each held, and whether
//! the default action ran. Actions fire exactly as in the untraced calls.
//!
//! # Example
//!
//! ```
//! use matchutils::{Matcher, MatchMode};
//!
//! let mut matcher = Matcher::new(5);
//! matcher
//!     .add_entry(|x| *x > 10, |_| {})
//!     .add_entry(|x| *x > 0, |_| {})
//!     .add_entry(|x| *x == 5, |_| {});
//!
//! let trace = matcher.match_first_with_trace();
//! assert_eq!(trace.mode, MatchMode::First);
//! assert_eq!(trace.steps.len(), 2); // stopped after the first match
//! assert_eq!(trace.fired().collect::<Vec<_>>(), [1]);
//! assert!(!trace.used_default);
//! ```

/// Which dispatch semantics produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchMode {
    /// Every matching entry fires.
    All,
    /// Only the first matching entry fires.
    First,
}

/// One predicate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchStep {
    /// Position of the entry in insertion order (0-based).
    pub index: usize,
    /// Did the predicate hold? If so, the entry's action fired.
    pub matched: bool,
}

/// Trace of one match call.
///
/// # INV: steps mirror invocations
///
/// Each step with `matched == true` corresponds to exactly one action
/// invocation, and `used_default` is `true` only when no step matched and a
/// default was registered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchTrace {
    /// Dispatch semantics used.
    pub mode: MatchMode,
    /// Evaluated predicates, in order. In [`MatchMode::First`] the scan stops
    /// after the first match.
    pub steps: Vec<MatchStep>,
    /// Whether the default action ran.
    pub used_default: bool,
}

impl MatchTrace {
    pub(crate) fn new(mode: MatchMode, capacity: usize) -> Self {
        Self {
            mode,
            steps: Vec::with_capacity(capacity),
            used_default: false,
        }
    }

    /// Returns `true` if at least one entry matched.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.steps.iter().any(|step| step.matched)
    }

    /// Indices of the entries whose actions fired, in firing order.
    pub fn fired(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .filter(|step| step.matched)
            .map(|step| step.index)
    }

    /// Total number of actions invoked, the default included.
    #[must_use]
    pub fn actions_run(&self) -> usize {
        self.fired().count() + usize::from(self.used_default)
    }
}
