//! matchutils - predicate-based pattern dispatch
//!
//! A [`Matcher`] holds one subject value, an ordered list of
//! (predicate, action) entries and an optional default action. Matching
//! evaluates the predicates against the subject and invokes actions:
//!
//! - [`Matcher::match_all`] — every entry whose predicate holds fires, in insertion order
//! - [`Matcher::match_first`] — only the first entry whose predicate holds fires
//!
//! In both modes the default action fires when no entry matched.
//!
//! # Architecture
//!
//! - [`Matcher<'a, T, E>`] — subject + entries + default, builder-then-executor
//! - [`Entry<'a, T, E>`] — one (predicate, action) pair
//! - [`predicate`] — closure combinators (`and`, `or`, `not`, `all`, `any`, ...)
//! - [`MatchTrace`] — which predicates were evaluated, which actions fired
//!
//! # Key Invariants
//!
//! 1. **Insertion order**: entries are evaluated in the order they were added.
//!
//! 2. **Default is exclusive**: a matcher accepts one default action. A second
//!    registration fails with [`MatchError::DefaultAlreadySet`] and leaves the
//!    first in place.
//!
//! 3. **Callback failures propagate**: a panicking callback unwinds out of the
//!    match call, and an `Err` from a fallible callback is returned as-is. The
//!    rest of the scan is abandoned in both cases.
//!
//! # Example
//!
//! ```
//! use matchutils::prelude::*;
//! use std::cell::RefCell;
//!
//! let fired = RefCell::new(Vec::new());
//!
//! let mut matcher = Matcher::new(5);
//! matcher
//!     .add_entry(|x| *x > 10, |_| fired.borrow_mut().push("big"))
//!     .add_entry(|x| *x > 0, |_| fired.borrow_mut().push("positive"))
//!     .add_entry(|x| *x == 5, |_| fired.borrow_mut().push("five"))
//!     .add_default(|_| fired.borrow_mut().push("none"))?;
//!
//! matcher.match_first();
//! assert_eq!(*fired.borrow(), ["positive"]);
//!
//! fired.borrow_mut().clear();
//! matcher.match_all();
//! assert_eq!(*fired.borrow(), ["positive", "five"]);
//! # Ok::<(), MatchError>(())
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod entry;
mod matcher;
pub mod predicate;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use entry::{Action, Entry, Predicate};
pub use matcher::Matcher;
pub use predicate::BoxPredicate;
pub use trace::{MatchMode, MatchStep, MatchTrace};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use matchutils::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core types
        BoxPredicate,
        Entry,
        // Errors
        MatchError,
        // Trace types
        MatchMode,
        MatchStep,
        MatchTrace,
        Matcher,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors raised by the matcher itself.
///
/// Failures inside user callbacks are never turned into a `MatchError`; they
/// reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// [`Matcher::add_default`] was called on a matcher that already has a default.
    #[error("default action is already added to this matcher")]
    DefaultAlreadySet,
}
