//! matchutils-test: Test domain for conformance testing
//!
//! Provides a [`Recorder`] whose actions log a label when they fire, so tests
//! can assert exactly which actions ran and in what order.
//!
//! # Example
//!
//! ```
//! use matchutils_test::prelude::*;
//!
//! let recorder = Recorder::new();
//!
//! let mut matcher = Matcher::new(5_i64);
//! matcher
//!     .add_entry(|x| *x > 10, recorder.action("big"))
//!     .add_entry(|x| *x > 0, recorder.action("positive"))
//!     .add_default(recorder.action("none"))?;
//!
//! matcher.match_all();
//! assert_eq!(recorder.take(), ["positive"]);
//! # Ok::<(), MatchError>(())
//! ```

use std::cell::RefCell;
use std::rc::Rc;


/// Shared, ordered log of fired action labels.
///
/// Cloning a recorder yields a handle to the same log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An action that appends `label` to the log each time it fires.
    pub fn action<T>(&self, label: impl Into<String>) -> impl FnMut(&T) {
        let log = Rc::clone(&self.log);
        let label = label.into();
        move |_: &T| log.borrow_mut().push(label.clone())
    }

    /// Fallible form of [`action`](Self::action); it never fails.
    pub fn try_action<T, E>(&self, label: impl Into<String>) -> impl FnMut(&T) -> Result<(), E> {
        let mut action = self.action(label);
        move |subject: &T| {
            action(subject);
            Ok(())
        }
    }

    /// Labels fired so far, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Drain the log, returning the labels fired so far.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::Recorder;
    pub use matchutils::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchutils::Matcher;

    #[test]
    fn recorder_logs_in_firing_order() {
        let recorder = Recorder::new();
        let mut matcher = Matcher::new(3);
        matcher
            .add_entry(|x| *x > 0, recorder.action("a"))
            .add_entry(|x| *x > 1, recorder.action("b"))
            .add_entry(|x| *x > 5, recorder.action("c"));

        matcher.match_all();
        assert_eq!(recorder.labels(), ["a", "b"]);
        matcher.match_first();
        assert_eq!(recorder.take(), ["a", "b", "a"]);
        assert!(recorder.labels().is_empty());
    }

    #[test]
    fn recorder_clones_share_log() {
        let recorder = Recorder::new();
        let handle = recorder.clone();
        let mut action = handle.action::<i32>("x");
        action(&1);
        assert_eq!(recorder.labels(), ["x"]);
    }

    #[test]
    fn try_action_never_fails() {
        let recorder = Recorder::new();
        let mut matcher: Matcher<'_, i32, String> = Matcher::fallible(1);
        matcher.try_add_entry(|_| Ok(true), recorder.try_action("ok"));

        assert_eq!(matcher.try_match_first(), Ok(()));
        assert_eq!(recorder.labels(), ["ok"]);
    }
}
