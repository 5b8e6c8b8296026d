//! `Entry` — Predicate + action combination
//!
//! An `Entry` binds a predicate to the action that runs when it holds.
//! The [`Matcher`](crate::Matcher) keeps its entries in insertion order.

use std::convert::Infallible;
use std::fmt;

/// A boxed predicate as stored by an [`Entry`].
///
/// Plain `Fn(&T) -> bool` predicates are stored as always-`Ok`.
pub type Predicate<'a, T, E = Infallible> = Box<dyn Fn(&T) -> Result<bool, E> + 'a>;

/// A boxed action as stored by an [`Entry`] or as a matcher's default.
pub type Action<'a, T, E = Infallible> = Box<dyn FnMut(&T) -> Result<(), E> + 'a>;

/// Wraps a plain action so it fits the fallible storage type.
pub(crate) fn boxed_action<'a, T, E>(mut action: impl FnMut(&T) + 'a) -> Action<'a, T, E> {
    Box::new(move |subject: &T| {
        action(subject);
        Ok(())
    })
}

/// One (predicate, action) pair.
///
/// When the predicate holds for the subject, the action is invoked with the
/// subject. Neither callback is inspected or copied by the matcher.
///
/// # Example
///
/// ```
/// use matchutils::{Entry, Matcher};
/// use std::cell::Cell;
///
/// let hits = Cell::new(0);
/// let entry = Entry::new(|x: &i32| *x % 2 == 0, |_| hits.set(hits.get() + 1));
///
/// let mut matcher = Matcher::new(4);
/// matcher.push(entry);
/// matcher.match_all();
/// assert_eq!(hits.get(), 1);
/// ```
pub struct Entry<'a, T, E = Infallible> {
    predicate: Predicate<'a, T, E>,
    action: Action<'a, T, E>,
}

impl<'a, T, E> Entry<'a, T, E> {
    /// Create an entry from an infallible predicate and action.
    pub fn new(predicate: impl Fn(&T) -> bool + 'a, action: impl FnMut(&T) + 'a) -> Self {
        Self {
            predicate: Box::new(move |subject: &T| Ok(predicate(subject))),
            action: boxed_action(action),
        }
    }

    /// Create an entry whose predicate and action may fail with `E`.
    pub fn fallible(
        predicate: impl Fn(&T) -> Result<bool, E> + 'a,
        action: impl FnMut(&T) -> Result<(), E> + 'a,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            action: Box::new(action),
        }
    }

    /// Evaluate the predicate against the subject.
    ///
    /// # Errors
    ///
    /// Returns whatever error the predicate itself returns.
    pub fn matches(&self, subject: &T) -> Result<bool, E> {
        (self.predicate)(subject)
    }

    /// Invoke the action with the subject.
    ///
    /// # Errors
    ///
    /// Returns whatever error the action itself returns.
    pub fn fire(&mut self, subject: &T) -> Result<(), E> {
        (self.action)(subject)
    }
}

impl<T, E> fmt::Debug for Entry<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").finish_non_exhaustive()
    }
}
