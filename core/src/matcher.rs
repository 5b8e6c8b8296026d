//! Matcher — subject + ordered entries + optional default
//!
//! The `Matcher` is the entry point for dispatch. It owns one subject,
//! evaluates its entries against it in insertion order, and fires actions
//! with all-matches or first-match semantics.

use crate::entry::{boxed_action, Action};
use crate::{Entry, MatchError, MatchMode, MatchStep, MatchTrace};
use std::convert::Infallible;
use std::fmt;

/// Predicate-based dispatch over a single subject.
///
/// A Matcher contains:
/// - The subject, fixed at construction
/// - A list of entries (predicate + action pairs), in insertion order
/// - An optional default action, settable at most once
///
/// # Type Parameters
///
/// - `'a`: How long the callbacks may borrow from the caller
/// - `T`: The subject type
/// - `E`: The error type fallible callbacks return (`Infallible` by default)
///
/// # INV: Insertion order
///
/// Entries are evaluated in the order they were added. [`match_first`](Self::match_first)
/// fires the first entry whose predicate holds; [`match_all`](Self::match_all)
/// fires every such entry, each once, in that order.
///
/// # INV: Default only on no match
///
/// The default action fires, once, exactly when no entry matched.
///
/// # Late mutation
///
/// Nothing locks a matcher after it has been matched. Entries added
/// afterwards take part in later match calls.
///
/// # Threading
///
/// Callbacks are stored as plain `dyn Fn`/`dyn FnMut` objects with no
/// `Send` or `Sync` bound, so they may capture `Rc`, `&RefCell` and the
/// like. A `Matcher` is therefore `!Send` and `!Sync`: build and run it on
/// the thread that owns the subject.
///
/// # Example
///
/// ```
/// use matchutils::Matcher;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
///
/// let mut matcher = Matcher::new(-1);
/// matcher
///     .add_entry(|x| *x > 0, |_| log.borrow_mut().push("positive"))
///     .add_default(|x| log.borrow_mut().push(if *x < 0 { "negative" } else { "zero" }))
///     .unwrap();
///
/// matcher.match_all();
/// assert_eq!(*log.borrow(), ["negative"]);
/// ```
pub struct Matcher<'a, T, E = Infallible> {
    subject: T,
    entries: Vec<Entry<'a, T, E>>,
    default: Option<Action<'a, T, E>>,
}

impl<'a, T> Matcher<'a, T> {
    /// Create a matcher for `subject` with no entries and no default.
    ///
    /// Callbacks of this matcher cannot fail; use [`Matcher::fallible`] for
    /// callbacks that return `Result`.
    pub fn new(subject: T) -> Self {
        Self::fallible(subject)
    }

    /// Run every matching entry's action, in insertion order.
    ///
    /// Falls back to the default action when nothing matched.
    pub fn match_all(&mut self) {
        into_ok(self.scan(MatchMode::All, None));
    }

    /// Run the action of the first matching entry, then stop.
    ///
    /// Falls back to the default action when nothing matched.
    pub fn match_first(&mut self) {
        into_ok(self.scan(MatchMode::First, None));
    }

    /// [`match_all`](Self::match_all), returning what was evaluated and fired.
    pub fn match_all_with_trace(&mut self) -> MatchTrace {
        into_ok(self.run(MatchMode::All))
    }

    /// [`match_first`](Self::match_first), returning what was evaluated and fired.
    pub fn match_first_with_trace(&mut self) -> MatchTrace {
        into_ok(self.run(MatchMode::First))
    }
}

impl<'a, T, E> Matcher<'a, T, E> {
    /// Create a matcher whose callbacks may fail with `E`.
    ///
    /// ```
    /// use matchutils::Matcher;
    ///
    /// let mut matcher: Matcher<'_, &str, String> = Matcher::fallible("42");
    /// matcher.try_add_entry(
    ///     |s| s.parse::<i32>().map(|n| n > 0).map_err(|e| e.to_string()),
    ///     |_| Ok(()),
    /// );
    /// assert_eq!(matcher.try_match_first(), Ok(()));
    /// ```
    pub fn fallible(subject: T) -> Self {
        Self {
            subject,
            entries: Vec::new(),
            default: None,
        }
    }

    /// Append an entry. No deduplication is performed.
    pub fn add_entry(
        &mut self,
        predicate: impl Fn(&T) -> bool + 'a,
        action: impl FnMut(&T) + 'a,
    ) -> &mut Self {
        self.push(Entry::new(predicate, action))
    }

    /// Append an entry whose predicate and action may fail.
    pub fn try_add_entry(
        &mut self,
        predicate: impl Fn(&T) -> Result<bool, E> + 'a,
        action: impl FnMut(&T) -> Result<(), E> + 'a,
    ) -> &mut Self {
        self.push(Entry::fallible(predicate, action))
    }

    /// Append an already-built entry.
    pub fn push(&mut self, entry: Entry<'a, T, E>) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Set the action that runs when no entry matches.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DefaultAlreadySet`] if a default was already
    /// added. The existing default is kept.
    pub fn add_default(&mut self, action: impl FnMut(&T) + 'a) -> Result<&mut Self, MatchError> {
        self.set_default(boxed_action(action))
    }

    /// Set a fallible default action.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DefaultAlreadySet`] if a default was already
    /// added. The existing default is kept.
    pub fn try_add_default(
        &mut self,
        action: impl FnMut(&T) -> Result<(), E> + 'a,
    ) -> Result<&mut Self, MatchError> {
        self.set_default(Box::new(action))
    }

    fn set_default(&mut self, action: Action<'a, T, E>) -> Result<&mut Self, MatchError> {
        if self.default.is_some() {
            tracing::debug!("rejected second default action");
            return Err(MatchError::DefaultAlreadySet);
        }
        self.default = Some(action);
        Ok(self)
    }

    /// Consuming form of [`add_entry`](Self::add_entry).
    #[must_use]
    pub fn with_entry(
        mut self,
        predicate: impl Fn(&T) -> bool + 'a,
        action: impl FnMut(&T) + 'a,
    ) -> Self {
        self.add_entry(predicate, action);
        self
    }

    /// Consuming form of [`add_default`](Self::add_default).
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DefaultAlreadySet`] if a default was already added.
    pub fn with_default(mut self, action: impl FnMut(&T) + 'a) -> Result<Self, MatchError> {
        self.add_default(action)?;
        Ok(self)
    }

    /// Fallible [`match_all`](Matcher::match_all).
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a predicate or action. No further
    /// callback runs once an error occurs, the default included.
    pub fn try_match_all(&mut self) -> Result<(), E> {
        self.scan(MatchMode::All, None).map(drop)
    }

    /// Fallible [`match_first`](Matcher::match_first).
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a predicate or action.
    pub fn try_match_first(&mut self) -> Result<(), E> {
        self.scan(MatchMode::First, None).map(drop)
    }

    /// Fallible [`match_all_with_trace`](Matcher::match_all_with_trace).
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a predicate or action.
    pub fn try_match_all_with_trace(&mut self) -> Result<MatchTrace, E> {
        self.run(MatchMode::All)
    }

    /// Fallible [`match_first_with_trace`](Matcher::match_first_with_trace).
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a predicate or action.
    pub fn try_match_first_with_trace(&mut self) -> Result<MatchTrace, E> {
        self.run(MatchMode::First)
    }

    /// The subject under test.
    pub fn subject(&self) -> &T {
        &self.subject
    }

    /// Consume the matcher, returning the subject.
    pub fn into_subject(self) -> T {
        self.subject
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a default action has been added.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    fn run(&mut self, mode: MatchMode) -> Result<MatchTrace, E> {
        let mut trace = MatchTrace::new(mode, self.entries.len());
        trace.used_default = self.scan(mode, Some(&mut trace.steps))?;
        Ok(trace)
    }

    /// Evaluate entries and fire actions. Steps are recorded only when a
    /// sink is given, so untraced calls never allocate.
    ///
    /// Returns whether the default action ran.
    fn scan(
        &mut self,
        mode: MatchMode,
        mut steps: Option<&mut Vec<MatchStep>>,
    ) -> Result<bool, E> {
        let mut fired = 0usize;

        for (index, entry) in self.entries.iter_mut().enumerate() {
            let matched = entry.matches(&self.subject)?;
            if let Some(steps) = steps.as_deref_mut() {
                steps.push(MatchStep { index, matched });
            }
            if !matched {
                continue;
            }

            tracing::trace!(index, ?mode, "entry matched");
            entry.fire(&self.subject)?;
            fired += 1;
            if mode == MatchMode::First {
                break;
            }
        }

        let mut used_default = false;
        if fired == 0 {
            if let Some(default) = self.default.as_mut() {
                default(&self.subject)?;
                used_default = true;
            }
        }

        tracing::debug!(
            ?mode,
            entries = self.entries.len(),
            fired,
            used_default,
            "match complete"
        );
        Ok(used_default)
    }
}

fn into_ok<V>(result: Result<V, Infallible>) -> V {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Matcher<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("subject", &self.subject)
            .field("entries_len", &self.entries.len())
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
