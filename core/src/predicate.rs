//! Predicate combinators — boolean composition over plain closures
//!
//! Entries take any `Fn(&T) -> bool`. These helpers build such closures from
//! smaller ones, with the usual short-circuit semantics:
//!
//! - [`and`] / [`all`] — stop at the first `false`
//! - [`or`] / [`any`] — stop at the first `true`
//! - [`not`] — inverts the inner predicate
//!
//! # Example
//!
//! ```
//! use matchutils::predicate::{and, not, eq};
//! use matchutils::Matcher;
//! use std::cell::Cell;
//!
//! let fired = Cell::new(false);
//! let positive_but_not_five = and(|x: &i32| *x > 0, not(eq(5)));
//!
//! let mut matcher = Matcher::new(7);
//! matcher.add_entry(positive_but_not_five, |_| fired.set(true));
//! matcher.match_first();
//! assert!(fired.get());
//! ```

/// A boxed predicate, used where predicates of different closure types are
/// collected together (see [`all`] and [`any`]).
pub type BoxPredicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Box a predicate so it can be collected with others.
pub fn boxed<'a, T>(predicate: impl Fn(&T) -> bool + 'a) -> BoxPredicate<'a, T> {
    Box::new(predicate)
}

/// A predicate that holds for every subject.
pub fn always<T>() -> impl Fn(&T) -> bool {
    |_: &T| true
}

/// A predicate that holds for no subject.
pub fn never<T>() -> impl Fn(&T) -> bool {
    |_: &T| false
}

/// A predicate that holds when the subject equals `expected`.
pub fn eq<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |subject: &T| *subject == expected
}

/// Inverts `predicate`.
pub fn not<T>(predicate: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |subject: &T| !predicate(subject)
}

/// Holds when both predicates hold. `right` is not evaluated when `left` fails.
pub fn and<T>(
    left: impl Fn(&T) -> bool,
    right: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |subject: &T| left(subject) && right(subject)
}

/// Holds when either predicate holds. `right` is not evaluated when `left` holds.
pub fn or<T>(left: impl Fn(&T) -> bool, right: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |subject: &T| left(subject) || right(subject)
}

/// Holds when every predicate holds, in order. An empty list holds.
pub fn all<'a, T: 'a>(predicates: Vec<BoxPredicate<'a, T>>) -> impl Fn(&T) -> bool + 'a {
    move |subject: &T| predicates.iter().all(|p| p(subject))
}

/// Holds when any predicate holds, in order. An empty list does not hold.
pub fn any<'a, T: 'a>(predicates: Vec<BoxPredicate<'a, T>>) -> impl Fn(&T) -> bool + 'a {
    move |subject: &T| predicates.iter().any(|p| p(subject))
}
