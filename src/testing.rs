//! Testing utilities for predicates
//!
//! This module provides helpers for testing code built from predicate
//! combinators: a call-counting wrapper for checking evaluation guarantees,
//! and assertion macros that report the value that was misjudged.
//!
//! # Examples
//!
//! ## Counting calls
//!
//! ```rust
//! use predicate_compose::*;
//! use predicate_compose::testing::counted;
//!
//! let (first, first_calls) = counted(constant(false));
//! let (second, second_calls) = counted(constant(true));
//!
//! let rule: AllOf<SharedPredicate<()>> = all_of![first, second];
//! assert!(!rule.check(&()));
//!
//! assert_eq!(first_calls.get(), 1);
//! assert_eq!(second_calls.get(), 0);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use predicate_compose::*;
//! use predicate_compose::{assert_accepts, assert_rejects};
//!
//! assert_accepts!(string::starts_with("err"), "error: disk full");
//! assert_rejects!(string::starts_with("err"), "warn: disk full");
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::combinators::Predicate;

/// Shared handle to the number of times a [`Counted`] predicate was checked.
#[derive(Clone, Debug, Default)]
pub struct CallCount(Arc<AtomicUsize>);

impl CallCount {
    /// Number of checks so far.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// A predicate that counts how often it is checked.
///
/// Clones share the same [`CallCount`].
#[derive(Clone, Debug)]
pub struct Counted<P> {
    inner: P,
    calls: CallCount,
}

impl<P> Counted<P> {
    /// The count shared by this predicate and its clones.
    pub fn calls(&self) -> CallCount {
        self.calls.clone()
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Counted<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.calls.bump();
        self.inner.check(value)
    }
}

/// Wrap `predicate` so that every check is counted.
///
/// Returns the wrapped predicate and a handle to read the count after it
/// has been moved into a composition.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
/// use predicate_compose::testing::counted;
///
/// let (p, calls) = counted(eq(1));
/// let rule = any_of([p.clone(), p]);
///
/// assert!(rule.check(&1));
/// assert_eq!(calls.get(), 2);
/// ```
pub fn counted<P>(predicate: P) -> (Counted<P>, CallCount) {
    let calls = CallCount::default();
    let wrapped = Counted {
        inner: predicate,
        calls: calls.clone(),
    };
    (wrapped, calls)
}

/// Assert that a predicate accepts a value.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
/// use predicate_compose::assert_accepts;
///
/// assert_accepts!(eq(5), &5);
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($predicate:expr, $value:expr) => {
        match $value {
            value => {
                if !$crate::Predicate::check(&$predicate, value) {
                    panic!("Expected predicate to accept {:?}, but it rejected it", value);
                }
            }
        }
    };
}

/// Assert that a predicate rejects a value.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
/// use predicate_compose::assert_rejects;
///
/// assert_rejects!(eq(5), &4);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $value:expr) => {
        match $value {
            value => {
                if $crate::Predicate::check(&$predicate, value) {
                    panic!("Expected predicate to reject {:?}, but it accepted it", value);
                }
            }
        }
    };
}
