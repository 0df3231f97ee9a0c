//! Constant and conditional predicates
//!
//! These predicates ignore the value they are asked about. They are useful
//! as identities when folding rules, as placeholders, and for gating a rule
//! on state that lives outside of it.

use crate::combinators::Predicate;

/// Predicate that always holds.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        true
    }
}

/// Create a predicate that is true for every input.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(always().check(&42));
/// assert!(always().check("anything"));
/// ```
pub fn always() -> Always {
    Always
}

/// Predicate that never holds.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Never;

impl<T: ?Sized> Predicate<T> for Never {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        false
    }
}

/// Create a predicate that is false for every input.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(!never().check(&42));
/// ```
pub fn never() -> Never {
    Never
}

/// Predicate with a fixed answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Const(pub bool);

impl<T: ?Sized> Predicate<T> for Const {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        self.0
    }
}

/// Create a predicate that returns `value` regardless of the input.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(constant(true).check(&0));
/// assert!(!constant(false).check(&0));
/// ```
pub fn constant(value: bool) -> Const {
    Const(value)
}

/// Predicate whose answer comes from a caller-supplied condition.
///
/// The condition is called on every check. Any state it reads is owned
/// by the caller.
#[derive(Clone, Copy, Debug)]
pub struct Cond<F>(pub F);

impl<T: ?Sized, F> Predicate<T> for Cond<F>
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, _value: &T) -> bool {
        (self.0)()
    }
}

/// Create a predicate that ignores its input and asks `condition` instead.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let maintenance = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&maintenance);
/// let in_maintenance = cond(move || flag.load(Ordering::Relaxed));
///
/// assert!(!in_maintenance.check("GET /"));
/// maintenance.store(true, Ordering::Relaxed);
/// assert!(in_maintenance.check("GET /"));
/// ```
pub fn cond<F>(condition: F) -> Cond<F>
where
    F: Fn() -> bool + Send + Sync,
{
    Cond(condition)
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Const {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<bool>().prop_map(Const).boxed()
    }
}
