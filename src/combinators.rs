//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the combinators
//! that fold any number of predicates into one.
//!
//! # Evaluation guarantees
//!
//! | combinator   | empty list | evaluation                                  |
//! |--------------|------------|---------------------------------------------|
//! | [`all_of`]   | `true`     | left to right, stops at the first `false`   |
//! | [`any_of`]   | `false`    | every predicate, exactly once               |
//! | [`xor_of`]   | `false`    | every predicate, exactly once (parity)      |
//! | [`any_but`]  | `false`    | every predicate, exactly once (single pass) |
//! | [`not`]      | -          | the wrapped predicate, exactly once         |
//!
//! `any_of` deliberately does not short-circuit. Callers may rely on every
//! predicate having been asked.

use std::fmt;
use std::sync::Arc;

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `xor`: Exactly one predicate must be true
/// - `not`: Inverts the predicate
///
/// Any `Fn(&T) -> bool` closure that is `Send + Sync` is a predicate.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let rule = string::starts_with("err").and(string::contains("ignored").not());
/// assert!(rule.check("error: disk full"));
/// assert!(!rule.check("error: ignored case"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// A type-erased, reference-counted predicate.
///
/// Lets predicates of different concrete types share one list, and lets the
/// same predicate take part in several compositions without being cloned.
/// Existing `Arc<dyn Predicate<T>>` and `Box<dyn Predicate<T>>` values convert
/// with `From`.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let short = SharedPredicate::new(|s: &str| s.len() < 8);
/// let noisy = SharedPredicate::new(string::contains("!"));
///
/// let strict = all_of([short.clone(), noisy.clone()]);
/// let lenient = any_of([short, noisy]);
///
/// assert!(!strict.check("hello"));
/// assert!(lenient.check("hello"));
/// ```
pub struct SharedPredicate<T: ?Sized>(Arc<dyn Predicate<T>>);

impl<T: ?Sized> SharedPredicate<T> {
    /// Erase the concrete type of `predicate`.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        SharedPredicate(Arc::new(predicate))
    }
}

impl<T: ?Sized> From<Arc<dyn Predicate<T>>> for SharedPredicate<T> {
    fn from(predicate: Arc<dyn Predicate<T>>) -> Self {
        SharedPredicate(predicate)
    }
}

impl<T: ?Sized> From<Box<dyn Predicate<T>>> for SharedPredicate<T> {
    fn from(predicate: Box<dyn Predicate<T>>) -> Self {
        SharedPredicate(Arc::from(predicate))
    }
}

impl<T: ?Sized> Clone for SharedPredicate<T> {
    fn clone(&self) -> Self {
        SharedPredicate(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for SharedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedPredicate").finish_non_exhaustive()
    }
}

impl<T: ?Sized> Predicate<T> for SharedPredicate<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining two predicates with logical operators.
/// All methods return concrete types for zero-cost abstraction.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = eq(1).or(eq(2)).not();
/// assert!(p.check(&3));
/// assert!(!p.check(&2));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// `other` is only checked when `self` holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_compose::*;
    ///
    /// let p = string::starts_with("a").and(string::ends_with("z"));
    /// assert!(p.check("abcz"));
    /// assert!(!p.check("abc"));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Both predicates are always checked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_compose::*;
    ///
    /// let p = eq(0).or(eq(100));
    /// assert!(p.check(&0));
    /// assert!(p.check(&100));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Combine with XOR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_compose::*;
    ///
    /// let p = string::starts_with("a").xor(string::ends_with("a"));
    /// assert!(p.check("abc"));
    /// assert!(!p.check("aba"));
    /// ```
    fn xor<P: Predicate<T>>(self, other: P) -> Xor<Self, P> {
        Xor(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_compose::*;
    ///
    /// let p = eq(5).not();
    /// assert!(p.check(&4));
    /// assert!(!p.check(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type into a [`SharedPredicate`].
    fn shared(self) -> SharedPredicate<T>
    where
        Self: 'static,
    {
        SharedPredicate::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
///
/// Unlike [`And`], both sides are always evaluated.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let left = self.0.check(value);
        let right = self.1.check(value);
        left || right
    }
}

/// XOR combinator - exactly one predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Xor<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Xor<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) ^ self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Create a predicate that is the logical negation of `predicate`.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let not_blank = not(string::is_empty());
/// assert!(not_blank.check("x"));
/// assert!(!not_blank.check(""));
/// ```
pub fn not<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

/// Logical AND over an ordered list of predicates.
#[derive(Clone, Debug)]
pub struct AllOf<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that holds when every given predicate holds.
///
/// Predicates are checked left to right and checking stops at the first
/// one that fails, so each predicate runs at most once. An empty list
/// always holds.
///
/// All predicates must share one type. Use [`all_of!`](crate::all_of!) or
/// [`SharedPredicate`] to mix types.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = all_of([eq(1), eq(1)]);
/// assert!(p.check(&1));
/// assert!(!p.check(&2));
///
/// let nothing = all_of(Vec::<Const>::new());
/// assert!(nothing.check(&()));
/// ```
pub fn all_of<P, I>(predicates: I) -> AllOf<P>
where
    I: IntoIterator<Item = P>,
{
    AllOf(predicates.into_iter().collect())
}

/// Logical OR over an ordered list of predicates.
#[derive(Clone, Debug)]
pub struct AnyOf<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().fold(false, |any, p| {
            let hit = p.check(value);
            any || hit
        })
    }
}

/// Create a predicate that holds when at least one given predicate holds.
///
/// Every predicate is checked exactly once, even after a match has been
/// found. An empty list never holds.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = any_of([eq(1), eq(5), eq(10)]);
/// assert!(p.check(&5));
/// assert!(!p.check(&7));
/// ```
pub fn any_of<P, I>(predicates: I) -> AnyOf<P>
where
    I: IntoIterator<Item = P>,
{
    AnyOf(predicates.into_iter().collect())
}

/// N-ary parity over an ordered list of predicates.
#[derive(Clone, Debug)]
pub struct XorOf<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for XorOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().fold(false, |odd, p| odd ^ p.check(value))
    }
}

/// Create a predicate that holds when an odd number of the given predicates hold.
///
/// For two predicates this is plain XOR. For more it is parity, so three
/// true inputs give `true`. Every predicate is checked exactly once and an
/// empty list never holds.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = xor_of([constant(true), constant(true), constant(true)]);
/// assert!(p.check(&()));
///
/// let p = xor_of([constant(true), constant(true)]);
/// assert!(!p.check(&()));
/// ```
pub fn xor_of<P, I>(predicates: I) -> XorOf<P>
where
    I: IntoIterator<Item = P>,
{
    XorOf(predicates.into_iter().collect())
}

/// "Some but not all" over an ordered list of predicates.
#[derive(Clone, Debug)]
pub struct AnyBut<P>(pub Vec<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyBut<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let (all, any) = self.0.iter().fold((true, false), |(all, any), p| {
            let hit = p.check(value);
            (all && hit, any || hit)
        });
        any && !all
    }
}

/// Create a predicate that holds when at least one, but not every, given predicate holds.
///
/// Equivalent to `any_of(ps) && !all_of(ps)`, computed in a single pass that
/// checks each predicate exactly once. An empty list and a single predicate
/// never hold. With two predicates this matches [`xor_of`].
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = any_but([constant(true), constant(true), constant(false)]);
/// assert!(p.check(&()));
///
/// let p = any_but([constant(true), constant(true), constant(true)]);
/// assert!(!p.check(&()));
/// ```
pub fn any_but<P, I>(predicates: I) -> AnyBut<P>
where
    I: IntoIterator<Item = P>,
{
    AnyBut(predicates.into_iter().collect())
}

/// Build an [`AllOf`] from predicates of any mix of types.
///
/// Each argument is wrapped in a [`SharedPredicate`].
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let rule: AllOf<SharedPredicate<str>> =
///     all_of![string::starts_with("err"), not(string::contains("ignored"))];
/// assert!(rule.check("error: disk full"));
/// assert!(!rule.check("warn: disk full"));
/// ```
#[macro_export]
macro_rules! all_of {
    () => {
        $crate::all_of(::std::vec::Vec::<$crate::SharedPredicate<_>>::new())
    };
    ($($predicate:expr),+ $(,)?) => {
        $crate::all_of([$($crate::SharedPredicate::new($predicate)),+])
    };
}

/// Build an [`AnyOf`] from predicates of any mix of types.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let rule: AnyOf<SharedPredicate<i32>> = any_of![eq(0), |n: &i32| *n > 100];
/// assert!(rule.check(&0));
/// assert!(rule.check(&101));
/// assert!(!rule.check(&50));
/// ```
#[macro_export]
macro_rules! any_of {
    () => {
        $crate::any_of(::std::vec::Vec::<$crate::SharedPredicate<_>>::new())
    };
    ($($predicate:expr),+ $(,)?) => {
        $crate::any_of([$($crate::SharedPredicate::new($predicate)),+])
    };
}

/// Build a [`XorOf`] from predicates of any mix of types.
#[macro_export]
macro_rules! xor_of {
    () => {
        $crate::xor_of(::std::vec::Vec::<$crate::SharedPredicate<_>>::new())
    };
    ($($predicate:expr),+ $(,)?) => {
        $crate::xor_of([$($crate::SharedPredicate::new($predicate)),+])
    };
}

/// Build an [`AnyBut`] from predicates of any mix of types.
#[macro_export]
macro_rules! any_but {
    () => {
        $crate::any_but(::std::vec::Vec::<$crate::SharedPredicate<_>>::new())
    };
    ($($predicate:expr),+ $(,)?) => {
        $crate::any_but([$($crate::SharedPredicate::new($predicate)),+])
    };
}
