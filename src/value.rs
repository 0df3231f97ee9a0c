//! Value predicates

use crate::combinators::Predicate;

/// Predicate for equality with a reference value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Equal<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Equal<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks for equality with `value`.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(eq(5).check(&5));
/// assert!(!eq(5).check(&4));
/// assert!(eq('x').check(&'x'));
/// ```
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Equal<T> {
    Equal(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{any_of, PredicateExt};

    #[derive(Debug, PartialEq)]
    enum Level {
        Debug,
        Warn,
        Error,
    }

    #[test]
    fn test_eq() {
        assert!(eq(5).check(&5));
        assert!(!eq(5).check(&6));
    }

    #[test]
    fn test_eq_owned_string() {
        let p = eq(String::from("admin"));
        assert!(p.check(&String::from("admin")));
        assert!(!p.check(&String::from("guest")));
    }

    #[test]
    fn test_eq_enum() {
        let loud = any_of([eq(Level::Warn), eq(Level::Error)]);
        assert!(loud.check(&Level::Error));
        assert!(!loud.check(&Level::Debug));
    }

    #[test]
    fn test_eq_negated() {
        let p = eq(0).not();
        assert!(p.check(&1));
        assert!(!p.check(&0));
    }
}
