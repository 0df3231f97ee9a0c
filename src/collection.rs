//! Sequence predicates
//!
//! Predicates over slices. Owned vectors are checked through `as_slice()`
//! (or `&v[..]`), which keeps each predicate tied to a single input type
//! so that chained combinators infer without annotations.
//!
//! # Example
//!
//! ```rust
//! use predicate_compose::*;
//!
//! let tags = vec!["db", "prod", "eu"];
//! let rule = collection::contains("prod").and(collection::contains_any(["us", "eu"]));
//! assert!(rule.check(tags.as_slice()));
//! ```

use crate::combinators::Predicate;

/// Predicate that checks if a sequence is empty.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsEmpty;

impl<T> Predicate<[T]> for IsEmpty {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.is_empty()
    }
}

/// Create a predicate that checks if a sequence is empty.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(collection::is_empty().check(&[] as &[i32]));
/// assert!(!collection::is_empty().check(&[1, 2, 3][..]));
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Predicate that checks if a sequence contains an element.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contains<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<[T]> for Contains<T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.contains(&self.0)
    }
}

/// Create a predicate that checks if a sequence contains `element`.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(collection::contains(5).check(&[1, 5, 10][..]));
/// assert!(!collection::contains(5).check(&[1, 2, 3][..]));
/// ```
pub fn contains<T: PartialEq + Send + Sync>(element: T) -> Contains<T> {
    Contains(element)
}

/// Predicate that checks if a sequence contains at least one of several elements.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainsAny<T>(pub Vec<T>);

impl<T: PartialEq + Send + Sync> Predicate<[T]> for ContainsAny<T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        self.0.iter().any(|element| value.contains(element))
    }
}

/// Create a predicate that checks if a sequence contains any of `elements`.
///
/// Stops at the first element found. An empty list of elements never matches.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = collection::contains_any([3, 4]);
/// assert!(p.check(&[1, 2, 3][..]));
/// assert!(!p.check(&[1, 2][..]));
/// ```
pub fn contains_any<T, I>(elements: I) -> ContainsAny<T>
where
    T: PartialEq + Send + Sync,
    I: IntoIterator<Item = T>,
{
    ContainsAny(elements.into_iter().collect())
}

/// Predicate that checks if a sequence contains every one of several elements.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainsAll<T>(pub Vec<T>);

impl<T: PartialEq + Send + Sync> Predicate<[T]> for ContainsAll<T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        self.0.iter().all(|element| value.contains(element))
    }
}

/// Create a predicate that checks if a sequence contains all of `elements`.
///
/// Stops at the first element missing. An empty list of elements always matches.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = collection::contains_all([1, 3]);
/// assert!(p.check(&[1, 2, 3][..]));
/// assert!(!p.check(&[1, 2][..]));
/// ```
pub fn contains_all<T, I>(elements: I) -> ContainsAll<T>
where
    T: PartialEq + Send + Sync,
    I: IntoIterator<Item = T>,
{
    ContainsAll(elements.into_iter().collect())
}

/// Predicate that checks if a sequence starts with a prefix.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartsWith<T>(pub Vec<T>);

impl<T: PartialEq + Send + Sync> Predicate<[T]> for StartsWith<T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.starts_with(&self.0)
    }
}

/// Create a predicate that checks if a sequence starts with `prefix`.
///
/// An empty prefix matches every sequence.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = collection::starts_with([1, 2]);
/// assert!(p.check(&[1, 2, 3][..]));
/// assert!(!p.check(&[2, 1][..]));
/// assert!(!p.check(&[1][..]));
/// ```
pub fn starts_with<T, I>(prefix: I) -> StartsWith<T>
where
    T: PartialEq + Send + Sync,
    I: IntoIterator<Item = T>,
{
    StartsWith(prefix.into_iter().collect())
}

/// Predicate that checks if a sequence ends with a suffix.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndsWith<T>(pub Vec<T>);

impl<T: PartialEq + Send + Sync> Predicate<[T]> for EndsWith<T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.ends_with(&self.0)
    }
}

/// Create a predicate that checks if a sequence ends with `suffix`.
///
/// An empty suffix matches every sequence.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = collection::ends_with([2, 3]);
/// assert!(p.check(&[1, 2, 3][..]));
/// assert!(!p.check(&[3, 2][..]));
/// ```
pub fn ends_with<T, I>(suffix: I) -> EndsWith<T>
where
    T: PartialEq + Send + Sync,
    I: IntoIterator<Item = T>,
{
    EndsWith(suffix.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        let empty: &[i32] = &[];
        let non_empty: &[i32] = &[1, 2, 3];
        assert!(is_empty().check(empty));
        assert!(!is_empty().check(non_empty));
    }

    #[test]
    fn test_contains() {
        assert!(contains(5).check(&[1, 5, 10][..]));
        assert!(!contains(5).check(&[1, 2, 3][..]));
        assert!(!contains(5).check(&[] as &[i32]));
    }

    #[test]
    fn test_contains_vec() {
        let v = vec![String::from("a"), String::from("b")];
        assert!(contains(String::from("b")).check(v.as_slice()));
        assert!(!contains(String::from("c")).check(v.as_slice()));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any([7, 1]).check(&[1, 2][..]));
        assert!(!contains_any([7, 8]).check(&[1, 2][..]));
        assert!(!contains_any(Vec::<i32>::new()).check(&[1, 2][..]));
    }

    #[test]
    fn test_contains_all() {
        assert!(contains_all([2, 1]).check(&[1, 2, 3][..]));
        assert!(!contains_all([2, 4]).check(&[1, 2, 3][..]));
        assert!(contains_all(Vec::<i32>::new()).check(&[] as &[i32]));
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with([1, 2]).check(&[1, 2, 3][..]));
        assert!(starts_with([1, 2]).check(&[1, 2][..]));
        assert!(!starts_with([1, 2]).check(&[1][..]));
        assert!(!starts_with([1, 2]).check(&[2, 2, 3][..]));
        assert!(starts_with(Vec::<i32>::new()).check(&[] as &[i32]));
    }

    #[test]
    fn test_ends_with() {
        assert!(ends_with([2, 3]).check(&[1, 2, 3][..]));
        assert!(!ends_with([2, 3]).check(&[3][..]));
        assert!(!ends_with([2, 3]).check(&[1, 3, 2][..]));
        assert!(ends_with(Vec::<i32>::new()).check(&[1][..]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_is_empty_serde() {
        assert_eq!(serde_json::to_string(&IsEmpty).unwrap(), "null");
        let back: IsEmpty = serde_json::from_str("null").unwrap();
        assert!(back.check(&[] as &[i32]));
    }
}
