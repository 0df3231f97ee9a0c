//! String predicates
//!
//! Predicates over `str`. Owned strings are checked through `as_str()`.
//! Pattern predicates take regexes compiled by the caller.

use regex::Regex;

use crate::combinators::Predicate;

/// Predicate that checks if a string is empty.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsEmpty;

impl Predicate<str> for IsEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.is_empty()
    }
}

/// Create a predicate that checks if a string is empty.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(string::is_empty().check(""));
/// assert!(!string::is_empty().check(" "));
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Predicate that checks if a string contains a substring.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contains<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

/// Create a predicate that checks if string contains substring.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(string::contains("@").check("user@example.com"));
/// assert!(!string::contains("@").check("invalid"));
/// ```
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Contains<S> {
    Contains(substring)
}

/// Predicate that checks if a string contains at least one of several substrings.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainsAny<S>(pub Vec<S>);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for ContainsAny<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.iter().any(|s| value.contains(s.as_ref()))
    }
}

/// Create a predicate that checks if string contains any of `substrings`.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = string::contains_any(["timeout", "refused"]);
/// assert!(p.check("connection refused"));
/// assert!(!p.check("ok"));
/// ```
pub fn contains_any<S, I>(substrings: I) -> ContainsAny<S>
where
    S: AsRef<str> + Send + Sync,
    I: IntoIterator<Item = S>,
{
    ContainsAny(substrings.into_iter().collect())
}

/// Predicate that checks if a string contains every one of several substrings.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainsAll<S>(pub Vec<S>);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for ContainsAll<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.iter().all(|s| value.contains(s.as_ref()))
    }
}

/// Create a predicate that checks if string contains all of `substrings`.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let p = string::contains_all(["user", "login"]);
/// assert!(p.check("user alice login ok"));
/// assert!(!p.check("user alice logout"));
/// ```
pub fn contains_all<S, I>(substrings: I) -> ContainsAll<S>
where
    S: AsRef<str> + Send + Sync,
    I: IntoIterator<Item = S>,
{
    ContainsAll(substrings.into_iter().collect())
}

/// Predicate that checks if string starts with a prefix.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if string starts with prefix.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(string::starts_with("http").check("https://example.com"));
/// assert!(!string::starts_with("http").check("ftp://example.com"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if string ends with a suffix.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for EndsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.ends_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if string ends with suffix.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// assert!(string::ends_with(".rs").check("main.rs"));
/// assert!(!string::ends_with(".rs").check("main.py"));
/// ```
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

/// Predicate that checks if a string matches a regex.
#[derive(Clone, Debug)]
pub struct Matches(pub Regex);

impl Predicate<str> for Matches {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks if string matches `pattern` anywhere.
///
/// Anchor the pattern with `^`/`$` for a whole-string match.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
/// use regex::Regex;
///
/// let p = string::matches(Regex::new(r"/api/v\d+").unwrap());
/// assert!(p.check("/api/v2/users"));
/// assert!(!p.check("/api/users"));
/// ```
pub fn matches(pattern: Regex) -> Matches {
    Matches(pattern)
}

/// Predicate that checks if a string matches at least one of several regexes.
#[derive(Clone, Debug)]
pub struct MatchesAny(pub Vec<Regex>);

impl Predicate<str> for MatchesAny {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.iter().any(|r| r.is_match(value))
    }
}

/// Create a predicate that checks if string matches any of `patterns`.
pub fn matches_any<I: IntoIterator<Item = Regex>>(patterns: I) -> MatchesAny {
    MatchesAny(patterns.into_iter().collect())
}

/// Predicate that checks if a string matches every one of several regexes.
#[derive(Clone, Debug)]
pub struct MatchesAll(pub Vec<Regex>);

impl Predicate<str> for MatchesAll {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.iter().all(|r| r.is_match(value))
    }
}

/// Create a predicate that checks if string matches all of `patterns`.
pub fn matches_all<I: IntoIterator<Item = Regex>>(patterns: I) -> MatchesAll {
    MatchesAll(patterns.into_iter().collect())
}
