//! Gate values on a predicate
//!
//! Combinators never fail. When a rule decides whether a value may pass,
//! these helpers turn the answer into a `Result` so it can travel with `?`.

use crate::combinators::Predicate;

/// Validate a value using a predicate.
///
/// Returns `Ok(value)` if the predicate is satisfied, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let result = validate(42, eq(42), "not the answer");
/// assert_eq!(result, Ok(42));
///
/// let result = validate(7, eq(42), "not the answer");
/// assert_eq!(result, Err("not the answer"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Validate a value with an error factory.
///
/// Like `validate`, but takes a closure to generate the error,
/// allowing access to the value when constructing the error message.
///
/// # Example
///
/// ```rust
/// use predicate_compose::*;
///
/// let result = validate_with(
///     String::from("hi"),
///     |s: &String| string::starts_with("h").check(s.as_str()) && s.len() > 3,
///     |s| format!("'{}' is too short", s),
/// );
/// assert_eq!(result, Err("'hi' is too short".to_string()));
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
