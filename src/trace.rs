//! Tracing support for predicates.
//!
//! This module provides the `Traced` and `Instrument` wrappers for logging
//! predicate decisions. Feature-gated behind `#[cfg(feature = "tracing")]`.
//!
//! Nothing here installs a subscriber. Events are emitted at `TRACE` level
//! under this crate's target.

use crate::combinators::Predicate;

/// A predicate that emits a `TRACE` event with its result on every check.
///
/// Created by [`PredicateTracingExt::traced`].
#[derive(Clone, Debug)]
pub struct Traced<P> {
    pub(crate) inner: P,
    pub(crate) name: &'static str,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Traced<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let result = self.inner.check(value);
        tracing::trace!(predicate = self.name, result, "predicate checked");
        result
    }
}

/// A predicate checked inside a tracing span.
///
/// Created by [`PredicateTracingExt::instrument`].
#[derive(Clone, Debug)]
pub struct Instrument<P> {
    pub(crate) inner: P,
    pub(crate) span: tracing::Span,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Instrument<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        let _entered = self.span.enter();
        self.inner.check(value)
    }
}

/// Extension trait for adding tracing to predicates.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait PredicateTracingExt<T: ?Sized>: Predicate<T> + Sized {
    /// Log every decision of this predicate under `name`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use predicate_compose::*;
    ///
    /// let rule = all_of![
    ///     string::starts_with("err").traced("is_error"),
    ///     not(string::contains("ignored")).traced("not_ignored"),
    /// ];
    /// rule.check("error: disk full");
    /// // TRACE predicate_compose::trace: predicate checked predicate="is_error" result=true
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced { inner: self, name }
    }

    /// Check this predicate inside `span`.
    ///
    /// Events emitted by nested [`Traced`] predicates carry the span's fields.
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateTracingExt<T> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string::{contains, starts_with};
    use crate::{eq, not, PredicateExt};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_traced_logs_result() {
        let p = eq(3).traced("is_three");

        assert!(p.check(&3));
        assert!(logs_contain("predicate checked"));
        assert!(logs_contain("predicate=\"is_three\""));
        assert!(logs_contain("result=true"));
    }

    #[traced_test]
    #[test]
    fn test_traced_does_not_change_answer() {
        let rule = starts_with("err")
            .traced("is_error")
            .and(not(contains("ignored")).traced("not_ignored"));

        assert!(!rule.check("error: ignored case"));
        assert!(logs_contain("result=false"));
    }

    #[traced_test]
    #[test]
    fn test_short_circuit_visible_in_logs() {
        let rule = starts_with("err")
            .traced("is_error")
            .and(contains("disk").traced("mentions_disk"));

        assert!(!rule.check("warn: disk full"));
        assert!(logs_contain("is_error"));
        assert!(!logs_contain("mentions_disk"));
    }

    #[traced_test]
    #[test]
    fn test_instrument_wraps_in_span() {
        let p = eq(1)
            .traced("is_one")
            .instrument(tracing::info_span!("rule", name = "ones"));

        assert!(p.check(&1));
        assert!(logs_contain("rule"));
        assert!(logs_contain("is_one"));
    }
}
