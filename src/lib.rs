//! # predicate-compose
//!
//! Composable boolean predicate combinators.
//!
//! A predicate classifies a value as `true` or `false`. This crate builds new
//! predicates out of existing ones: conjunction, disjunction, parity, "some
//! but not all", negation, plus constant and externally-decided predicates.
//! Every combinator is a pure value that owns its inputs and can be checked
//! from any number of threads.
//!
//! ## Quick Example
//!
//! ```rust
//! use predicate_compose::*;
//!
//! // A filter rule for log lines
//! let rule = string::starts_with("err").and(not(string::contains("ignored")));
//!
//! assert!(rule.check("error: disk full"));
//! assert!(!rule.check("error: ignored case"));
//! assert!(!rule.check("warn: disk full"));
//! ```
//!
//! ## Combining many predicates
//!
//! ```rust
//! use predicate_compose::*;
//!
//! let flags = [constant(true), constant(true), constant(false)];
//!
//! assert!(!all_of(flags).check(&()));  // stops at the first false
//! assert!(any_of(flags).check(&()));   // asks every predicate
//! assert!(!xor_of(flags).check(&()));  // two of three: even
//! assert!(any_but(flags).check(&()));  // some, but not all
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: `traced` and `instrument` wrappers that log predicate decisions.
//! - `serde`: `Serialize`/`Deserialize` for data-only predicates.
//! - `proptest`: `Arbitrary` for [`Const`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod collection;
mod combinators;
mod constant;
pub mod string;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;
mod validation;
mod value;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt, SharedPredicate};

// Re-export combinators
pub use combinators::{
    all_of, any_but, any_of, not, xor_of, AllOf, And, AnyBut, AnyOf, Not, Or, Xor, XorOf,
};

// Re-export constant predicates
pub use constant::{always, cond, constant, never, Always, Cond, Const, Never};

// Re-export value predicates
pub use value::{eq, Equal};

// Re-export validation integration
pub use validation::{validate, validate_with};

#[cfg(feature = "tracing")]
pub use trace::{Instrument, PredicateTracingExt, Traced};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{Predicate, PredicateExt, SharedPredicate};
    pub use crate::combinators::{all_of, any_but, any_of, not, xor_of};
    pub use crate::constant::{always, cond, constant, never};
    pub use crate::validation::{validate, validate_with};
    pub use crate::value::eq;
    pub use crate::{collection, string};

    #[cfg(feature = "tracing")]
    pub use crate::trace::PredicateTracingExt;
}
