//! Outcome type - a fallible computation container.
//!
//! This module provides the `Outcome<T, E>` type for programs computing a
//! value that may fail. It is a sum type over `Success(value)` and
//! `Failure(error)` with the same transformation protocol as
//! [`Maybe`](super::Maybe), and it preserves the distinction between a
//! failure raised by the computation and a rejection produced by `filter`.
//!
//! # Examples
//!
//! ```rust
//! use combars::container::Outcome;
//!
//! let parsed: Outcome<i32, std::num::ParseIntError> = Outcome::of(|| "10".parse());
//! assert!(parsed.is_success());
//!
//! let failed: Outcome<i32, std::num::ParseIntError> = Outcome::of(|| "oops".parse());
//! assert!(failed.is_failure());
//! ```

use std::fmt;

use crate::function::Guarded;

/// Error marking a value rejected by a `filter` or `collect` guard.
///
/// When [`Outcome::filter`] rejects a `Success` value, the resulting
/// `Failure` carries an error built `From<PredicateRejection>`, so callers
/// can tell rejection-by-filter apart from rejection-by-computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateRejection;

impl fmt::Display for PredicateRejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "predicate rejected the contained value")
    }
}

impl std::error::Error for PredicateRejection {}

/// A fallible computation's result: either `Success(value)` or
/// `Failure(error)`.
///
/// Exactly one variant is active; a constructed container is immutable.
/// Operations on a `Failure` never invoke the supplied closure and
/// propagate the same error unchanged. Expected failures stay data: no
/// operation re-raises the captured error past the container boundary.
///
/// # Laws
///
/// - **Identity**: `outcome.map(identity) == outcome`
/// - **Composition**: `outcome.map(f).map(g) == outcome.map(|x| g(f(x)))`
/// - **Flat-map purity**: `outcome.flat_map(Outcome::Success) == outcome`
///
/// # Examples
///
/// ```rust
/// use combars::container::Outcome;
///
/// let doubled: Outcome<i32, String> = Outcome::Success(21).map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Success(42));
///
/// let failed: Outcome<i32, String> = Outcome::Failure("broken".to_string());
/// assert_eq!(failed.map(|x| x * 2), Outcome::Failure("broken".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation produced an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs a fallible computation and captures its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Outcome;
    ///
    /// let parsed: Outcome<i32, std::num::ParseIntError> = Outcome::of(|| "10".parse());
    /// assert_eq!(parsed, Outcome::Success(10));
    /// ```
    #[inline]
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match computation() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if the computation succeeded.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// A `Failure` passes through unchanged and `function` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Outcome;
    ///
    /// let stringified: Outcome<String, String> =
    ///     Outcome::Success(10).map(|x: i32| x.to_string());
    /// assert_eq!(stringified, Outcome::Success("10".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function returning an `Outcome`, then flattens.
    ///
    /// A `Failure` passes through unchanged and `function` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Outcome;
    ///
    /// let parsed: Outcome<i32, String> = Outcome::Success("10".to_string())
    ///     .flat_map(|text| text.parse().map_or_else(
    ///         |_| Outcome::Failure("not a number".to_string()),
    ///         Outcome::Success,
    ///     ));
    /// assert_eq!(parsed, Outcome::Success(10));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure error.
    ///
    /// A `Success` passes through unchanged.
    #[inline]
    pub fn map_failure<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Keeps the success value only if the predicate accepts it.
    ///
    /// A rejected `Success` becomes a `Failure` carrying an error built
    /// `From<PredicateRejection>`, which keeps filter rejections
    /// distinguishable from computation failures. A `Failure` passes
    /// through unchanged and the predicate is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::{Outcome, PredicateRejection};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Error {
    ///     Broken,
    ///     Rejected(PredicateRejection),
    /// }
    ///
    /// impl From<PredicateRejection> for Error {
    ///     fn from(rejection: PredicateRejection) -> Self {
    ///         Self::Rejected(rejection)
    ///     }
    /// }
    ///
    /// let outcome: Outcome<i32, Error> = Outcome::Success(10);
    /// assert_eq!(
    ///     outcome.filter(|x| *x > 20),
    ///     Outcome::Failure(Error::Rejected(PredicateRejection))
    /// );
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: From<PredicateRejection>,
    {
        match self {
            Self::Success(value) if predicate(&value) => Self::Success(value),
            Self::Success(_) => Self::Failure(E::from(PredicateRejection)),
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Transforms the success value with a guarded partial function.
    ///
    /// The guard runs first; an undefined value becomes a `Failure` built
    /// `From<PredicateRejection>`, like a `filter` rejection. A `Failure`
    /// passes through unchanged.
    pub fn collect<U>(self, partial: &Guarded<T, U>) -> Outcome<U, E>
    where
        T: 'static,
        U: 'static,
        E: From<PredicateRejection>,
    {
        match self {
            Self::Success(value) => {
                if partial.is_defined_at(&value) {
                    Outcome::Success(partial.apply(value))
                } else {
                    Outcome::Failure(E::from(PredicateRejection))
                }
            }
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes the consumer with the success value, for side effects only,
    /// and returns the receiver unchanged.
    ///
    /// The consumer runs exactly once for `Success` and never for
    /// `Failure`.
    #[inline]
    pub fn peek<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Terminal consumption: invokes the consumer with the success value.
    ///
    /// The consumer runs exactly once for `Success` and never for
    /// `Failure`.
    #[inline]
    pub fn for_each<C>(self, consumer: C)
    where
        C: FnOnce(T),
    {
        if let Self::Success(value) = self {
            consumer(value);
        }
    }

    // =========================================================================
    // Elimination and Recovery
    // =========================================================================

    /// Eliminates the container by handling both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(10);
    /// let described = outcome.fold(|error| error, |value| value.to_string());
    /// assert_eq!(described, "10");
    /// ```
    #[inline]
    pub fn fold<U, FF, SF>(self, on_failure: FF, on_success: SF) -> U
    where
        FF: FnOnce(E) -> U,
        SF: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Turns a `Failure` back into a `Success` by computing a replacement
    /// value from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("broken".to_string());
    /// assert_eq!(outcome.recover(|_| 0), Outcome::Success(0));
    /// ```
    #[inline]
    pub fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(recovery(error)),
        }
    }

    /// Returns the success value, or computes a fallback from the error.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn to_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// `Success(v)` becomes `Ok(v)`, `Failure(e)` becomes `Err(e)`.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_result()
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Clone, PartialEq, std::fmt::Debug);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_skips_failure() {
        let invoked = Cell::new(false);
        let failed: Outcome<i32, String> = Outcome::Failure("broken".to_string());

        let result = failed.map(|value| {
            invoked.set(true);
            value * 2
        });

        assert_eq!(result, Outcome::Failure("broken".to_string()));
        assert!(!invoked.get());
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let outcome: Outcome<i32, String> = Ok(10).into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Ok(10));

        let outcome: Outcome<i32, String> = Err("broken".to_string()).into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err("broken".to_string()));
    }

    #[rstest]
    fn test_recover_only_touches_failure() {
        let success: Outcome<i32, String> = Outcome::Success(10);
        assert_eq!(success.recover(|_| 0), Outcome::Success(10));

        let failure: Outcome<i32, String> = Outcome::Failure("broken".to_string());
        assert_eq!(failure.recover(|_| 0), Outcome::Success(0));
    }
}
