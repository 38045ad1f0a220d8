//! Maybe type - an optional value container.
//!
//! This module provides the `Maybe<T>` type for programs computing a value
//! that may not exist. It is a sum type over `Present(value)` and
//! `Absent`, with the monadic transformation protocol.
//!
//! # Examples
//!
//! ```rust
//! use combars::container::Maybe;
//!
//! let maybe_number = Maybe::of(10);
//!
//! // Transformations only touch present values
//! let stringified = maybe_number.map(|x| x.to_string());
//! assert_eq!(stringified, Maybe::Present("10".to_string()));
//!
//! // Absent values pass through untouched
//! let nothing: Maybe<i32> = Maybe::Absent;
//! assert_eq!(nothing.map(|x| x * 2), Maybe::Absent);
//! ```

use std::fmt;

use crate::function::Guarded;

/// An optional value: either `Present(value)` or `Absent`.
///
/// `Maybe<T>` models a value that may not exist. Exactly one variant is
/// active; `Absent` carries nothing; a constructed container is immutable.
/// Every transformation consumes the receiver and returns a new container,
/// and no supplied closure ever runs against an `Absent` receiver.
///
/// # Laws
///
/// - **Identity**: `maybe.map(identity) == maybe`
/// - **Composition**: `maybe.map(f).map(g) == maybe.map(|x| g(f(x)))`
/// - **Flat-map purity**: `maybe.flat_map(Maybe::Present) == maybe`
///
/// # Examples
///
/// ```rust
/// use combars::container::Maybe;
///
/// let present = Maybe::of(21).map(|x| x * 2);
/// assert_eq!(present, Maybe::Present(42));
///
/// let filtered = Maybe::of(10).filter(|x| *x > 20);
/// assert_eq!(filtered, Maybe::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The value exists.
    Present(T),
    /// No value exists.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value that is known to exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    ///
    /// assert_eq!(Maybe::of(10), Maybe::Present(10));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// The absent container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    ///
    /// let nothing: Maybe<i32> = Maybe::absent();
    /// assert!(nothing.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Wraps a possibly-missing source value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(10)), Maybe::Present(10));
    /// assert_eq!(Maybe::from_option(None::<i32>), Maybe::Absent);
    /// ```
    #[inline]
    pub fn from_option(source: Option<T>) -> Self {
        match source {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the present value.
    ///
    /// `Present(v)` becomes `Present(function(v))`; `Absent` stays
    /// `Absent` and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).map(|x| x.to_string()), Maybe::Present("10".to_string()));
    /// assert_eq!(Maybe::<i32>::Absent.map(|x| x.to_string()), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a function returning a `Maybe`, then flattens.
    ///
    /// `Present(v)` becomes `function(v)`; `Absent` stays `Absent` and
    /// `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    ///
    /// let result = Maybe::of(10).flat_map(|x| Maybe::of(x.to_string()));
    /// assert_eq!(result, Maybe::Present("10".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the present value only if the predicate accepts it.
    ///
    /// `Absent` stays `Absent` and the predicate is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).filter(|x| *x > 5), Maybe::Present(10));
    /// assert_eq!(Maybe::of(10).filter(|x| *x > 20), Maybe::Absent);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Transforms the present value with a guarded partial function.
    ///
    /// The guard runs first; the mapping only runs when the guard accepts
    /// the value. An undefined value, like an `Absent` receiver, yields
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    /// use combars::function::Guarded;
    ///
    /// let stringify_small = Guarded::new(|x: &i32| *x < 100, |x: i32| x.to_string());
    ///
    /// assert_eq!(
    ///     Maybe::of(10).collect(&stringify_small),
    ///     Maybe::Present("10".to_string())
    /// );
    /// assert_eq!(Maybe::of(500).collect(&stringify_small), Maybe::Absent);
    /// ```
    pub fn collect<U>(self, partial: &Guarded<T, U>) -> Maybe<U>
    where
        T: 'static,
        U: 'static,
    {
        match self {
            Self::Present(value) if partial.is_defined_at(&value) => {
                Maybe::Present(partial.apply(value))
            }
            _ => Maybe::Absent,
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes the consumer with the present value, for side effects only,
    /// and returns the receiver unchanged.
    ///
    /// The consumer runs exactly once for `Present` and never for
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    /// use std::cell::Cell;
    ///
    /// let observed = Cell::new(0);
    /// let unchanged = Maybe::of(10).peek(|value| observed.set(*value));
    ///
    /// assert_eq!(observed.get(), 10);
    /// assert_eq!(unchanged, Maybe::Present(10));
    /// ```
    #[inline]
    pub fn peek<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            consumer(value);
        }
        self
    }

    /// Terminal consumption: invokes the consumer with the present value.
    ///
    /// The consumer runs exactly once for `Present` and never for
    /// `Absent`.
    #[inline]
    pub fn for_each<C>(self, consumer: C)
    where
        C: FnOnce(T),
    {
        if let Self::Present(value) = self {
            consumer(value);
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the container by handling both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    ///
    /// let described = Maybe::of(10).fold(|| "nothing".to_string(), |x| x.to_string());
    /// assert_eq!(described, "10");
    ///
    /// let described = Maybe::<i32>::Absent.fold(|| "nothing".to_string(), |x| x.to_string());
    /// assert_eq!(described, "nothing");
    /// ```
    #[inline]
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Returns the present value, or computes a fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::container::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).get_or_else(|| 0), 10);
    /// assert_eq!(Maybe::<i32>::Absent.get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(source: Option<T>) -> Self {
        Self::from_option(source)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_option()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Clone, Copy, PartialEq, Eq, std::fmt::Debug);
