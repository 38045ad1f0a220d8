//! Guarded partial functions: a mapping paired with an is-defined check.
//!
//! A [`Guarded`] stands in for a partial function `T -> U`: a mapping that
//! is only defined on the subset of `T` accepted by its guard predicate.
//! The containers' `collect` operation consults the guard first and only
//! invokes the mapping when the guard passes.

use std::fmt;
use std::rc::Rc;

/// A partial function as an explicit (guard, mapping) pair.
///
/// The guard answers "is the mapping defined at this value?"; the mapping
/// performs the transformation. Both are shared behind [`Rc`], so a
/// `Guarded` is cheap to clone and reusable across containers.
///
/// # Examples
///
/// ```
/// use combars::function::Guarded;
///
/// let halve_evens = Guarded::new(|x: &i32| x % 2 == 0, |x: i32| x / 2);
///
/// assert!(halve_evens.is_defined_at(&10));
/// assert!(!halve_evens.is_defined_at(&7));
/// assert_eq!(halve_evens.apply(10), 5);
/// ```
pub struct Guarded<T, U> {
    guard: Rc<dyn Fn(&T) -> bool>,
    mapping: Rc<dyn Fn(T) -> U>,
}

impl<T: 'static, U: 'static> Guarded<T, U> {
    /// Creates a guarded partial function from a guard predicate and a
    /// mapping.
    pub fn new<G, F>(guard: G, mapping: F) -> Self
    where
        G: Fn(&T) -> bool + 'static,
        F: Fn(T) -> U + 'static,
    {
        Self {
            guard: Rc::new(guard),
            mapping: Rc::new(mapping),
        }
    }

    /// Returns whether the mapping is defined at the given value.
    #[inline]
    pub fn is_defined_at(&self, value: &T) -> bool {
        (self.guard)(value)
    }

    /// Invokes the mapping.
    ///
    /// Callers are expected to check [`is_defined_at`](Self::is_defined_at)
    /// first; applying the mapping outside its defined subset is the
    /// mapping's own contract to enforce.
    #[inline]
    pub fn apply(&self, value: T) -> U {
        (self.mapping)(value)
    }
}

impl<T, U> Clone for Guarded<T, U> {
    fn clone(&self) -> Self {
        Self {
            guard: Rc::clone(&self.guard),
            mapping: Rc::clone(&self.mapping),
        }
    }
}

impl<T, U> fmt::Debug for Guarded<T, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Guarded").field(&"<guard>").finish()
    }
}
