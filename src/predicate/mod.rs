//! Boolean function values and their combinators.
//!
//! This module provides [`Predicate`], a first-class wrapper over a rule
//! `Fn(&T) -> bool`, along with:
//!
//! - instance combinators: [`negate`](Predicate::negate),
//!   [`and`](Predicate::and), [`or`](Predicate::or) (both short-circuit)
//! - set combinators over a collection of predicates: [`all_of`],
//!   [`any_of`], [`none_of`]
//! - collection quantifiers lifting an element predicate to a collection
//!   predicate: [`for_all`], [`exists`]
//! - membership: [`is_in`]
//!
//! Every combinator returns a new `Predicate`; the receiver is never
//! consumed or mutated, so one predicate can participate in any number of
//! combinations.
//!
//! # Examples
//!
//! ```rust
//! use combars::predicate::{Predicate, all_of};
//!
//! let is_even = Predicate::new(|x: &i32| x % 2 == 0);
//! let is_positive = Predicate::new(|x: &i32| *x > 0);
//!
//! let both = all_of([is_even.clone(), is_positive.clone()]);
//! assert!(both.test(&4));
//! assert!(!both.test(&-4));
//!
//! // The originals are still usable after combination.
//! assert!(is_even.test(&-4));
//! assert!(is_positive.test(&1));
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// A first-class boolean function over `&T`.
///
/// The wrapped rule is shared, so cloning a predicate and feeding it into
/// several combinators is cheap and never invalidates the original.
///
/// # Examples
///
/// ```rust
/// use combars::predicate::Predicate;
///
/// let is_even = Predicate::new(|x: &i32| x % 2 == 0);
///
/// assert!(is_even.test(&4));
/// assert!(!is_even.test(&3));
/// ```
pub struct Predicate<T: ?Sized> {
    rule: Rc<dyn Fn(&T) -> bool>,
}

impl<T: ?Sized + 'static> Predicate<T> {
    /// Wraps a rule as a predicate.
    #[inline]
    pub fn new<P>(rule: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self {
            rule: Rc::new(rule),
        }
    }

    /// Evaluates the predicate against a value.
    #[inline]
    pub fn test(&self, value: &T) -> bool {
        (self.rule)(value)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Returns a predicate accepting exactly the values this one rejects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::predicate::Predicate;
    ///
    /// let is_even = Predicate::new(|x: &i32| x % 2 == 0);
    /// let is_odd = is_even.negate();
    ///
    /// assert!(is_odd.test(&3));
    /// assert!(!is_odd.test(&4));
    /// ```
    #[inline]
    pub fn negate(&self) -> Self {
        let rule = Rc::clone(&self.rule);
        Self::new(move |value: &T| !rule(value))
    }

    /// Returns the conjunction of this predicate and another.
    ///
    /// Short-circuits: when this predicate rejects, `other` is not
    /// evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::predicate::Predicate;
    ///
    /// let is_even = Predicate::new(|x: &i32| x % 2 == 0);
    /// let is_positive = Predicate::new(|x: &i32| *x > 0);
    ///
    /// let both = is_even.and(&is_positive);
    /// assert!(both.test(&4));
    /// assert!(!both.test(&-4));
    /// assert!(!both.test(&3));
    /// ```
    #[inline]
    pub fn and(&self, other: &Self) -> Self {
        let left = Rc::clone(&self.rule);
        let right = Rc::clone(&other.rule);
        Self::new(move |value: &T| left(value) && right(value))
    }

    /// Returns the disjunction of this predicate and another.
    ///
    /// Short-circuits: when this predicate accepts, `other` is not
    /// evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::predicate::Predicate;
    ///
    /// let is_negative = Predicate::new(|x: &i32| *x < 0);
    /// let is_huge = Predicate::new(|x: &i32| *x > 1000);
    ///
    /// let out_of_range = is_negative.or(&is_huge);
    /// assert!(out_of_range.test(&-1));
    /// assert!(out_of_range.test(&5000));
    /// assert!(!out_of_range.test(&10));
    /// ```
    #[inline]
    pub fn or(&self, other: &Self) -> Self {
        let left = Rc::clone(&self.rule);
        let right = Rc::clone(&other.rule);
        Self::new(move |value: &T| left(value) || right(value))
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            rule: Rc::clone(&self.rule),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Predicate").field(&"<rule>").finish()
    }
}

// =============================================================================
// Set Combinators
// =============================================================================

/// Returns a predicate accepting values every given predicate accepts.
///
/// With no predicates the result accepts everything (vacuous truth). Each
/// evaluation walks the predicates in order and stops at the first
/// rejection.
///
/// # Examples
///
/// ```rust
/// use combars::predicate::{Predicate, all_of};
///
/// let is_even = Predicate::new(|x: &i32| x % 2 == 0);
/// let is_positive = Predicate::new(|x: &i32| *x > 0);
///
/// let both = all_of([is_even, is_positive]);
/// assert!(both.test(&4));
/// assert!(!both.test(&-4));
/// assert!(!both.test(&3));
///
/// let anything = all_of::<i32, _>([]);
/// assert!(anything.test(&-100));
/// ```
pub fn all_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: SmallVec<[Predicate<T>; 4]> = predicates.into_iter().collect();
    Predicate::new(move |value: &T| predicates.iter().all(|predicate| predicate.test(value)))
}

/// Returns a predicate accepting values at least one given predicate
/// accepts.
///
/// With no predicates the result rejects everything. Each evaluation walks
/// the predicates in order and stops at the first acceptance.
///
/// # Examples
///
/// ```rust
/// use combars::predicate::{Predicate, any_of};
///
/// let is_negative = Predicate::new(|x: &i32| *x < 0);
/// let is_even = Predicate::new(|x: &i32| x % 2 == 0);
///
/// let either = any_of([is_negative, is_even]);
/// assert!(either.test(&-3));
/// assert!(either.test(&4));
/// assert!(!either.test(&3));
/// ```
pub fn any_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: SmallVec<[Predicate<T>; 4]> = predicates.into_iter().collect();
    Predicate::new(move |value: &T| predicates.iter().any(|predicate| predicate.test(value)))
}

/// Returns a predicate accepting values no given predicate accepts.
///
/// With no predicates the result accepts everything (vacuous truth).
///
/// # Examples
///
/// ```rust
/// use combars::predicate::{Predicate, none_of};
///
/// let is_negative = Predicate::new(|x: &i32| *x < 0);
/// let is_huge = Predicate::new(|x: &i32| *x > 1000);
///
/// let in_range = none_of([is_negative, is_huge]);
/// assert!(in_range.test(&10));
/// assert!(!in_range.test(&-1));
/// ```
pub fn none_of<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: SmallVec<[Predicate<T>; 4]> = predicates.into_iter().collect();
    Predicate::new(move |value: &T| !predicates.iter().any(|predicate| predicate.test(value)))
}

// =============================================================================
// Collection Quantifiers
// =============================================================================

/// Lifts an element predicate to a collection predicate accepting
/// collections whose every element is accepted.
///
/// The empty collection is accepted (vacuous truth). Evaluation stops at
/// the first rejected element.
///
/// # Examples
///
/// ```rust
/// use combars::predicate::{Predicate, for_all};
///
/// let is_positive = Predicate::new(|x: &i32| *x > 0);
/// let all_positive = for_all::<i32, Vec<i32>>(is_positive);
///
/// assert!(all_positive.test(&vec![1, 2, 3]));
/// assert!(!all_positive.test(&vec![1, -2, 3]));
/// assert!(all_positive.test(&Vec::new()));
/// ```
pub fn for_all<T, C>(predicate: Predicate<T>) -> Predicate<C>
where
    T: 'static,
    C: 'static,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
{
    Predicate::new(move |collection: &C| {
        collection.into_iter().all(|element| predicate.test(element))
    })
}

/// Lifts an element predicate to a collection predicate accepting
/// collections containing at least one accepted element.
///
/// The empty collection is rejected. Evaluation stops at the first
/// accepted element.
///
/// # Examples
///
/// ```rust
/// use combars::predicate::{Predicate, exists};
///
/// let is_negative = Predicate::new(|x: &i32| *x < 0);
/// let has_negative = exists::<i32, Vec<i32>>(is_negative);
///
/// assert!(has_negative.test(&vec![1, -2, 3]));
/// assert!(!has_negative.test(&vec![1, 2, 3]));
/// assert!(!has_negative.test(&Vec::new()));
/// ```
pub fn exists<T, C>(predicate: Predicate<T>) -> Predicate<C>
where
    T: 'static,
    C: 'static,
    for<'a> &'a C: IntoIterator<Item = &'a T>,
{
    Predicate::new(move |collection: &C| {
        collection.into_iter().any(|element| predicate.test(element))
    })
}

// =============================================================================
// Membership
// =============================================================================

/// Returns a predicate accepting exactly the given values.
///
/// With no values the result rejects everything.
///
/// # Examples
///
/// ```rust
/// use combars::predicate::is_in;
///
/// let is_vowel = is_in(['a', 'e', 'i', 'o', 'u']);
/// assert!(is_vowel.test(&'e'));
/// assert!(!is_vowel.test(&'z'));
/// ```
pub fn is_in<T>(values: impl IntoIterator<Item = T>) -> Predicate<T>
where
    T: PartialEq + 'static,
{
    let values: SmallVec<[T; 4]> = values.into_iter().collect();
    Predicate::new(move |candidate: &T| values.iter().any(|value| value == candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_even() -> Predicate<i32> {
        Predicate::new(|x: &i32| x % 2 == 0)
    }

    fn is_positive() -> Predicate<i32> {
        Predicate::new(|x: &i32| *x > 0)
    }

    #[rstest]
    #[case(4, true)]
    #[case(3, false)]
    #[case(-4, false)]
    #[case(-3, false)]
    fn test_and_truth_table(#[case] input: i32, #[case] expected: bool) {
        assert_eq!(is_even().and(&is_positive()).test(&input), expected);
    }

    #[rstest]
    #[case(4, true)]
    #[case(3, true)]
    #[case(-4, true)]
    #[case(-3, false)]
    fn test_or_truth_table(#[case] input: i32, #[case] expected: bool) {
        assert_eq!(is_even().or(&is_positive()).test(&input), expected);
    }

    #[rstest]
    fn test_negate_flips_every_answer() {
        let is_odd = is_even().negate();
        assert!(is_odd.test(&3));
        assert!(!is_odd.test(&4));
    }

    #[rstest]
    fn test_empty_set_combinators() {
        assert!(all_of::<i32, _>([]).test(&-100));
        assert!(!any_of::<i32, _>([]).test(&-100));
        assert!(none_of::<i32, _>([]).test(&-100));
    }

    #[rstest]
    fn test_combination_preserves_originals() {
        let even = is_even();
        let positive = is_positive();
        let _combined = even.and(&positive);

        assert!(even.test(&-4));
        assert!(positive.test(&1));
    }
}
