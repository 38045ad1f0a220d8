//! Fundamental combinators and collection folding helpers.
//!
//! - [`identity`]: the I combinator, returns its argument unchanged
//! - [`constant`]: the K combinator, ignores its input
//! - [`flip`]: the C combinator, swaps a binary function's arguments
//! - [`fold_left`], [`fold_right`], [`reduce`]: collapse a collection with
//!   a combining operation

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `f.and_then(identity)` behaves as `f`.
///
/// # Examples
///
/// ```
/// use combars::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use combars::function::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f))` behaves as `f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use combars::function::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Folds a collection front to back, threading an accumulator seeded with
/// `seed`.
///
/// # Examples
///
/// ```
/// use combars::function::fold_left;
///
/// let letters = vec!["a", "b", "c", "d", "e"];
/// let joined = fold_left(letters, "_".to_string(), |acc, item| acc + item);
/// assert_eq!(joined, "_abcde");
/// ```
pub fn fold_left<T, B, I, F>(items: I, seed: B, operation: F) -> B
where
    I: IntoIterator<Item = T>,
    F: Fn(B, T) -> B,
{
    items
        .into_iter()
        .fold(seed, |accumulator, item| operation(accumulator, item))
}

/// Folds a collection back to front, threading an accumulator seeded with
/// `seed`.
///
/// # Examples
///
/// ```
/// use combars::function::fold_right;
///
/// let letters = vec!["a", "b", "c", "d", "e"];
/// let joined = fold_right(letters, "_".to_string(), |item, acc| item.to_string() + &acc);
/// assert_eq!(joined, "abcde_");
/// ```
pub fn fold_right<T, B, I, F>(items: I, seed: B, operation: F) -> B
where
    I: IntoIterator<Item = T>,
    I::IntoIter: DoubleEndedIterator,
    F: Fn(T, B) -> B,
{
    items
        .into_iter()
        .rfold(seed, |accumulator, item| operation(item, accumulator))
}

/// Reduces a collection to a single element with a combining operation,
/// using the first element as the seed.
///
/// # Panics
///
/// Panics if the collection is empty: reducing without a seed requires at
/// least one element, and an empty reduction is a contract violation at
/// the call site, not a recoverable outcome.
///
/// # Examples
///
/// ```
/// use combars::function::reduce;
///
/// let letters = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// assert_eq!(reduce(letters, |a, b| a + &b), "abc");
/// ```
pub fn reduce<T, I, F>(items: I, operation: F) -> T
where
    I: IntoIterator<Item = T>,
    F: Fn(T, T) -> T,
{
    let mut iterator = items.into_iter();
    let Some(seed) = iterator.next() else {
        panic!("reduce requires at least one element")
    };
    iterator.fold(seed, |accumulator, item| operation(accumulator, item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(power(2, 3), 8);
        assert_eq!(flipped_power(3, 2), 8);
    }

    #[test]
    fn test_reduce_nonempty() {
        assert_eq!(reduce(vec![1, 2, 3, 4], |a, b| a + b), 10);
    }

    #[test]
    #[should_panic(expected = "at least one element")]
    fn test_reduce_empty_panics() {
        let _ = reduce(Vec::<i32>::new(), |a, b| a + b);
    }
}
