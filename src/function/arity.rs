//! The arity-N function wrapper family.
//!
//! Each `FunctionN` holds a single invocation rule behind an [`Rc`], so the
//! wrappers are cheap to clone and every derived function (curried link,
//! partial application, composition) shares the original rule instead of
//! duplicating it. This mirrors how the currying machinery shares the
//! wrapped function across closure invocations.
//!
//! # Design Decisions
//!
//! - Argument types fixed by `curried`, `partial`, and `defer` must
//!   implement [`Clone`], because the derived functions are reusable: each
//!   invocation needs its own copy of the captured inputs.
//! - Transformation methods borrow the receiver; the returned function
//!   holds a new handle to the same rule. The original stays usable.
//! - Invalid arity manipulation (currying a nullary function, fixing more
//!   inputs than exist) is unrepresentable: the methods simply do not
//!   exist on the corresponding wrapper, so the contract violation is a
//!   compile error at the call site.

use std::fmt;
use std::rc::Rc;

#[cfg(feature = "container")]
use crate::container::{Maybe, Outcome};

// =============================================================================
// Function0
// =============================================================================

/// A nullary function value: a rule producing an output from no inputs.
///
/// `Function0` is the terminal shape of partial application: fixing every
/// input of a larger function with `defer` yields a `Function0` whose rule
/// has not yet run.
///
/// # Examples
///
/// ```
/// use combars::function::Function0;
///
/// let greeter = Function0::new(|| "Hello!".to_string());
/// assert_eq!(greeter.apply(), "Hello!");
/// ```
pub struct Function0<R> {
    rule: Rc<dyn Fn() -> R>,
}

impl<R: 'static> Function0<R> {
    /// Creates a nullary function from the given rule.
    #[inline]
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn() -> R + 'static,
    {
        Self {
            rule: Rc::new(rule),
        }
    }

    /// Invokes the rule and returns its output.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function0;
    ///
    /// let forty_two = Function0::new(|| 42);
    /// assert_eq!(forty_two.apply(), 42);
    /// ```
    #[inline]
    pub fn apply(&self) -> R {
        (self.rule)()
    }
}

#[cfg(feature = "control")]
impl<R: Clone + 'static> Function0<R> {
    /// Returns a memoizing wrapper around this function.
    ///
    /// The underlying rule executes at most once across any number of
    /// `apply` calls on the returned function; the first result is cached
    /// and cloned out on every subsequent call. This is a caching
    /// guarantee, not a freshness guarantee: the wrapper never re-evaluates
    /// even if external state the rule reads has changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function0;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let expensive = Function0::new(move || {
    ///     counter.set(counter.get() + 1);
    ///     10
    /// });
    ///
    /// let memoized = expensive.memoized();
    /// for _ in 0..10 {
    ///     assert_eq!(memoized.apply(), 10);
    /// }
    /// assert_eq!(calls.get(), 1);
    /// ```
    pub fn memoized(&self) -> Self {
        let rule = Rc::clone(&self.rule);
        let cache = Rc::new(crate::control::Memo::new(move || rule()));
        Self::new(move || cache.call())
    }
}

impl<R> Clone for Function0<R> {
    fn clone(&self) -> Self {
        Self {
            rule: Rc::clone(&self.rule),
        }
    }
}

impl<R> fmt::Debug for Function0<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function0").field(&"<rule>").finish()
    }
}

// =============================================================================
// Function1
// =============================================================================

/// A unary function value: a rule mapping one typed input to one output.
///
/// `Function1` is the only arity supporting composition, and the link type
/// of every curried chain.
///
/// # Examples
///
/// ```
/// use combars::function::Function1;
///
/// let upper_caser = Function1::new(|text: &str| text.to_uppercase());
/// assert_eq!(upper_caser.apply("hello"), "HELLO");
/// ```
pub struct Function1<A, B> {
    rule: Rc<dyn Fn(A) -> B>,
}

impl<A: 'static, B: 'static> Function1<A, B> {
    /// Creates a unary function from the given rule.
    #[inline]
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self {
            rule: Rc::new(rule),
        }
    }

    /// Invokes the rule with the given input.
    #[inline]
    pub fn apply(&self, input: A) -> B {
        (self.rule)(input)
    }

    /// Composes left-to-right: the returned function computes
    /// `after(self(x))`.
    ///
    /// Composition is associative: `f.and_then(g).and_then(h)` behaves
    /// identically to `f.and_then(g.and_then(h))` for all inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function1;
    ///
    /// let stringify = Function1::new(|number: i32| number.to_string());
    /// let enthusiastic = Function1::new(|text: String| format!("{text}!!!"));
    ///
    /// let composed = stringify.and_then(enthusiastic);
    /// assert_eq!(composed.apply(10), "10!!!");
    /// ```
    pub fn and_then<C: 'static>(&self, after: Function1<B, C>) -> Function1<A, C> {
        let rule = Rc::clone(&self.rule);
        Function1::new(move |input| after.apply(rule(input)))
    }

    /// Composes right-to-left: the returned function computes
    /// `self(before(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function1;
    ///
    /// let stringify = Function1::new(|number: i32| number.to_string());
    /// let enthusiastic = Function1::new(|text: String| format!("{text}!!!"));
    ///
    /// let composed = enthusiastic.compose(stringify);
    /// assert_eq!(composed.apply(10), "10!!!");
    /// ```
    pub fn compose<Z: 'static>(&self, before: Function1<Z, A>) -> Function1<Z, B> {
        let rule = Rc::clone(&self.rule);
        Function1::new(move |input| rule(before.apply(input)))
    }

    /// Currying a unary function is the identity transformation.
    ///
    /// The chain of one single-argument function is the function itself.
    #[inline]
    pub fn curried(&self) -> Self {
        self.clone()
    }

    /// Fixes the single input without evaluating the rule, returning a
    /// deferred [`Function0`].
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function1;
    ///
    /// let double = Function1::new(|x: i32| x * 2);
    /// let deferred = double.defer(21);
    /// assert_eq!(deferred.apply(), 42);
    /// ```
    pub fn defer(&self, input: A) -> Function0<B>
    where
        A: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function0::new(move || rule(input.clone()))
    }
}

impl<A: 'static> Function1<A, A> {
    /// The identity function: returns its input unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function1;
    ///
    /// let identity = Function1::<i32, i32>::identity();
    /// assert_eq!(identity.apply(1), 1);
    /// ```
    pub fn identity() -> Self {
        Self::new(|value| value)
    }
}

impl<A: 'static, B: Clone + 'static> Function1<A, B> {
    /// A function that ignores its input and always returns `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function1;
    ///
    /// let always_five = Function1::<&str, i32>::constant(5);
    /// assert_eq!(always_five.apply("ignored"), 5);
    /// ```
    pub fn constant(value: B) -> Self {
        Self::new(move |_| value.clone())
    }
}

#[cfg(feature = "container")]
impl<A: 'static, B: 'static> Function1<A, Maybe<B>> {
    /// Totalizes a fallible unary rule into one returning [`Maybe`].
    ///
    /// The rule runs exactly once per application of the lifted function;
    /// a successful evaluation yields `Present`, a failed one yields
    /// `Absent`. No failure escapes the lifting boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::container::Maybe;
    /// use combars::function::Function1;
    ///
    /// let safe_parse = Function1::lift(|text: &str| text.parse::<i32>());
    /// assert_eq!(safe_parse.apply("10"), Maybe::Present(10));
    /// assert_eq!(safe_parse.apply("oops"), Maybe::Absent);
    /// ```
    pub fn lift<E, F>(rule: F) -> Self
    where
        F: Fn(A) -> Result<B, E> + 'static,
    {
        Self::new(move |input| match rule(input) {
            Ok(value) => Maybe::Present(value),
            Err(_) => Maybe::Absent,
        })
    }
}

#[cfg(feature = "container")]
impl<A: 'static, B: 'static, E: 'static> Function1<A, Outcome<B, E>> {
    /// Totalizes a fallible unary rule into one returning [`Outcome`],
    /// capturing the error instead of discarding it.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::container::Outcome;
    /// use combars::function::Function1;
    ///
    /// let safe_parse = Function1::lift_outcome(|text: &str| text.parse::<i32>());
    /// assert_eq!(safe_parse.apply("10"), Outcome::Success(10));
    /// assert!(safe_parse.apply("oops").is_failure());
    /// ```
    pub fn lift_outcome<F>(rule: F) -> Self
    where
        F: Fn(A) -> Result<B, E> + 'static,
    {
        Self::new(move |input| match rule(input) {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        })
    }
}

impl<A, B> Clone for Function1<A, B> {
    fn clone(&self) -> Self {
        Self {
            rule: Rc::clone(&self.rule),
        }
    }
}

impl<A, B> fmt::Debug for Function1<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function1").field(&"<rule>").finish()
    }
}

// =============================================================================
// Function2
// =============================================================================

/// A binary function value.
///
/// # Examples
///
/// ```
/// use combars::function::Function2;
///
/// let add = Function2::new(|a: i32, b: i32| a + b);
/// assert_eq!(add.apply(2, 3), 5);
/// ```
pub struct Function2<A, B, C> {
    rule: Rc<dyn Fn(A, B) -> C>,
}

impl<A: 'static, B: 'static, C: 'static> Function2<A, B, C> {
    /// Creates a binary function from the given rule.
    #[inline]
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(A, B) -> C + 'static,
    {
        Self {
            rule: Rc::new(rule),
        }
    }

    /// Invokes the rule with both inputs.
    #[inline]
    pub fn apply(&self, first: A, second: B) -> C {
        (self.rule)(first, second)
    }

    /// Converts into a chain of two single-argument functions.
    ///
    /// Supplying the first input returns the function awaiting the second;
    /// supplying the second triggers evaluation. The rule does not run
    /// until the last input arrives, and every link is reusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function2;
    ///
    /// let multiply = Function2::new(|a: i32, b: i32| a * b);
    /// let curried = multiply.curried();
    ///
    /// let double = curried.apply(2);
    /// let triple = curried.apply(3);
    ///
    /// assert_eq!(double.apply(5), 10);
    /// assert_eq!(triple.apply(5), 15);
    /// ```
    pub fn curried(&self) -> Function1<A, Function1<B, C>>
    where
        A: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function1::new(move |first: A| {
            let rule = Rc::clone(&rule);
            Function1::new(move |second: B| rule(first.clone(), second))
        })
    }

    /// Fixes the first input, producing a unary function of the rest.
    ///
    /// Fixing never evaluates the rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function2;
    ///
    /// let add = Function2::new(|a: i32, b: i32| a + b);
    /// let add_five = add.partial(5);
    ///
    /// assert_eq!(add_five.apply(3), 8);
    /// assert_eq!(add_five.apply(10), 15);
    /// ```
    pub fn partial(&self, first: A) -> Function1<B, C>
    where
        A: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function1::new(move |second| rule(first.clone(), second))
    }

    /// Fixes both inputs without evaluating, returning a deferred
    /// [`Function0`].
    pub fn defer(&self, first: A, second: B) -> Function0<C>
    where
        A: Clone,
        B: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function0::new(move || rule(first.clone(), second.clone()))
    }
}

#[cfg(feature = "container")]
impl<A: 'static, B: 'static, C: 'static> Function2<A, B, Maybe<C>> {
    /// Totalizes a fallible binary rule into one returning [`Maybe`].
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::container::Maybe;
    /// use combars::function::Function2;
    ///
    /// let safe_divide = Function2::lift(|a: i32, b: i32| {
    ///     a.checked_div(b).ok_or("division by zero")
    /// });
    ///
    /// assert_eq!(safe_divide.apply(8, 2), Maybe::Present(4));
    /// assert_eq!(safe_divide.apply(1, 0), Maybe::Absent);
    /// ```
    pub fn lift<E, F>(rule: F) -> Self
    where
        F: Fn(A, B) -> Result<C, E> + 'static,
    {
        Self::new(move |first, second| match rule(first, second) {
            Ok(value) => Maybe::Present(value),
            Err(_) => Maybe::Absent,
        })
    }
}

#[cfg(feature = "container")]
impl<A: 'static, B: 'static, C: 'static, E: 'static> Function2<A, B, Outcome<C, E>> {
    /// Totalizes a fallible binary rule into one returning [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::container::Outcome;
    /// use combars::function::Function2;
    ///
    /// let safe_divide = Function2::lift_outcome(|a: i32, b: i32| {
    ///     a.checked_div(b).ok_or("division by zero")
    /// });
    ///
    /// assert_eq!(safe_divide.apply(8, 2), Outcome::Success(4));
    /// assert_eq!(safe_divide.apply(1, 0), Outcome::Failure("division by zero"));
    /// ```
    pub fn lift_outcome<F>(rule: F) -> Self
    where
        F: Fn(A, B) -> Result<C, E> + 'static,
    {
        Self::new(move |first, second| match rule(first, second) {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        })
    }
}

impl<A, B, C> Clone for Function2<A, B, C> {
    fn clone(&self) -> Self {
        Self {
            rule: Rc::clone(&self.rule),
        }
    }
}

impl<A, B, C> fmt::Debug for Function2<A, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function2").field(&"<rule>").finish()
    }
}

// =============================================================================
// Function3
// =============================================================================

/// A ternary function value.
pub struct Function3<A, B, C, D> {
    rule: Rc<dyn Fn(A, B, C) -> D>,
}

impl<A: 'static, B: 'static, C: 'static, D: 'static> Function3<A, B, C, D> {
    /// Creates a ternary function from the given rule.
    #[inline]
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(A, B, C) -> D + 'static,
    {
        Self {
            rule: Rc::new(rule),
        }
    }

    /// Invokes the rule with all three inputs.
    #[inline]
    pub fn apply(&self, first: A, second: B, third: C) -> D {
        (self.rule)(first, second, third)
    }

    /// Converts into a chain of three single-argument functions.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function3;
    ///
    /// let volume = Function3::new(|w: f64, h: f64, d: f64| w * h * d);
    /// let curried = volume.curried();
    ///
    /// let result = curried.apply(2.0).apply(3.0).apply(4.0);
    /// assert!((result - 24.0).abs() < f64::EPSILON);
    /// ```
    pub fn curried(&self) -> Function1<A, Function1<B, Function1<C, D>>>
    where
        A: Clone,
        B: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function1::new(move |first: A| {
            let rule = Rc::clone(&rule);
            Function1::new(move |second: B| {
                let rule = Rc::clone(&rule);
                let first = first.clone();
                Function1::new(move |third: C| rule(first.clone(), second.clone(), third))
            })
        })
    }

    /// Fixes the first input, producing a binary function of the rest.
    pub fn partial1(&self, first: A) -> Function2<B, C, D>
    where
        A: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function2::new(move |second, third| rule(first.clone(), second, third))
    }

    /// Fixes the first two inputs, producing a unary function of the rest.
    pub fn partial2(&self, first: A, second: B) -> Function1<C, D>
    where
        A: Clone,
        B: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function1::new(move |third| rule(first.clone(), second.clone(), third))
    }

    /// Fixes all three inputs without evaluating, returning a deferred
    /// [`Function0`].
    pub fn defer(&self, first: A, second: B, third: C) -> Function0<D>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function0::new(move || rule(first.clone(), second.clone(), third.clone()))
    }
}

#[cfg(feature = "container")]
impl<A: 'static, B: 'static, C: 'static, D: 'static> Function3<A, B, C, Maybe<D>> {
    /// Totalizes a fallible ternary rule into one returning [`Maybe`].
    pub fn lift<E, F>(rule: F) -> Self
    where
        F: Fn(A, B, C) -> Result<D, E> + 'static,
    {
        Self::new(move |first, second, third| match rule(first, second, third) {
            Ok(value) => Maybe::Present(value),
            Err(_) => Maybe::Absent,
        })
    }
}

#[cfg(feature = "container")]
impl<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static> Function3<A, B, C, Outcome<D, E>> {
    /// Totalizes a fallible ternary rule into one returning [`Outcome`].
    pub fn lift_outcome<F>(rule: F) -> Self
    where
        F: Fn(A, B, C) -> Result<D, E> + 'static,
    {
        Self::new(move |first, second, third| match rule(first, second, third) {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        })
    }
}

impl<A, B, C, D> Clone for Function3<A, B, C, D> {
    fn clone(&self) -> Self {
        Self {
            rule: Rc::clone(&self.rule),
        }
    }
}

impl<A, B, C, D> fmt::Debug for Function3<A, B, C, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function3").field(&"<rule>").finish()
    }
}

// =============================================================================
// Function4
// =============================================================================

/// A quaternary function value.
pub struct Function4<A, B, C, D, E> {
    rule: Rc<dyn Fn(A, B, C, D) -> E>,
}

impl<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static> Function4<A, B, C, D, E> {
    /// Creates a quaternary function from the given rule.
    #[inline]
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(A, B, C, D) -> E + 'static,
    {
        Self {
            rule: Rc::new(rule),
        }
    }

    /// Invokes the rule with all four inputs.
    #[inline]
    pub fn apply(&self, first: A, second: B, third: C, fourth: D) -> E {
        (self.rule)(first, second, third, fourth)
    }

    /// Converts into a chain of four single-argument functions.
    ///
    /// # Examples
    ///
    /// ```
    /// use combars::function::Function4;
    ///
    /// let sum = Function4::new(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
    /// let curried = sum.curried();
    ///
    /// assert_eq!(curried.apply(1).apply(2).apply(3).apply(4), 10);
    /// ```
    pub fn curried(&self) -> Function1<A, Function1<B, Function1<C, Function1<D, E>>>>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function1::new(move |first: A| {
            let rule = Rc::clone(&rule);
            Function1::new(move |second: B| {
                let rule = Rc::clone(&rule);
                let first = first.clone();
                Function1::new(move |third: C| {
                    let rule = Rc::clone(&rule);
                    let first = first.clone();
                    let second = second.clone();
                    Function1::new(move |fourth: D| {
                        rule(first.clone(), second.clone(), third.clone(), fourth)
                    })
                })
            })
        })
    }

    /// Fixes the first input, producing a ternary function of the rest.
    pub fn partial1(&self, first: A) -> Function3<B, C, D, E>
    where
        A: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function3::new(move |second, third, fourth| rule(first.clone(), second, third, fourth))
    }

    /// Fixes the first two inputs, producing a binary function of the rest.
    pub fn partial2(&self, first: A, second: B) -> Function2<C, D, E>
    where
        A: Clone,
        B: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function2::new(move |third, fourth| rule(first.clone(), second.clone(), third, fourth))
    }

    /// Fixes the first three inputs, producing a unary function of the
    /// rest.
    pub fn partial3(&self, first: A, second: B, third: C) -> Function1<D, E>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function1::new(move |fourth| rule(first.clone(), second.clone(), third.clone(), fourth))
    }

    /// Fixes all four inputs without evaluating, returning a deferred
    /// [`Function0`].
    pub fn defer(&self, first: A, second: B, third: C, fourth: D) -> Function0<E>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        D: Clone,
    {
        let rule = Rc::clone(&self.rule);
        Function0::new(move || {
            rule(
                first.clone(),
                second.clone(),
                third.clone(),
                fourth.clone(),
            )
        })
    }
}

impl<A, B, C, D, E> Clone for Function4<A, B, C, D, E> {
    fn clone(&self) -> Self {
        Self {
            rule: Rc::clone(&self.rule),
        }
    }
}

impl<A, B, C, D, E> fmt::Debug for Function4<A, B, C, D, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function4").field(&"<rule>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    #[test]
    fn test_function2_curried_basic() {
        let curried = Function2::new(add).curried();
        assert_eq!(curried.apply(5).apply(3), 8);
    }

    #[test]
    fn test_function2_partial_reusable() {
        let add_five = Function2::new(add).partial(5);
        assert_eq!(add_five.apply(3), 8);
        assert_eq!(add_five.apply(10), 15);
    }

    #[test]
    fn test_defer_does_not_evaluate() {
        let evaluated = Rc::new(Cell::new(false));
        let witness = Rc::clone(&evaluated);
        let function = Function2::new(move |a: i32, b: i32| {
            witness.set(true);
            a + b
        });

        let deferred = function.defer(3, 5);
        assert!(!evaluated.get());
        assert_eq!(deferred.apply(), 8);
        assert!(evaluated.get());
    }

    #[test]
    fn test_function1_identity() {
        let identity = Function1::<i32, i32>::identity();
        assert_eq!(identity.apply(7), 7);
    }
}
