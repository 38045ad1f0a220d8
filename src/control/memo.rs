//! Single-threaded memoization.
//!
//! This module provides the `Memo<T, F>` type: a single-slot cache around
//! a nullary rule. The rule runs on the first call and never again; every
//! later call clones the cached result.

use std::cell::RefCell;
use std::fmt;

/// The internal state of a [`Memo`] (and of
/// [`SyncMemo`](super::SyncMemo)).
///
/// Tracks whether the rule is still pending, has produced a cached value,
/// or panicked while running.
#[derive(Debug)]
pub enum MemoState<T, F> {
    /// The rule has not run yet. Contains the rule.
    Pending(F),
    /// The rule has run. Contains the cached value.
    Cached(T),
    /// The rule panicked. The cache is unusable.
    Poisoned,
}

/// Error returned when a poisoned memo is consumed.
///
/// Returned by [`Memo::into_value`] and
/// [`SyncMemo::into_value`](super::SyncMemo::into_value) when the wrapped
/// rule panicked during a previous call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoPoisonedError;

impl fmt::Display for MemoPoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Memo: rule panicked during a previous call")
    }
}

impl std::error::Error for MemoPoisonedError {}

/// A single-slot memoizing cache around a nullary rule.
///
/// `Memo<T, F>` defers the rule until the first [`call`](Self::call); the
/// result is cached and cloned out on every subsequent call, guaranteeing
/// the rule executes at most once over the memo's lifetime. This is a
/// caching guarantee, not a freshness guarantee: the memo never
/// re-evaluates, even if external state the rule reads has changed.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. For concurrent access use
/// [`SyncMemo`](super::SyncMemo).
///
/// # Examples
///
/// ```rust
/// use combars::control::Memo;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let memo = Memo::new(|| {
///     calls.set(calls.get() + 1);
///     "computed".to_string()
/// });
///
/// assert_eq!(calls.get(), 0); // Nothing has run yet
///
/// let first = memo.call();
/// let second = memo.call();
/// assert_eq!(first, second);
/// assert_eq!(calls.get(), 1); // Still 1, not 2
/// ```
pub struct Memo<T, F = fn() -> T> {
    state: RefCell<MemoState<T, F>>,
}

impl<T, F: FnOnce() -> T> Memo<T, F> {
    /// Creates a memo around the given rule.
    ///
    /// The rule will not run until [`call`](Self::call) is invoked.
    #[inline]
    pub fn new(rule: F) -> Self {
        Self {
            state: RefCell::new(MemoState::Pending(rule)),
        }
    }

    /// Returns the memoized value, running the rule if this is the first
    /// call.
    ///
    /// # Panics
    ///
    /// - If the rule panics, the memo becomes poisoned and all future
    ///   calls panic.
    /// - If the memo is already poisoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::control::Memo;
    ///
    /// let memo = Memo::new(|| 42);
    /// assert_eq!(memo.call(), 42);
    /// ```
    pub fn call(&self) -> T
    where
        T: Clone,
    {
        // Short borrow first so the rule does not run under an active
        // shared borrow.
        let needs_evaluation = {
            let state = self.state.borrow();
            match &*state {
                MemoState::Cached(value) => return value.clone(),
                MemoState::Poisoned => panic!("Memo instance has been poisoned"),
                MemoState::Pending(_) => true,
            }
        };

        if needs_evaluation {
            self.evaluate();
        }

        match &*self.state.borrow() {
            MemoState::Cached(value) => value.clone(),
            _ => panic!("Memo should be cached at this point"),
        }
    }

    /// Runs the rule and transitions Pending to Cached.
    ///
    /// The state is parked at Poisoned while the rule runs, so a panic
    /// inside the rule leaves the memo poisoned.
    fn evaluate(&self) {
        let mut state = self.state.borrow_mut();

        match &*state {
            MemoState::Cached(_) => return,
            MemoState::Poisoned => panic!("Memo instance has been poisoned"),
            MemoState::Pending(_) => {}
        }

        let MemoState::Pending(rule) = std::mem::replace(&mut *state, MemoState::Poisoned) else {
            unreachable!()
        };

        let value = rule();

        *state = MemoState::Cached(value);
    }

    /// Consumes the memo and returns the value, running the rule if it has
    /// not run yet.
    ///
    /// # Errors
    ///
    /// Returns [`MemoPoisonedError`] if the rule panicked during a
    /// previous call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::control::Memo;
    ///
    /// let memo = Memo::new(|| 42);
    /// assert_eq!(memo.into_value(), Ok(42));
    /// ```
    pub fn into_value(self) -> Result<T, MemoPoisonedError> {
        match self.state.into_inner() {
            MemoState::Cached(value) => Ok(value),
            MemoState::Pending(rule) => Ok(rule()),
            MemoState::Poisoned => Err(MemoPoisonedError),
        }
    }
}

impl<T, F> Memo<T, F> {
    /// Returns whether the rule has already run and cached a value.
    ///
    /// Does not trigger evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combars::control::Memo;
    ///
    /// let memo = Memo::new(|| 42);
    /// assert!(!memo.is_cached());
    ///
    /// let _ = memo.call();
    /// assert!(memo.is_cached());
    /// ```
    #[inline]
    pub fn is_cached(&self) -> bool {
        matches!(&*self.state.borrow(), MemoState::Cached(_))
    }

    /// Returns whether the rule panicked during a previous call.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), MemoState::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Memo<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            MemoState::Cached(value) => formatter.debug_tuple("Memo").field(value).finish(),
            MemoState::Pending(_) => formatter.debug_tuple("Memo").field(&"<pending>").finish(),
            MemoState::Poisoned => formatter.debug_tuple("Memo").field(&"<poisoned>").finish(),
        }
    }
}
