//! Thread-safe memoization.
//!
//! This module provides the `SyncMemo<T, F>` type: the thread-safe
//! counterpart of [`Memo`](super::Memo). Multiple threads can call
//! [`call`](SyncMemo::call) concurrently, yet the wrapped rule executes at
//! most once in total: the Pending-to-Cached transition is serialized
//! behind a mutex, and racing callers block until the value exists rather
//! than triggering their own evaluation.
//!
//! # Poisoning Note
//!
//! If the rule panics, the memo becomes **poisoned** and all subsequent
//! calls panic. Returning partial state after a panic would break the
//! at-most-once contract, so the poisoned state is permanent. Callers can
//! inspect it via [`is_poisoned`](SyncMemo::is_poisoned).

use std::fmt;

use parking_lot::Mutex;

use super::memo::{MemoPoisonedError, MemoState};

/// A thread-safe single-slot memoizing cache around a nullary rule.
///
/// The first caller to [`call`](Self::call) runs the rule while holding
/// the internal lock; every concurrent caller blocks on that lock and then
/// reads the cached value. The rule therefore executes at most once across
/// all threads, no matter how the first invocations race.
///
/// # Type Parameters
///
/// * `T` - The type of the cached value
/// * `F` - The type of the rule (defaults to `fn() -> T`)
///
/// # Thread Safety
///
/// `SyncMemo` is `Send` and `Sync` when `T: Send` and `F: Send`.
///
/// # Examples
///
/// ```rust
/// use combars::control::SyncMemo;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
///
/// let executions = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&executions);
/// let memo = Arc::new(SyncMemo::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
///     42
/// }));
///
/// let handles: Vec<_> = (0..10)
///     .map(|_| {
///         let memo = Arc::clone(&memo);
///         thread::spawn(move || memo.call())
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 42);
/// }
/// assert_eq!(executions.load(Ordering::SeqCst), 1);
/// ```
pub struct SyncMemo<T, F = fn() -> T> {
    state: Mutex<MemoState<T, F>>,
}

impl<T, F: FnOnce() -> T> SyncMemo<T, F> {
    /// Creates a thread-safe memo around the given rule.
    ///
    /// The rule will not run until [`call`](Self::call) is invoked.
    #[inline]
    pub const fn new(rule: F) -> Self {
        Self {
            state: Mutex::new(MemoState::Pending(rule)),
        }
    }

    /// Returns the memoized value, running the rule if no call has
    /// completed yet.
    ///
    /// The lock is held while the rule runs, so concurrent callers block
    /// until the value is available instead of evaluating independently.
    ///
    /// # Panics
    ///
    /// - If the rule panics, the memo becomes poisoned and all future
    ///   calls panic.
    /// - If the memo is already poisoned.
    pub fn call(&self) -> T
    where
        T: Clone,
    {
        let mut state = self.state.lock();

        match &*state {
            MemoState::Cached(value) => return value.clone(),
            MemoState::Poisoned => panic!("SyncMemo instance has been poisoned"),
            MemoState::Pending(_) => {}
        }

        let MemoState::Pending(rule) = std::mem::replace(&mut *state, MemoState::Poisoned) else {
            unreachable!()
        };

        let value = rule();
        let result = value.clone();

        *state = MemoState::Cached(value);
        result
    }

    /// Consumes the memo and returns the value, running the rule if it has
    /// not run yet.
    ///
    /// # Errors
    ///
    /// Returns [`MemoPoisonedError`] if the rule panicked during a
    /// previous call.
    pub fn into_value(self) -> Result<T, MemoPoisonedError> {
        match self.state.into_inner() {
            MemoState::Cached(value) => Ok(value),
            MemoState::Pending(rule) => Ok(rule()),
            MemoState::Poisoned => Err(MemoPoisonedError),
        }
    }
}

impl<T, F> SyncMemo<T, F> {
    /// Returns whether the rule has already run and cached a value.
    ///
    /// Does not trigger evaluation.
    #[inline]
    pub fn is_cached(&self) -> bool {
        matches!(&*self.state.lock(), MemoState::Cached(_))
    }

    /// Returns whether the rule panicked during a previous call.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.lock(), MemoState::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SyncMemo<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        match &*state {
            MemoState::Cached(value) => formatter.debug_tuple("SyncMemo").field(value).finish(),
            MemoState::Pending(_) => formatter.debug_tuple("SyncMemo").field(&"<pending>").finish(),
            MemoState::Poisoned => {
                formatter.debug_tuple("SyncMemo").field(&"<poisoned>").finish()
            }
        }
    }
}

static_assertions::assert_impl_all!(SyncMemo<i32>: Send, Sync);
static_assertions::assert_impl_all!(SyncMemo<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[rstest]
    fn test_sync_memo_caches_first_result() {
        let executions = AtomicUsize::new(0);
        let memo = SyncMemo::new(|| {
            executions.fetch_add(1, Ordering::SeqCst);
            42
        });

        assert_eq!(memo.call(), 42);
        assert_eq!(memo.call(), 42);
        assert_eq!(executions.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_sync_memo_racing_callers_share_one_execution() {
        let executions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&executions);
        let memo = Arc::new(SyncMemo::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            42
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let memo = Arc::clone(&memo);
                thread::spawn(move || memo.call())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(executions.load(Ordering::SeqCst), 1);
    }
}
