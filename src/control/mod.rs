//! Memoization primitives.
//!
//! This module provides single-slot caches around saturated (nullary)
//! rules:
//!
//! - [`Memo`]: single-threaded memoization with interior mutability
//! - [`SyncMemo`]: thread-safe memoization serializing the first
//!   evaluation behind a mutex
//!
//! Both guarantee the wrapped rule executes **at most once** over the
//! cache's lifetime. The cache is keyed by "has this been evaluated", not
//! by argument: it wraps rules whose inputs are already fully applied.
//!
//! # Examples
//!
//! ```rust
//! use combars::control::Memo;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let memo = Memo::new(|| {
//!     calls.set(calls.get() + 1);
//!     42
//! });
//!
//! assert_eq!(memo.call(), 42);
//! assert_eq!(memo.call(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

mod memo;
mod sync_memo;

pub use memo::{Memo, MemoPoisonedError, MemoState};
pub use sync_memo::SyncMemo;
