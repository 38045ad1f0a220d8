//! # combars
//!
//! A functional programming combinator library for Rust providing typed
//! function wrappers, currying, memoization, and algebraic containers.
//!
//! ## Overview
//!
//! This library models functions as first-class, immutable values and
//! provides the classic combinator toolkit around them:
//!
//! - **Typed Functions**: `Function0` through `Function4` wrapping a rule
//!   of fixed arity, with composition for arity-1 functions
//! - **Currying / Partial Application**: convert an N-argument function
//!   into a chain of single-argument functions, or fix a prefix of its
//!   arguments without evaluating it
//! - **Lifting**: totalize a fallible rule into one returning `Maybe` or
//!   `Outcome`
//! - **Memoization**: `Memo` and thread-safe `SyncMemo` single-slot caches
//!   guaranteeing at-most-once evaluation
//! - **Containers**: `Maybe` (optional value) and `Outcome` (fallible
//!   computation) sum types with map/flat_map/filter/collect/peek/fold
//! - **Predicates**: boolean function values with short-circuiting
//!   combinators and collection quantifiers
//!
//! ## Feature Flags
//!
//! - `function`: typed function wrappers, currying, lifting
//! - `control`: memoization (`Memo`, `SyncMemo`)
//! - `container`: `Maybe` and `Outcome` containers
//! - `predicate`: predicate combinators and quantifiers
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use combars::function::Function2;
//! use combars::container::Maybe;
//!
//! let add = Function2::new(|a: i32, b: i32| a + b);
//! let add_five = add.curried().apply(5);
//! assert_eq!(add_five.apply(3), 8);
//!
//! let present = Maybe::of(10).map(|x| x * 2);
//! assert_eq!(present, Maybe::Present(20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use combars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;
}

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "predicate")]
pub mod predicate;
