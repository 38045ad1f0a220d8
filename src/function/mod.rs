//! Typed function values, currying, partial application, and lifting.
//!
//! This module models functions as immutable first-class values. A
//! [`Function2`] wraps a rule taking exactly two inputs; applying it
//! requires both inputs, supplied either directly via `apply`, one at a
//! time through [`Function2::curried`], or split across time through
//! [`Function2::partial`].
//!
//! # Overview
//!
//! - [`Function0`] through [`Function4`]: arity-N wrappers over a shared,
//!   immutable rule
//! - [`Function1::and_then`] / [`Function1::compose`]: composition for
//!   single-argument functions
//! - `curried` / `partial` / `defer`: arity-reducing application that never
//!   evaluates the underlying rule early
//! - `lift` / `lift_outcome`: totalize a fallible rule into one returning
//!   [`Maybe`](crate::container::Maybe) or
//!   [`Outcome`](crate::container::Outcome) (requires the `container`
//!   feature)
//! - [`Guarded`]: an explicit (guard, mapping) pair standing in for a
//!   partial function, consumed by the containers' `collect`
//! - [`identity`], [`constant`], [`flip`]: fundamental combinators
//! - [`fold_left`], [`fold_right`], [`reduce`]: collection folding
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `f.and_then(g).and_then(h)` behaves identically to
//!   `f.and_then(g.and_then(h))` for all inputs
//! - **Left Identity**: `Function1::identity().and_then(f)` behaves as `f`
//! - **Right Identity**: `f.and_then(Function1::identity())` behaves as `f`
//!
//! ## Laziness Guarantees
//!
//! - `curried` builds the whole chain without running the rule; evaluation
//!   happens exactly when the last input arrives
//! - `partial` fixes inputs without running the rule
//! - `defer` saturates every input yet still does not run the rule until
//!   the returned [`Function0`] is applied
//!
//! # Examples
//!
//! ```
//! use combars::function::{Function1, Function2};
//!
//! let stringify = Function1::new(|number: i32| number.to_string());
//! let enthusiastic = Function1::new(|text: String| format!("{text}!!!"));
//!
//! let shout = stringify.and_then(enthusiastic);
//! assert_eq!(shout.apply(10), "10!!!");
//!
//! let repeat = Function2::new(|text: String, count: usize| text.repeat(count));
//! let hello_times = repeat.partial("hello".to_string());
//! assert_eq!(hello_times.apply(3), "hellohellohello");
//! ```

mod arity;
mod guarded;
mod utils;

pub use arity::{Function0, Function1, Function2, Function3, Function4};
pub use guarded::Guarded;
pub use utils::{constant, flip, fold_left, fold_right, identity, reduce};
