//! Algebraic containers for values that may not exist or may fail.
//!
//! This module provides two sum types:
//!
//! - [`Maybe`]: a value that may be present or absent
//! - [`Outcome`]: a computation that succeeded with a value or failed with
//!   an error
//!
//! Both expose the same transformation protocol (map, flat_map, filter,
//! collect, peek, for_each, fold), all operations pure and producing a new
//! container. The empty/failure variant never invokes a supplied closure.
//!
//! Expected failures are modeled as data rather than signaled: absence of
//! a panic means "inspect the variant". [`PredicateRejection`] marks a
//! `filter` rejection on an [`Outcome`], keeping it distinguishable from a
//! failure produced by the computation itself.
//!
//! # Examples
//!
//! ```rust
//! use combars::container::{Maybe, Outcome};
//!
//! let shouted = Maybe::of(10).map(|x| x.to_string());
//! assert_eq!(shouted, Maybe::Present("10".to_string()));
//!
//! let parsed: Outcome<i32, std::num::ParseIntError> =
//!     Outcome::of(|| "10".parse());
//! assert_eq!(parsed.get_or_else(|_| 0), 10);
//! ```

mod maybe;
mod outcome;

pub use maybe::Maybe;
pub use outcome::{Outcome, PredicateRejection};
