//! # felis
//!
//! Backtracking parser combinators built on a State-over-Option monad
//! transformer.
//!
//! ## Overview
//!
//! - **Effect**: [`StateT`](effect::StateT), a state transformer whose steps
//!   may fail with `None`
//! - **Parser**: [`Parser`](parser::Parser), a `StateT` over the remaining
//!   input, together with primitives and combinators for alternation,
//!   repetition, bracketing, and operator chaining
//!
//! A parse never reports *why* it failed: failure is the absence of a value,
//! and alternation simply retries from the same position.
//!
//! ## Feature Flags
//!
//! - `effect`: The `StateT` transformer
//! - `parser`: Parser combinators (implies `effect`)
//! - `tracing`: Emit `tracing` events from the parse entry points
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use felis::prelude::*;
//!
//! let list = bracket(
//!     separated(some(digit()), character(',')),
//!     character(']'),
//!     character('['),
//! );
//!
//! assert_eq!(
//!     list.parse("[1,23]"),
//!     Some((vec![vec!['1'], vec!['2', '3']], ""))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use felis::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "parser")]
    pub use crate::parser::*;
}

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "parser")]
pub mod parser;
