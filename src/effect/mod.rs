//! Effect transformers.
//!
//! This module provides [`StateT`], a state monad transformer specialised to
//! `Option` as the inner monad. It threads a state through a sequence of
//! fallible steps and stops at the first `None`.
//!
//! # Examples
//!
//! ```rust
//! use felis::effect::StateT;
//!
//! let pop: StateT<Vec<i32>, Option<(i32, Vec<i32>)>> = StateT::new(|mut stack: Vec<i32>| {
//!     stack.pop().map(|top| (top, stack))
//! });
//!
//! let sum_of_two = pop.clone().flat_map_option(move |first| {
//!     pop.clone().fmap_option(move |second| first + second)
//! });
//!
//! assert_eq!(sum_of_two.run(vec![1, 2, 3]), Some((5, vec![1])));
//! assert_eq!(sum_of_two.run(vec![1]), None);
//! ```

#![forbid(unsafe_code)]

// =============================================================================
// Monad Transformers
// =============================================================================

mod state_transformer;

pub use state_transformer::StateT;
