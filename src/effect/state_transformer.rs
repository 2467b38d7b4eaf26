//! `StateT` - State Monad Transformer over `Option`.
//!
//! `StateT` threads a state through a computation whose every step may fail.
//! It is the foundation the [`Parser`](crate::parser::Parser) is built on: the
//! state is the remaining input and failure is `None`.
//!
//! # Overview
//!
//! `StateT<S, M>` encapsulates a function `S -> M` where `S` is the state
//! type and `M` is the inner monad applied to `(value, state)`. This crate
//! only needs `Option` as the inner monad, so the combinators live on
//! `StateT<S, Option<(A, S)>>` and carry the `_option` suffix.
//!
//! # Laws
//!
//! - Left Identity: `pure_option(a).flat_map_option(f) == f(a)`
//! - Right Identity: `m.flat_map_option(pure_option) == m`
//! - Alternation Identity: `empty_option().alt_option(m) == m == m.alt_option(empty_option())`
//!
//! # Examples
//!
//! ```rust
//! use felis::effect::StateT;
//!
//! let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
//! assert_eq!(state.run(10), Some((20, 11)));
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A monad transformer that adds state manipulation capability.
///
/// `StateT<S, M>` represents a computation that, given an initial state of type `S`,
/// produces a value and a new state wrapped in monad `M`.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `M`: The inner monad type, here `Option<(A, S)>`
///
/// # Examples
///
/// ```rust
/// use felis::effect::StateT;
///
/// fn countdown() -> StateT<u32, Option<(u32, u32)>> {
///     StateT::new(|count: u32| count.checked_sub(1).map(|next| (count, next)))
/// }
///
/// let twice = countdown()
///     .flat_map_option(|first| countdown().fmap_option(move |second| first + second));
///
/// assert_eq!(twice.run(5), Some((9, 3)));
/// assert_eq!(twice.run(1), None);
/// ```
pub struct StateT<S, M>
where
    S: 'static,
{
    /// The wrapped state transition function.
    /// Uses Rc so that clones share one transition.
    run_function: Rc<dyn Fn(S) -> M>,
}

impl<S, M> StateT<S, M>
where
    S: 'static,
    M: 'static,
{
    /// Creates a new `StateT` from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
    /// assert_eq!(state.run(10), Some((20, 11)));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> M + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs the `StateT` computation with the given initial state.
    pub fn run(&self, initial_state: S) -> M {
        (self.run_function)(initial_state)
    }
}

// =============================================================================
// Clone and Display
// =============================================================================

impl<S, M> Clone for StateT<S, M>
where
    S: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<S, M> std::fmt::Display for StateT<S, M>
where
    S: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<StateT>")
    }
}

// =============================================================================
// Option-specific Methods
// =============================================================================

impl<S, A> StateT<S, Option<(A, S)>>
where
    S: 'static,
    A: 'static,
{
    /// Runs the `StateT` and returns only the result value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
    /// assert_eq!(state.eval(10), Some(20));
    /// ```
    pub fn eval(&self, initial_state: S) -> Option<A> {
        self.run(initial_state).map(|(value, _)| value)
    }

    /// Runs the `StateT` and returns only the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
    /// assert_eq!(state.exec(10), Some(11));
    /// ```
    pub fn exec(&self, initial_state: S) -> Option<S> {
        self.run(initial_state).map(|(_, state)| state)
    }

    /// Creates a `StateT` that returns a constant value without modifying the state.
    ///
    /// The value is cloned on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let state: StateT<i32, Option<(String, i32)>> = StateT::pure_option("hello".to_string());
    /// assert_eq!(state.run(42), Some(("hello".to_string(), 42)));
    /// ```
    pub fn pure_option(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| Some((value.clone(), state)))
    }

    /// Creates a `StateT` that always fails.
    ///
    /// This is the identity element of [`alt_option`](Self::alt_option).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::empty_option();
    /// assert_eq!(state.run(42), None);
    /// ```
    #[must_use]
    pub fn empty_option() -> Self {
        Self::new(|_| None)
    }

    /// Maps a function over the value inside the Option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s, s + 1)));
    /// let mapped = state.fmap_option(|v| v * 2);
    /// assert_eq!(mapped.run(10), Some((20, 11)));
    /// ```
    pub fn fmap_option<B, F>(self, function: F) -> StateT<S, Option<(B, S)>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        StateT::new(move |state| {
            (original)(state).map(|(value, new_state)| (function(value), new_state))
        })
    }

    /// Chains `StateT` computations with Option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let state: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s, s + 1)));
    /// let chained = state.flat_map_option(|v| {
    ///     StateT::new(move |s| Some((v + s, s * 2)))
    /// });
    /// // Initial state 10: first (10, 11), then (10 + 11, 22) = (21, 22)
    /// assert_eq!(chained.run(10), Some((21, 22)));
    /// ```
    pub fn flat_map_option<B, F>(self, function: F) -> StateT<S, Option<(B, S)>>
    where
        F: Fn(A) -> StateT<S, Option<(B, S)>> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        StateT::new(move |state| match (original)(state) {
            Some((value, intermediate_state)) => {
                let next = function(value);
                next.run(intermediate_state)
            }
            None => None,
        })
    }

    /// Tries `self`; if it fails, runs `alternative` on the original state.
    ///
    /// The first computation runs on a clone of the state, so whatever it did
    /// before failing is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let failing: StateT<i32, Option<(i32, i32)>> = StateT::new(|_| None);
    /// let fallback: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s, s + 1)));
    /// assert_eq!(failing.alt_option(fallback).run(1), Some((1, 2)));
    /// ```
    #[must_use]
    pub fn alt_option(self, alternative: Self) -> Self
    where
        S: Clone,
    {
        let first = self.run_function;
        let second = alternative.run_function;
        Self::new(move |state: S| (first)(state.clone()).or_else(|| (second)(state)))
    }

    /// Projects a value out of the current state without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::effect::StateT;
    ///
    /// let state: StateT<String, Option<(usize, String)>> = StateT::gets_option(|s: &String| s.len());
    /// assert_eq!(state.run("abc".to_string()), Some((3, "abc".to_string())));
    /// ```
    pub fn gets_option<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state: S| Some((projection(&state), state)))
    }
}

static_assertions::assert_not_impl_any!(StateT<i32, Option<(i32, i32)>>: Send, Sync);
