//! Backtracking parser combinators.
//!
//! A [`Parser<T>`] consumes a prefix of a string and yields a `T` with the
//! rest of the input, or fails with `None`. Alternation always restarts the
//! second branch from where the first one started, so no partial match is
//! ever kept.
//!
//! - **Primitives**: [`any`], [`satisfy`], [`character`], [`text`], [`end`],
//!   and character classes such as [`digit`] and [`alpha`]
//! - **Sequencing**: [`Parser::fmap`], [`Parser::flat_map`], [`Parser::map2`],
//!   [`Parser::then`], [`Parser::skip`], and the [`parse!`](crate::parse)
//!   macro
//! - **Alternation**: [`Parser::alt`] / [`add`], [`neutral`], [`choice`],
//!   [`Parser::optional`]
//! - **Repetition**: [`many`], [`some`], [`separated`], [`bracket`]
//! - **Operators**: [`chain_left`], [`chain_right`]
//! - **Recursion**: [`defer`]
//!
//! # Examples
//!
//! A calculator for sums and products of natural numbers:
//!
//! ```rust
//! use felis::parser::{Parser, bracket, chain_left, character, defer, digit, some};
//!
//! fn number() -> Parser<i64> {
//!     some(digit()).fmap(|digits| {
//!         digits
//!             .into_iter()
//!             .filter_map(|digit| digit.to_digit(10))
//!             .fold(0, |total, digit| total * 10 + i64::from(digit))
//!     })
//! }
//!
//! fn add(left: i64, right: i64) -> i64 {
//!     left + right
//! }
//!
//! fn multiply(left: i64, right: i64) -> i64 {
//!     left * right
//! }
//!
//! fn factor() -> Parser<i64> {
//!     number().alt(bracket(defer(expression), character(')'), character('(')))
//! }
//!
//! fn term() -> Parser<i64> {
//!     chain_left(factor(), character('*').fmap(|_| multiply))
//! }
//!
//! fn expression() -> Parser<i64> {
//!     chain_left(term(), character('+').fmap(|_| add))
//! }
//!
//! assert_eq!(expression().parse_complete("2*(3+4)+1"), Ok(15));
//! ```

#![forbid(unsafe_code)]

mod chain;
mod engine;
mod error;
mod input;
mod macros;
mod primitive;
mod repetition;

pub use chain::{chain_left, chain_left_or, chain_right, chain_right_or};
pub use engine::{
    Parser, add, choice, compose, defer, discard_after, discard_before, guard, identity, neutral,
    position, take_after, take_before, when,
};
pub use error::ParseError;
pub use input::Input;
pub use primitive::{
    alnum, alpha, any, character, digit, end, in_range, none_of, one_of, satisfy, text, whitespace,
};
pub use repetition::{bracket, many, separated, separated1, some};
