//! Chaining operands with binary operators.
//!
//! The operator parser yields the function that combines its two operands,
//! so precedence levels are built by nesting chains: the operand of the
//! additive chain is the multiplicative chain, and so on.
//!
//! # Examples
//!
//! ```rust
//! use felis::parser::{Parser, chain_left, character, digit};
//!
//! fn number() -> Parser<i64> {
//!     digit().fmap(|c| i64::from(c.to_digit(10).unwrap()))
//! }
//!
//! fn subtract(left: i64, right: i64) -> i64 {
//!     left - right
//! }
//!
//! let difference = chain_left(number(), character('-').fmap(|_| subtract));
//! assert_eq!(difference.parse("8-4-2"), Some((2, "")));
//! ```

#![forbid(unsafe_code)]

use super::engine::Parser;

/// One or more `operand`s separated by `operator`, folded left-associatively.
///
/// `a op b op c` is `(a op b) op c`. An operator that is not followed by an
/// operand is left unconsumed.
pub fn chain_left<T, F>(operand: Parser<T>, operator: Parser<F>) -> Parser<T>
where
    T: 'static,
    F: Fn(T, T) -> T + 'static,
{
    let step = operator.product(operand.clone());
    Parser::new(move |input| {
        let (mut accumulator, mut input) = operand.run(input)?;
        while let Some(((function, right), rest)) = step.run(input.clone()) {
            if rest.position() == input.position() {
                break;
            }
            accumulator = function(accumulator, right);
            input = rest;
        }
        Some((accumulator, input))
    })
}

/// One or more `operand`s separated by `operator`, folded right-associatively.
///
/// `a op b op c` is `a op (b op c)`.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{chain_right, character, digit};
///
/// fn power(base: u64, exponent: u64) -> u64 {
///     base.pow(u32::try_from(exponent).unwrap())
/// }
///
/// let number = digit().fmap(|c| u64::from(c.to_digit(10).unwrap()));
/// let caret = character('^').fmap(|_| power);
/// assert_eq!(chain_right(number, caret).parse("2^3^2"), Some((512, "")));
/// ```
pub fn chain_right<T, F>(operand: Parser<T>, operator: Parser<F>) -> Parser<T>
where
    T: 'static,
    F: Fn(T, T) -> T + 'static,
{
    let step = operator.product(operand.clone());
    Parser::new(move |input| {
        let (first, mut input) = operand.run(input)?;
        let mut operands = vec![first];
        let mut functions = Vec::new();
        while let Some(((function, right), rest)) = step.run(input.clone()) {
            if rest.position() == input.position() {
                break;
            }
            functions.push(function);
            operands.push(right);
            input = rest;
        }

        let mut accumulator = operands.pop()?;
        while let Some(function) = functions.pop() {
            let left = operands.pop()?;
            accumulator = function(left, accumulator);
        }
        Some((accumulator, input))
    })
}

/// Like [`chain_left`], but yields `default` when no operand matches.
pub fn chain_left_or<T, F>(operand: Parser<T>, operator: Parser<F>, default: T) -> Parser<T>
where
    T: Clone + 'static,
    F: Fn(T, T) -> T + 'static,
{
    chain_left(operand, operator).alt(Parser::pure(default))
}

/// Like [`chain_right`], but yields `default` when no operand matches.
pub fn chain_right_or<T, F>(operand: Parser<T>, operator: Parser<F>, default: T) -> Parser<T>
where
    T: Clone + 'static,
    F: Fn(T, T) -> T + 'static,
{
    chain_right(operand, operator).alt(Parser::pure(default))
}
