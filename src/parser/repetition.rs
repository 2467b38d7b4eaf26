//! Repetition, separation, and bracketing.
//!
//! The repetition loops run iteratively, so long inputs do not grow the stack.
//! A repeated parser that succeeds without consuming anything ends the
//! repetition and its value is dropped; otherwise `many(Parser::pure(x))`
//! would never terminate.

#![forbid(unsafe_code)]

use super::engine::Parser;
use super::input::Input;

/// Collects successes of `parser` until it fails or stops consuming input.
fn repeat<T>(parser: &Parser<T>, mut values: Vec<T>, mut input: Input) -> (Vec<T>, Input)
where
    T: 'static,
{
    while let Some((value, rest)) = parser.run(input.clone()) {
        if rest.position() == input.position() {
            break;
        }
        values.push(value);
        input = rest;
    }
    (values, input)
}

/// Zero or more repetitions of `parser`. Never fails.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{digit, many};
///
/// assert_eq!(many(digit()).parse("12a"), Some((vec!['1', '2'], "a")));
/// assert_eq!(many(digit()).parse("abc"), Some((vec![], "abc")));
/// ```
pub fn many<T>(parser: Parser<T>) -> Parser<Vec<T>>
where
    T: 'static,
{
    Parser::new(move |input| Some(repeat(&parser, Vec::new(), input)))
}

/// One or more repetitions of `parser`. Fails exactly when `parser` fails.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{digit, some};
///
/// assert_eq!(some(digit()).parse("12a"), Some((vec!['1', '2'], "a")));
/// assert_eq!(some(digit()).parse("abc"), None);
/// ```
pub fn some<T>(parser: Parser<T>) -> Parser<Vec<T>>
where
    T: 'static,
{
    Parser::new(move |input| {
        let (first, rest) = parser.run(input)?;
        Some(repeat(&parser, vec![first], rest))
    })
}

/// Zero or more `parser`s separated by `separator`. Never fails.
///
/// A separator that is not followed by another item is left unconsumed.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{character, digit, separated};
///
/// let list = separated(digit(), character(','));
/// assert_eq!(list.parse("1,2,3"), Some((vec!['1', '2', '3'], "")));
/// assert_eq!(list.parse("1,2,"), Some((vec!['1', '2'], ",")));
/// assert_eq!(list.parse(""), Some((vec![], "")));
/// ```
pub fn separated<T, S>(parser: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>>
where
    T: 'static,
    S: 'static,
{
    let items = separated1(parser, separator);
    Parser::new(move |input: Input| items.run(input.clone()).or(Some((Vec::new(), input))))
}

/// One or more `parser`s separated by `separator`.
pub fn separated1<T, S>(parser: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>>
where
    T: 'static,
    S: 'static,
{
    let following = separator.then(parser.clone());
    Parser::new(move |input| {
        let (first, rest) = parser.run(input)?;
        Some(repeat(&following, vec![first], rest))
    })
}

/// Runs `left`, `parser`, and `right` in order, keeping the value of `parser`.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{bracket, character, digit};
///
/// let parenthesised = bracket(digit(), character(')'), character('('));
/// assert_eq!(parenthesised.parse("(5)"), Some(('5', "")));
/// assert_eq!(parenthesised.parse("(5"), None);
/// ```
pub fn bracket<T, R, L>(parser: Parser<T>, right: Parser<R>, left: Parser<L>) -> Parser<T>
where
    T: 'static,
    R: 'static,
    L: 'static,
{
    left.then(parser.skip(right))
}
