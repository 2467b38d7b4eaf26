//! The `Parser` type and its sequencing and alternation combinators.

#![forbid(unsafe_code)]

use std::cell::OnceCell;
use std::rc::Rc;

use super::error::ParseError;
use super::input::Input;
use crate::effect::StateT;

/// A backtracking parser producing values of type `T`.
///
/// `Parser<T>` is a `StateT` over `Option` whose state is the remaining
/// [`Input`]. Running it either yields a value together with the input left
/// over, or `None`. There are no error messages inside a parse: failure is
/// absence.
///
/// Parsers are cheap to clone; clones share the same underlying function.
///
/// # Laws
///
/// - Alternation identity: `Parser::empty().alt(p) == p == p.alt(Parser::empty())`
/// - Alternation associativity: `(p.alt(q)).alt(r) == p.alt(q.alt(r))`
/// - Left Identity: `Parser::pure(a).flat_map(f) == f(a)`
/// - Right Identity: `p.flat_map(Parser::pure) == p`
///
/// # Examples
///
/// ```rust
/// use felis::parser::{Parser, character, digit};
///
/// let signed = character('-').optional().map2(digit(), |sign, digit| {
///     let value = digit.to_digit(10).unwrap() as i32;
///     if sign.is_some() { -value } else { value }
/// });
///
/// assert_eq!(signed.parse("-7!"), Some((-7, "!")));
/// assert_eq!(signed.parse("3"), Some((3, "")));
/// assert_eq!(signed.parse("x"), None);
/// ```
pub struct Parser<T>
where
    T: 'static,
{
    state: StateT<Input, Option<(T, Input)>>,
}

impl<T> Parser<T>
where
    T: 'static,
{
    /// Creates a parser from a function over the input cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::parser::Parser;
    ///
    /// let two = Parser::new(|input| {
    ///     let (first, input) = input.next_char()?;
    ///     let (second, input) = input.next_char()?;
    ///     Some(((first, second), input))
    /// });
    /// assert_eq!(two.parse("abc"), Some((('a', 'b'), "c")));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Input) -> Option<(T, Input)> + 'static,
    {
        Self {
            state: StateT::new(function),
        }
    }

    /// Runs the parser on an input cursor.
    pub fn run(&self, input: Input) -> Option<(T, Input)> {
        self.state.run(input)
    }

    /// Parses a prefix of `input`, returning the value and the unconsumed rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::parser::character;
    ///
    /// assert_eq!(character('a').parse("abc"), Some(('a', "bc")));
    /// assert_eq!(character('a').parse("xyz"), None);
    /// ```
    pub fn parse<'a>(&self, input: &'a str) -> Option<(T, &'a str)> {
        let outcome = self
            .run(Input::new(input))
            .and_then(|(value, rest)| input.get(rest.position()..).map(|rest| (value, rest)));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            input_length = input.len(),
            consumed = outcome.as_ref().map(|(_, rest)| input.len() - rest.len()),
            matched = outcome.is_some(),
            "parse finished"
        );

        outcome
    }

    /// Parses a prefix of `input` and returns only the value.
    pub fn eval(&self, input: &str) -> Option<T> {
        self.parse(input).map(|(value, _)| value)
    }

    /// Parses the whole of `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoMatch`] if the parser fails and
    /// [`ParseError::TrailingInput`] if it succeeds without consuming
    /// everything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::parser::{ParseError, digit, some};
    ///
    /// let digits = some(digit());
    /// assert_eq!(digits.parse_complete("42"), Ok(vec!['4', '2']));
    /// assert_eq!(digits.parse_complete("x"), Err(ParseError::NoMatch));
    /// assert_eq!(
    ///     digits.parse_complete("4a"),
    ///     Err(ParseError::TrailingInput { position: 1, remaining: "a".to_string() })
    /// );
    /// ```
    pub fn parse_complete(&self, input: &str) -> Result<T, ParseError> {
        let result = match self.run(Input::new(input)) {
            None => Err(ParseError::NoMatch),
            Some((value, rest)) if rest.is_empty() => Ok(value),
            Some((_, rest)) => Err(ParseError::TrailingInput {
                position: rest.position(),
                remaining: rest.as_str().to_owned(),
            }),
        };

        #[cfg(feature = "tracing")]
        {
            if let Err(error) = &result {
                tracing::debug!(input_length = input.len(), %error, "complete parse failed");
            }
        }

        result
    }

    /// A parser that consumes nothing and yields `value`.
    ///
    /// The value is cloned on every run.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            state: StateT::pure_option(value),
        }
    }

    /// A parser that always fails.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            state: StateT::empty_option(),
        }
    }

    /// Transforms the parsed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::parser::digit;
    ///
    /// let value = digit().fmap(|c| c.to_digit(10).unwrap());
    /// assert_eq!(value.parse("7up"), Some((7, "up")));
    /// ```
    pub fn fmap<U, F>(self, function: F) -> Parser<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        Parser {
            state: self.state.fmap_option(function),
        }
    }

    /// Runs `self`, then the parser chosen from its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::parser::{any, character};
    ///
    /// // A character followed by the same character again.
    /// let doubled = any().flat_map(character);
    /// assert_eq!(doubled.parse("aab"), Some(('a', "b")));
    /// assert_eq!(doubled.parse("ab"), None);
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Parser<U>
    where
        F: Fn(T) -> Parser<U> + 'static,
        U: 'static,
    {
        Parser {
            state: self
                .state
                .flat_map_option(move |value| function(value).state),
        }
    }

    /// Tries `self`; on failure tries `alternative` from the same position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::parser::text;
    ///
    /// let keyword = text("let").alt(text("lambda"));
    /// assert_eq!(keyword.parse("lambda x"), Some(("lambda".to_string(), " x")));
    /// ```
    #[must_use]
    pub fn alt(self, alternative: Self) -> Self {
        Self {
            state: self.state.alt_option(alternative.state),
        }
    }

    /// Runs `self` and `other` in sequence and combines their values.
    pub fn map2<U, V, F>(self, other: Parser<U>, function: F) -> Parser<V>
    where
        F: Fn(T, U) -> V + 'static,
        U: 'static,
        V: 'static,
    {
        Parser::new(move |input| {
            let (first, input) = self.run(input)?;
            let (second, input) = other.run(input)?;
            Some((function(first, second), input))
        })
    }

    /// Runs `self` and `other` in sequence and pairs their values.
    pub fn product<U>(self, other: Parser<U>) -> Parser<(T, U)>
    where
        U: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Runs `self`, then `next`, keeping the value of `next`.
    pub fn then<U>(self, next: Parser<U>) -> Parser<U>
    where
        U: 'static,
    {
        self.map2(next, |_, second| second)
    }

    /// Runs `self`, then `next`, keeping the value of `self`.
    #[must_use]
    pub fn skip<U>(self, next: Parser<U>) -> Self
    where
        U: 'static,
    {
        self.map2(next, |first, _| first)
    }

    /// Makes the parser optional; it then never fails.
    ///
    /// On failure no input is consumed and the value is `None`.
    pub fn optional(self) -> Parser<Option<T>> {
        Parser::new(move |input: Input| match self.run(input.clone()) {
            Some((value, rest)) => Some((Some(value), rest)),
            None => Some((None, input)),
        })
    }

    /// Discards the parsed value.
    pub fn void(self) -> Parser<()> {
        self.fmap(|_| ())
    }

    /// Converts the parser back into the underlying state transformer.
    pub fn into_state(self) -> StateT<Input, Option<(T, Input)>> {
        self.state
    }
}

impl<F> Parser<F>
where
    F: 'static,
{
    /// Applies a parsed function to a parsed value, in sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::parser::{Parser, digit};
    ///
    /// let to_number = Parser::pure(|c: char| c.to_digit(10));
    /// assert_eq!(to_number.apply(digit()).parse("9"), Some((Some(9), "")));
    /// ```
    pub fn apply<A, B>(self, value: Parser<A>) -> Parser<B>
    where
        F: Fn(A) -> B,
        A: 'static,
        B: 'static,
    {
        self.map2(value, |function, value| function(value))
    }
}

impl<T> Parser<Parser<T>>
where
    T: 'static,
{
    /// Flattens a parser that yields a parser by running both in sequence.
    pub fn join(self) -> Parser<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> From<StateT<Input, Option<(T, Input)>>> for Parser<T>
where
    T: 'static,
{
    fn from(state: StateT<Input, Option<(T, Input)>>) -> Self {
        Self { state }
    }
}

impl<T> Clone for Parser<T>
where
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T> std::fmt::Display for Parser<T>
where
    T: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Parser>")
    }
}

static_assertions::assert_not_impl_any!(Parser<char>: Send, Sync);

// =============================================================================
// Free Functions
// =============================================================================

/// A parser that consumes nothing and yields `value`.
pub fn identity<T>(value: T) -> Parser<T>
where
    T: Clone + 'static,
{
    Parser::pure(value)
}

/// A parser that always fails.
pub fn neutral<T>() -> Parser<T>
where
    T: 'static,
{
    Parser::empty()
}

/// Backtracking alternation: `first`, or else `second` from the same position.
pub fn add<T>(first: Parser<T>, second: Parser<T>) -> Parser<T>
where
    T: 'static,
{
    first.alt(second)
}

/// The first of `parsers` that succeeds, each tried from the same position.
///
/// An empty list yields a parser that always fails.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{character, choice};
///
/// let bracket = choice([character('('), character('['), character('{')]);
/// assert_eq!(bracket.parse("[x"), Some(('[', "x")));
/// assert_eq!(bracket.parse("<x"), None);
/// ```
pub fn choice<T, I>(parsers: I) -> Parser<T>
where
    T: 'static,
    I: IntoIterator<Item = Parser<T>>,
{
    parsers
        .into_iter()
        .reduce(Parser::alt)
        .unwrap_or_else(Parser::empty)
}

/// Kleisli composition: feeds the value of `first` into `second`.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{Parser, character, compose};
///
/// let open_then_close = compose(
///     |open: char| character(open),
///     |open: char| character(if open == '(' { ')' } else { ']' }),
/// );
/// assert_eq!(open_then_close('(').parse("()"), Some((')', "")));
/// ```
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Parser<C>
where
    F: Fn(A) -> Parser<B>,
    G: Fn(B) -> Parser<C> + 'static,
    B: 'static,
    C: 'static,
{
    let second = Rc::new(second);
    move |value| {
        let second = Rc::clone(&second);
        first(value).flat_map(move |intermediate| second(intermediate))
    }
}

/// Succeeds with `()` when `condition` holds and fails otherwise.
pub fn guard(condition: bool) -> Parser<()> {
    if condition {
        Parser::pure(())
    } else {
        Parser::empty()
    }
}

/// Runs `parser` only when `condition` holds; otherwise succeeds with `()`.
pub fn when(condition: bool, parser: Parser<()>) -> Parser<()> {
    if condition { parser } else { Parser::pure(()) }
}

/// Runs `first`, then `second`, keeping the value of `second`.
///
/// The four sequencing functions read as "take/discard `second`, which comes
/// after/before `first`". `take_before` and `discard_before` are the flips of
/// `discard_after` and `take_after`.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{character, digit, discard_after, discard_before, take_after, take_before};
///
/// assert_eq!(take_after(character('#'), digit()).parse("#1"), Some(('1', "")));
/// assert_eq!(discard_after(digit(), character(';')).parse("1;"), Some(('1', "")));
/// assert_eq!(take_before(character(';'), digit()).parse("1;"), Some(('1', "")));
/// assert_eq!(discard_before(digit(), character('#')).parse("#1"), Some(('1', "")));
/// ```
pub fn take_after<A, B>(first: Parser<A>, second: Parser<B>) -> Parser<B>
where
    A: 'static,
    B: 'static,
{
    first.then(second)
}

/// Runs `first`, then `second`, keeping the value of `first`.
pub fn discard_after<A, B>(first: Parser<A>, second: Parser<B>) -> Parser<A>
where
    A: 'static,
    B: 'static,
{
    first.skip(second)
}

/// Runs `second`, then `first`, keeping the value of `second`.
pub fn take_before<A, B>(first: Parser<A>, second: Parser<B>) -> Parser<B>
where
    A: 'static,
    B: 'static,
{
    discard_after(second, first)
}

/// Runs `second`, then `first`, keeping the value of `first`.
pub fn discard_before<A, B>(first: Parser<A>, second: Parser<B>) -> Parser<A>
where
    A: 'static,
    B: 'static,
{
    take_after(second, first)
}

/// Consumes nothing and yields the current byte offset into the input.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{position, text};
///
/// let after_keyword = text("let ").then(position());
/// assert_eq!(after_keyword.parse("let x"), Some((4, "x")));
/// ```
pub fn position() -> Parser<usize> {
    Parser {
        state: StateT::gets_option(Input::position),
    }
}

/// Builds the parser on first use.
///
/// Grammars that refer to themselves need this: building `expression` by
/// calling `expression()` directly would never return.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{Parser, bracket, character, defer};
///
/// // Balanced parentheses, counting the nesting depth.
/// fn nested() -> Parser<usize> {
///     bracket(defer(nested), character(')'), character('('))
///         .fmap(|depth| depth + 1)
///         .alt(Parser::pure(0))
/// }
///
/// assert_eq!(nested().parse("((()))"), Some((3, "")));
/// ```
pub fn defer<T, F>(factory: F) -> Parser<T>
where
    T: 'static,
    F: Fn() -> Parser<T> + 'static,
{
    let cell: OnceCell<Parser<T>> = OnceCell::new();
    Parser::new(move |input| cell.get_or_init(&factory).run(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{any, character, digit};
    use rstest::rstest;

    #[rstest]
    #[case("abc", Some(('a', "bc")))]
    #[case("xyz", None)]
    #[case("", None)]
    fn character_matches_only_the_given_char(
        #[case] input: &str,
        #[case] expected: Option<(char, &str)>,
    ) {
        assert_eq!(character('a').parse(input), expected);
    }

    #[test]
    fn pure_consumes_nothing() {
        assert_eq!(Parser::pure(1).parse("abc"), Some((1, "abc")));
    }

    #[test]
    fn empty_always_fails() {
        assert_eq!(Parser::<i32>::empty().parse("abc"), None);
        assert_eq!(Parser::<i32>::empty().parse(""), None);
    }

    #[test]
    fn alt_backtracks_after_partial_match() {
        let ab = character('a').then(character('b'));
        let ac = character('a').then(character('c'));
        assert_eq!(ab.alt(ac).parse("acd"), Some(('c', "d")));
    }

    #[test]
    fn alt_prefers_first_success() {
        let first = any().fmap(|_| 1);
        let second = any().fmap(|_| 2);
        assert_eq!(first.alt(second).parse("z"), Some((1, "")));
    }

    #[rstest]
    #[case(true, Some(((), "x")))]
    #[case(false, None)]
    fn guard_follows_condition(#[case] condition: bool, #[case] expected: Option<((), &str)>) {
        assert_eq!(guard(condition).parse("x"), expected);
    }

    #[rstest]
    #[case(true, "ab", Some(((), "b")))]
    #[case(true, "xb", None)]
    #[case(false, "xb", Some(((), "xb")))]
    fn when_runs_parser_only_if_condition_holds(
        #[case] condition: bool,
        #[case] input: &str,
        #[case] expected: Option<((), &str)>,
    ) {
        assert_eq!(when(condition, character('a').void()).parse(input), expected);
    }

    #[test]
    fn join_runs_outer_then_inner() {
        let outer = any().fmap(character);
        assert_eq!(outer.join().parse("xxy"), Some(('x', "y")));
        assert_eq!(any().fmap(character).join().parse("xy"), None);
    }

    #[rstest]
    #[case("a1!", Some(('1', "!")))]
    #[case("1a!", None)]
    fn take_after_keeps_the_later_value(
        #[case] input: &str,
        #[case] expected: Option<(char, &str)>,
    ) {
        assert_eq!(take_after(character('a'), digit()).parse(input), expected);
    }

    #[rstest]
    #[case("a1!", Some(('a', "!")))]
    #[case("ab!", None)]
    fn discard_after_keeps_the_earlier_value(
        #[case] input: &str,
        #[case] expected: Option<(char, &str)>,
    ) {
        assert_eq!(discard_after(character('a'), digit()).parse(input), expected);
    }

    #[rstest]
    #[case("1a!", Some(('1', "!")))]
    #[case("a1!", None)]
    fn take_before_runs_its_second_argument_first(
        #[case] input: &str,
        #[case] expected: Option<(char, &str)>,
    ) {
        assert_eq!(take_before(character('a'), digit()).parse(input), expected);
    }

    #[rstest]
    #[case("1a!", Some(('a', "!")))]
    #[case("a1!", None)]
    fn discard_before_runs_its_second_argument_first(
        #[case] input: &str,
        #[case] expected: Option<(char, &str)>,
    ) {
        assert_eq!(discard_before(character('a'), digit()).parse(input), expected);
    }

    #[test]
    fn before_functions_flip_the_after_functions() {
        let input = "x;rest";
        assert_eq!(
            take_before(character(';'), any()).parse(input),
            discard_after(any(), character(';')).parse(input)
        );
        assert_eq!(
            discard_before(character(';'), any()).parse(input),
            take_after(any(), character(';')).parse(input)
        );
    }

    #[test]
    fn position_reports_offset_without_consuming() {
        assert_eq!(position().parse("abc"), Some((0, "abc")));
        let offsets = any().then(position()).product(any().then(position()));
        assert_eq!(offsets.parse("λab"), Some(((2, 3), "b")));
    }

    #[test]
    fn optional_never_fails_and_restores_input() {
        let maybe_ab = character('a').then(character('b')).optional();
        assert_eq!(maybe_ab.parse("ab!"), Some((Some('b'), "!")));
        assert_eq!(maybe_ab.parse("ac"), Some((None, "ac")));
    }

    #[test]
    fn choice_of_nothing_fails() {
        assert_eq!(choice(Vec::<Parser<char>>::new()).parse("a"), None);
    }

    #[test]
    fn product_pairs_values() {
        assert_eq!(any().product(digit()).parse("a1b"), Some((('a', '1'), "b")));
    }

    #[test]
    fn defer_supports_self_reference() {
        fn count_a() -> Parser<usize> {
            character('a')
                .then(defer(count_a))
                .fmap(|count| count + 1)
                .alt(Parser::pure(0))
        }
        assert_eq!(count_a().parse("aaab"), Some((3, "b")));
    }

    #[test]
    fn defer_builds_each_node_once() {
        use std::cell::Cell;

        let builds = Rc::new(Cell::new(0));
        let counter = Rc::clone(&builds);
        let deferred = defer(move || {
            counter.set(counter.get() + 1);
            character('a')
        });
        assert_eq!(builds.get(), 0);

        let cloned = deferred.clone();
        assert_eq!(deferred.parse("ab"), Some(('a', "b")));
        assert_eq!(deferred.parse("b"), None);
        assert_eq!(cloned.parse("a"), Some(('a', "")));
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn state_round_trips_through_into_state() {
        let state = character('q').into_state();
        let parser: Parser<char> = state.into();
        assert_eq!(parser.parse("q"), Some(('q', "")));
    }

    #[test]
    fn parser_display() {
        assert_eq!(format!("{}", any()), "<Parser>");
    }
}
