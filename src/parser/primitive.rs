//! Atomic parsers that match single characters, literals, or the end of input.
//!
//! Character classes follow Unicode general categories, so `digit()` accepts
//! `'٣'` as well as `'3'`. Use [`in_range`] for ASCII-only classes.

#![forbid(unsafe_code)]

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use super::engine::Parser;

/// Consumes any single character. Fails only on empty input.
///
/// # Examples
///
/// ```rust
/// use felis::parser::any;
///
/// assert_eq!(any().parse("ab"), Some(('a', "b")));
/// assert_eq!(any().parse(""), None);
/// ```
pub fn any() -> Parser<char> {
    Parser::new(|input| input.next_char())
}

/// Consumes one character satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use felis::parser::satisfy;
///
/// let vowel = satisfy(|c| "aeiou".contains(c));
/// assert_eq!(vowel.parse("echo"), Some(('e', "cho")));
/// assert_eq!(vowel.parse("hello"), None);
/// ```
pub fn satisfy<P>(predicate: P) -> Parser<char>
where
    P: Fn(char) -> bool + 'static,
{
    Parser::new(move |input| {
        input
            .next_char()
            .filter(|(character, _)| predicate(*character))
    })
}

/// Consumes exactly `expected`.
pub fn character(expected: char) -> Parser<char> {
    satisfy(move |current| current == expected)
}

/// Succeeds with `()` only when no input is left.
///
/// # Examples
///
/// ```rust
/// use felis::parser::{character, end};
///
/// let only_a = character('a').skip(end());
/// assert_eq!(only_a.parse("a"), Some(('a', "")));
/// assert_eq!(only_a.parse("ab"), None);
/// ```
pub fn end() -> Parser<()> {
    Parser::new(|input| input.is_empty().then_some(((), input)))
}

/// Consumes the literal `expected` and yields it.
///
/// The empty literal always succeeds without consuming anything.
///
/// # Examples
///
/// ```rust
/// use felis::parser::text;
///
/// assert_eq!(text("let").parse("let x"), Some(("let".to_string(), " x")));
/// assert_eq!(text("let").parse("le"), None);
/// ```
pub fn text(expected: &str) -> Parser<String> {
    let expected = expected.to_owned();
    Parser::new(move |input| {
        input
            .strip_prefix(&expected)
            .map(|rest| (expected.clone(), rest))
    })
}

fn is_letter(character: char) -> bool {
    character.general_category_group() == GeneralCategoryGroup::Letter
}

/// A decimal digit (general category `Nd`) in any script.
///
/// Fractions, roman numerals and superscripts are not digits.
///
/// # Examples
///
/// ```rust
/// use felis::parser::digit;
///
/// assert_eq!(digit().parse("٣"), Some(('٣', "")));
/// assert_eq!(digit().parse("½"), None);
/// ```
pub fn digit() -> Parser<char> {
    satisfy(|character| character.general_category() == GeneralCategory::DecimalNumber)
}

/// A letter. Combining marks are not letters.
pub fn alpha() -> Parser<char> {
    satisfy(is_letter)
}

/// A letter or any numeric character, including fractions and roman numerals.
pub fn alnum() -> Parser<char> {
    satisfy(|character| is_letter(character) || character.is_numeric())
}

/// A whitespace character.
pub fn whitespace() -> Parser<char> {
    satisfy(char::is_whitespace)
}

/// Any character contained in `candidates`.
///
/// # Examples
///
/// ```rust
/// use felis::parser::one_of;
///
/// let operator = one_of("+-*/");
/// assert_eq!(operator.parse("*2"), Some(('*', "2")));
/// assert_eq!(operator.parse("%2"), None);
/// ```
pub fn one_of(candidates: &str) -> Parser<char> {
    let candidates = candidates.to_owned();
    satisfy(move |current| candidates.contains(current))
}

/// Any character not contained in `excluded`.
pub fn none_of(excluded: &str) -> Parser<char> {
    let excluded = excluded.to_owned();
    satisfy(move |current| !excluded.contains(current))
}

/// Any character in the inclusive range `low..=high`.
///
/// # Examples
///
/// ```rust
/// use felis::parser::in_range;
///
/// let hex_letter = in_range('a', 'f');
/// assert_eq!(hex_letter.parse("c0"), Some(('c', "0")));
/// assert_eq!(hex_letter.parse("g0"), None);
/// ```
pub fn in_range(low: char, high: char) -> Parser<char> {
    satisfy(move |current| (low..=high).contains(&current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5", Some(('5', "")))]
    #[case("٣x", Some(('٣', "x")))]
    #[case("a5", None)]
    #[case("½", None)]
    #[case("Ⅻ", None)]
    #[case("²", None)]
    #[case("", None)]
    fn digit_accepts_decimal_digits_only(
        #[case] input: &str,
        #[case] expected: Option<(char, &str)>,
    ) {
        assert_eq!(digit().parse(input), expected);
    }

    #[rstest]
    #[case(alpha(), "é1", Some(('é', "1")))]
    #[case(alpha(), "1é", None)]
    #[case(alpha(), "\u{0902}", None)]
    #[case(alpha(), "ǅx", Some(('ǅ', "x")))]
    #[case(alnum(), "1é", Some(('1', "é")))]
    #[case(alnum(), "½", Some(('½', "")))]
    #[case(alnum(), "Ⅻ", Some(('Ⅻ', "")))]
    #[case(alnum(), "\u{0902}", None)]
    #[case(alnum(), "_", None)]
    #[case(whitespace(), "\tx", Some(('\t', "x")))]
    #[case(none_of("\"\\"), "a\"", Some(('a', "\"")))]
    #[case(none_of("\"\\"), "\"a", None)]
    fn character_classes(
        #[case] parser: Parser<char>,
        #[case] input: &str,
        #[case] expected: Option<(char, &str)>,
    ) {
        assert_eq!(parser.parse(input), expected);
    }

    #[test]
    fn end_succeeds_only_on_empty_input() {
        assert_eq!(end().parse(""), Some(((), "")));
        assert_eq!(end().parse(" "), None);
    }

    #[test]
    fn text_empty_literal_consumes_nothing() {
        assert_eq!(text("").parse("abc"), Some((String::new(), "abc")));
        assert_eq!(text("").parse(""), Some((String::new(), "")));
    }

    #[test]
    fn text_handles_multibyte_literals() {
        assert_eq!(text("λx").parse("λx.x"), Some(("λx".to_string(), ".x")));
    }
}
