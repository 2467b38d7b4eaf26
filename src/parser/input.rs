//! The input cursor threaded through every parser.

use std::fmt;
use std::rc::Rc;

/// The remaining input of a parse.
///
/// `Input` shares the whole source text and remembers how far parsing has
/// advanced, so cloning it (which alternation does for every branch) costs a
/// reference-count increment. The position is a byte offset that always lies
/// on a `char` boundary.
///
/// # Examples
///
/// ```rust
/// use felis::parser::Input;
///
/// let input = Input::new("héllo");
/// let (first, rest) = input.next_char().unwrap();
/// assert_eq!(first, 'h');
/// assert_eq!(rest.as_str(), "éllo");
/// assert_eq!(rest.position(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Input {
    source: Rc<str>,
    position: usize,
}

impl Input {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            source: Rc::from(source),
            position: 0,
        }
    }

    /// The text that has not been consumed yet.
    pub fn as_str(&self) -> &str {
        &self.source[self.position..]
    }

    /// Number of bytes consumed so far.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` when all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.position == self.source.len()
    }

    /// Splits off the next character.
    ///
    /// Returns `None` at the end of input.
    pub fn next_char(&self) -> Option<(char, Self)> {
        let character = self.as_str().chars().next()?;
        Some((character, self.advance(character.len_utf8())))
    }

    /// Consumes `prefix` if the remaining input starts with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use felis::parser::Input;
    ///
    /// let input = Input::new("let x");
    /// assert_eq!(input.strip_prefix("let").map(|rest| rest.position()), Some(3));
    /// assert!(input.strip_prefix("fn").is_none());
    /// ```
    pub fn strip_prefix(&self, prefix: &str) -> Option<Self> {
        self.as_str()
            .starts_with(prefix)
            .then(|| self.advance(prefix.len()))
    }

    fn advance(&self, bytes: usize) -> Self {
        Self {
            source: Rc::clone(&self.source),
            position: self.position + bytes,
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Input")
            .field("position", &self.position)
            .field("remaining", &self.as_str())
            .finish()
    }
}

impl fmt::Display for Input {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}
