//! Errors reported when a parse has to account for the whole input.
//!
//! Inside the engine failure is plain `None`. These errors only appear at the
//! outer boundary, in [`Parser::parse_complete`](super::Parser::parse_complete).

use thiserror::Error;

/// Why a complete parse was rejected.
///
/// # Examples
///
/// ```rust
/// use felis::parser::ParseError;
///
/// let error = ParseError::TrailingInput { position: 3, remaining: "xyz".to_string() };
/// assert_eq!(error.to_string(), "unexpected trailing input at byte 3: \"xyz\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The parser did not match the input.
    #[error("input did not match")]
    NoMatch,

    /// The parser matched a prefix and left input behind.
    #[error("unexpected trailing input at byte {position}: {remaining:?}")]
    TrailingInput {
        /// Byte offset where the unconsumed input starts.
        position: usize,
        /// The unconsumed input.
        remaining: String,
    },
}
