//! Do-notation for parsers.

#![forbid(unsafe_code)]

/// Sequences parsers in do-notation style.
///
/// # Syntax
///
/// ```text
/// parse! {
///     pattern <= parser_expression;    // Bind (flat_map)
///     let pattern = expression;         // Pure let binding
///     parser_expression                 // Final parser
/// }
/// ```
///
/// Each bind becomes a `flat_map` whose closure may run many times, once per
/// attempt, so bound values used by later steps must be `Copy` or cloned.
///
/// # Examples
///
/// ```rust
/// use felis::parse;
/// use felis::parser::{Parser, character, digit};
///
/// let pair = parse! {
///     left <= digit();
///     _ <= character(',');
///     right <= digit();
///     let joined = format!("{left}{right}");
///     Parser::pure(joined)
/// };
///
/// assert_eq!(pair.parse("1,2;"), Some(("12".to_string(), ";")));
/// assert_eq!(pair.parse("1;2"), None);
/// ```
#[macro_export]
macro_rules! parse {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Case 1: Single expression (terminal) - return as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= parser; rest
    // ==========================================================================

    // Case 2: Bind with identifier pattern
    ($pattern:ident <= $parser:expr ; $($rest:tt)+) => {
        $parser.flat_map(move |$pattern| {
            $crate::parse!($($rest)+)
        })
    };

    // Case 3: Bind with tuple pattern
    (($($pattern:tt)*) <= $parser:expr ; $($rest:tt)+) => {
        $parser.flat_map(move |($($pattern)*)| {
            $crate::parse!($($rest)+)
        })
    };

    // Case 4: Bind with wildcard pattern
    (_ <= $parser:expr ; $($rest:tt)+) => {
        $parser.flat_map(move |_| {
            $crate::parse!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Case 5: Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::parse!($($rest)+)
        }
    };

    // Case 6: Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::parse!($($rest)+)
        }
    };
}
