//! Validation of literal text, the terminal production of the grammar.

use super::expression::Expression;

/// Characters which may never appear in a literal: the operators, parentheses, and most other
/// ASCII punctuation.
pub const DISALLOWED_CHARACTERS: &[char] = &[
    '*', '+', '~', '`', '!', '@', '#', '$', '%', '^', '&', '(', ')', '-', '_', '=', '{', '[', '}',
    ']', ':', ';', '"', '\\', '\'', '?', '/', '>', '.', '<', ',', '|',
];

/// Returns true if `text` is non-empty and contains none of the [DISALLOWED_CHARACTERS].
///
/// Digits and letters are not distinguished, so `x`, `123` and `x1y2` are all single literals.
pub fn is_valid_literal(text: &str) -> bool {
    !text.is_empty() && !text.contains(DISALLOWED_CHARACTERS)
}

/// Creates a literal node labelled with `text`, or returns `None` if `text` is not a valid
/// literal.
pub fn validate_literal(text: &str) -> Option<Expression> {
    if is_valid_literal(text) {
        Some(Expression::literal(text))
    } else {
        None
    }
}
