//! A backtracking recursive-descent parser for the grammar:
//!
//! ```text
//! E := A | X
//! A := A+M | M
//! M := M*M | X
//! X := (E) | L
//! ```
//!
//! `L` is any valid literal, see [validate_literal].
//!
//! Binary productions are parsed by split-and-verify: every occurrence of the operator character
//! (other than the first and last character) is tried from left to right, and the first one where
//! both sides parse becomes the split. This re-parses substrings many times over, so parsing time
//! grows exponentially with the number of operators. It is intended for short, typed-in
//! expressions.

use alloc::{format, string::String};

use crate::error::ParseError;

use super::{expression::{Expression, Operator}, literal::validate_literal};

/// Options controlling [parse_with_settings].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSettings {
    /// Whether to [flatten](Expression::flatten) the tree before returning it.
    pub flatten: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self { flatten: true }
    }
}

/// Parses `text` into a flattened expression tree. Spaces are ignored.
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    parse_with_settings(text, &ParseSettings::default())
}

/// Parses `text` into an expression tree. Spaces are ignored.
///
/// On failure, the returned error holds `text` with its spaces removed. No partial tree is ever
/// returned.
pub fn parse_with_settings(text: &str, settings: &ParseSettings) -> Result<Expression, ParseError> {
    let input = text.chars().filter(|c| *c != ' ').collect::<String>();

    let mut parser = Parser { input: &input, attempts: 0 };
    let result = parser.parse_expression(0, input.len());
    tracing::debug!(
        input = input.as_str(),
        attempts = parser.attempts,
        matched = result.is_some(),
        "parsed expression"
    );

    let Some(expression) = result else {
        return Err(ParseError { input });
    };

    if settings.flatten {
        expression.flatten();
    }
    Ok(expression)
}

/// Signature shared by the productions, so that binary productions can be parameterised by the
/// productions used for each side of the split.
type Production<'a> = fn(&mut Parser<'a>, usize, usize) -> Option<Expression>;

/// Holds the space-stripped input. Each production works on a byte range `start..end` of it, and
/// returns `None` if that range does not match.
struct Parser<'a> {
    input: &'a str,
    attempts: usize,
}

impl<'a> Parser<'a> {
    /// `E := A | X`
    fn parse_expression(&mut self, start: usize, end: usize) -> Option<Expression> {
        self.attempts += 1;
        self.parse_additive(start, end)
            .or_else(|| self.parse_atom(start, end))
    }

    /// `A := A+M | M`
    fn parse_additive(&mut self, start: usize, end: usize) -> Option<Expression> {
        self.attempts += 1;
        self.parse_split(start, end, Operator::Add, Self::parse_additive, Self::parse_multiplicative)
            .or_else(|| self.parse_multiplicative(start, end))
    }

    /// `M := M*M | X`
    ///
    /// Both sides use `M`, so the leftmost split makes a chain of multiplications nest to the
    /// right until it is flattened.
    fn parse_multiplicative(&mut self, start: usize, end: usize) -> Option<Expression> {
        self.attempts += 1;
        self.parse_split(start, end, Operator::Multiply, Self::parse_multiplicative, Self::parse_multiplicative)
            .or_else(|| self.parse_atom(start, end))
    }

    /// Tries each occurrence of `op` strictly inside `start..end`, leftmost first, and builds an
    /// operator node from the first where `left` matches the text before it and `right` matches
    /// the text after it.
    fn parse_split(
        &mut self,
        start: usize,
        end: usize,
        op: Operator,
        left: Production<'a>,
        right: Production<'a>,
    ) -> Option<Expression> {
        let input = self.input;
        let bytes = input.as_bytes();
        let symbol = op.symbol() as u8;

        for split in (start + 1)..end.saturating_sub(1) {
            if bytes[split] != symbol {
                continue;
            }

            let Some(lhs) = left(self, start, split) else { continue };
            let Some(rhs) = right(self, split + 1, end) else { continue };
            return Expression::operator(op, lhs, rhs).ok();
        }

        None
    }

    /// `X := (E) | L`
    ///
    /// A parenthetical may also be directly followed by an operator and a further expression, in
    /// which case the two are joined by that operator.
    fn parse_atom(&mut self, start: usize, end: usize) -> Option<Expression> {
        self.attempts += 1;
        let input = self.input;
        let text = &input[start..end];

        if !text.starts_with('(') {
            return validate_literal(text);
        }

        let close = start + matching_parenthesis(text)?;
        let inner = self.parse_expression(start + 1, close)?;
        let parenthetical = Expression::parenthetical(
            format!("({})", &input[(start + 1)..close]),
            inner,
        ).ok()?;

        if close + 1 == end {
            return Some(parenthetical);
        }

        // Anything other than an operator after the parentheses is left unconsumed, which is not
        // a match
        let op = Operator::from_symbol(char::from(input.as_bytes()[close + 1]))?;
        let rest = self.parse_expression(close + 2, end)?;
        Expression::operator(op, parenthetical, rest).ok()
    }
}

/// Given text starting with `(`, returns the index of the `)` which closes it, or `None` if it is
/// never closed.
fn matching_parenthesis(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, byte) in text.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => (),
        }
    }

    None
}
