//! The expression tree, and the parser which builds it from text.
//!
//! Text is turned into a tree of [Expression](expression::Expression) nodes by the
//! [parser](parser::parse), which [flattens](expression::Expression::flatten) chains of the same
//! operator before handing the tree back. Literal text is checked by the
//! [literal validator](literal::validate_literal).
//!
//! The tree can then be inspected and rearranged through [Expression](expression::Expression)
//! handles, or copied wholesale with [deep_copy](expression::Expression::deep_copy).

pub mod expression;
pub mod literal;
pub mod parser;
mod flatten;
