use alloc::vec::Vec;

use crate::{Expression, Operator};

macro_rules! lit {
    ($l:expr) => { crate::Expression::literal($l) };
}

macro_rules! op {
    (+ $($c:expr),+ $(,)?) => { crate::tests::util::operator(crate::Operator::Add, vec![ $($c),+ ]) };
    (* $($c:expr),+ $(,)?) => { crate::tests::util::operator(crate::Operator::Multiply, vec![ $($c),+ ]) };
}

macro_rules! paren {
    ($label:expr, $inner:expr $(,)?) => { crate::Expression::parenthetical($label, $inner).unwrap() };
}

/// Builds an operator node with any number (at least two) of children.
pub fn operator(op: Operator, children: Vec<Expression>) -> Expression {
    let mut children = children.into_iter();
    let node = Expression::operator(op, children.next().unwrap(), children.next().unwrap()).unwrap();
    for child in children {
        node.add_child(child).unwrap();
    }
    node
}

/// Panics unless every node under `expression` lists its parent correctly.
pub fn assert_links_consistent(expression: &Expression) {
    for child in expression.children() {
        assert!(child.parent().unwrap().ptr_eq(expression));
        assert_links_consistent(&child);
    }
}

/// Panics if any operator node under `expression` has a child with its own operator.
pub fn assert_flat(expression: &Expression) {
    if let Some(op) = expression.operator_kind() {
        assert!(expression.children().iter().all(|c| c.operator_kind() != Some(op)));
    }
    for child in expression.children() {
        assert_flat(&child);
    }
}

/// The tree for `2*x+3*y+4*z+(7+6*z)`, after flattening.
///
/// ```text
/// +
///     *       *       *      (7+6*z)
///   2   x   3   y   4   z       +
///                             7   *
///                               6   z
/// ```
pub fn complex_expression() -> Expression {
    op!(+
        op!(* lit!("2"), lit!("x")),
        op!(* lit!("3"), lit!("y")),
        op!(* lit!("4"), lit!("z")),
        paren!("(7+6*z)", op!(+ lit!("7"), op!(* lit!("6"), lit!("z")))),
    )
}
