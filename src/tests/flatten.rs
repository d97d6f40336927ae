use crate::{Operator, ParseSettings, parse, parse_with_settings};

use super::util::{assert_flat, assert_links_consistent};

#[test]
fn test_flatten_right_nested_chain() {
    let tree = op!(+ lit!("a"), op!(+ lit!("b"), op!(+ lit!("c"), lit!("d"))));
    tree.flatten();

    assert_eq!(tree, op!(+ lit!("a"), lit!("b"), lit!("c"), lit!("d")));
    assert_links_consistent(&tree);
}

#[test]
fn test_flatten_keeps_position() {
    // The merged node's children take its place, not the front of the list
    let tree = op!(+ lit!("a"), op!(+ lit!("b"), lit!("c")), lit!("d"));
    tree.flatten();

    assert_eq!(tree, op!(+ lit!("a"), lit!("b"), lit!("c"), lit!("d")));
}

#[test]
fn test_flatten_consecutive_merges() {
    let tree = op!(*
        op!(* lit!("a"), lit!("b")),
        op!(* op!(* lit!("c"), lit!("d")), lit!("e")),
        lit!("f"),
    );
    tree.flatten();

    assert_eq!(tree, op!(* lit!("a"), lit!("b"), lit!("c"), lit!("d"), lit!("e"), lit!("f")));
    assert_links_consistent(&tree);
    assert_flat(&tree);
}

#[test]
fn test_flatten_mixed_operators() {
    let tree = op!(+
        op!(* lit!("a"), op!(* lit!("b"), lit!("c"))),
        op!(+ lit!("d"), lit!("e")),
    );
    tree.flatten();

    assert_eq!(
        tree,
        op!(+ op!(* lit!("a"), lit!("b"), lit!("c")), lit!("d"), lit!("e")),
    );
}

#[test]
fn test_flatten_stops_at_parenthetical() {
    let tree = op!(+
        paren!("(a+b)", op!(+ lit!("a"), op!(+ lit!("b"), lit!("c")))),
        lit!("d"),
    );
    tree.flatten();

    // Inside the parenthetical is flattened, but isn't merged with the outside
    assert_eq!(
        tree,
        op!(+
            paren!("(a+b)", op!(+ lit!("a"), lit!("b"), lit!("c"))),
            lit!("d"),
        ),
    );
}

#[test]
fn test_flatten_detaches_merged_node() {
    let inner = op!(+ lit!("b"), lit!("c"));
    let tree = op!(+ lit!("a"), inner.clone());
    tree.flatten();

    assert!(inner.is_root());
    assert_eq!(inner.child_count(), 0);
    assert_eq!(tree.child_count(), 3);
    assert!(tree.child(1).unwrap().parent().unwrap().ptr_eq(&tree));
}

#[test]
fn test_flatten_leaves() {
    let literal = lit!("x");
    literal.flatten();
    assert_eq!(literal, lit!("x"));
}

#[test]
fn test_flatten_idempotent() {
    let tree = parse_with_settings("a+b*c*d+(e+f)+g", &ParseSettings { flatten: false }).unwrap();
    tree.flatten();
    let once = tree.deep_copy();
    tree.flatten();

    assert_eq!(tree, once);
    assert_eq!(tree, parse("a+b*c*d+(e+f)+g").unwrap());
    assert_eq!(tree.operator_kind(), Some(Operator::Add));
    assert_eq!(tree.child_count(), 4);
}
