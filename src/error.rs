use alloc::string::String;

/// Raised when an input string does not match the expression grammar. Carries the input after
/// spaces have been removed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse expression: {input}")]
pub struct ParseError {
    pub input: String,
}

/// Raised when a tree mutation would break one of the tree's structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// `swap_with` was called on two nodes which do not share a parent.
    #[error("nodes do not share a parent")]
    NotSiblings,

    /// The operation needs the node to have a parent, but it is a root.
    #[error("node has no parent")]
    Detached,

    #[error("literals cannot have children")]
    LiteralHasNoChildren,

    #[error("parenthetical already has its child")]
    ParentheticalAlreadyFilled,

    /// The child being attached is already listed under another parent.
    #[error("node is already attached to a parent")]
    AlreadyAttached,

    /// The child being attached is the parent itself, or one of its ancestors.
    #[error("attaching this node would create a cycle")]
    WouldCreateCycle,

    /// Operator nodes may only be labelled `+` or `*`.
    #[error("'{0}' is not an operator label")]
    InvalidOperatorLabel(String),
}
