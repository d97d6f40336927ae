//! The definition of the expression tree itself.
//!
//! Each node is shared through an [Expression] handle. A node owns its children through its child
//! list, and refers back to its parent through a weak link, so dropping the root of a tree drops
//! every node which is no longer reachable from some other handle.

use core::{cell::RefCell, fmt, iter, mem};

use alloc::{rc::{Rc, Weak}, string::{String, ToString}, vec::Vec};

use crate::error::NodeError;

/// A binary operator which may label an operator node.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Operator {
    /// Addition, `+`.
    Add,

    /// Multiplication, `*`.
    Multiply,
}

impl Operator {
    /// The character used for this operator in expression text.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Multiply => '*',
        }
    }

    /// Attempts to convert the given character to an `Operator`, or returns `None` if it is not
    /// an operator symbol.
    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '*' => Some(Operator::Multiply),
            _ => None,
        }
    }

    /// Like [Operator::from_symbol], but for a label, which must be exactly one operator
    /// character.
    pub fn from_label(label: &str) -> Option<Operator> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        }
    }
}

/// The variant of a node, which determines how many children it may have.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ExpressionKind {
    /// A leaf, never has children.
    Literal,

    /// A `+` or `*` node. Once flattened, always has two or more children.
    Operator(Operator),

    /// A pair of parentheses from the source text, always has exactly one child.
    Parenthetical,
}

#[derive(PartialEq, Eq, Debug, Clone)]
enum NodeContent {
    Literal(String),
    Operator(Operator),

    /// The label is the source text of the parentheses and their contents. It is only used for
    /// display, and is not kept up to date if the contents are rearranged.
    Parenthetical(String),
}

struct NodeData {
    content: NodeContent,
    children: Vec<Expression>,
    parent: Weak<RefCell<NodeData>>,
}

/// A handle to a node in an expression tree.
///
/// Cloning an `Expression` clones the handle, not the node - use [Expression::deep_copy] for an
/// independent tree. Equality (`==`) is structural; use [Expression::ptr_eq] to compare identity.
#[derive(Clone)]
pub struct Expression {
    node: Rc<RefCell<NodeData>>,
}

impl Expression {
    fn new(content: NodeContent) -> Self {
        Self {
            node: Rc::new(RefCell::new(NodeData {
                content,
                children: Vec::new(),
                parent: Weak::new(),
            })),
        }
    }

    /// Creates a new literal node. The label is not validated; see
    /// [validate_literal](crate::node::literal::validate_literal) for that.
    pub fn literal(label: impl Into<String>) -> Self {
        Self::new(NodeContent::Literal(label.into()))
    }

    /// Creates a new operator node with two children. Both children must be detached.
    pub fn operator(op: Operator, left: Expression, right: Expression) -> Result<Self, NodeError> {
        if left.ptr_eq(&right) {
            return Err(NodeError::AlreadyAttached);
        }

        let node = Self::new(NodeContent::Operator(op));
        node.check_attachable(&left)?;
        node.check_attachable(&right)?;
        node.attach(left);
        node.attach(right);
        Ok(node)
    }

    /// Creates a new parenthetical node around `inner`, which must be detached.
    pub fn parenthetical(label: impl Into<String>, inner: Expression) -> Result<Self, NodeError> {
        let node = Self::new(NodeContent::Parenthetical(label.into()));
        node.add_child(inner)?;
        Ok(node)
    }

    pub fn kind(&self) -> ExpressionKind {
        match self.node.borrow().content {
            NodeContent::Literal(_) => ExpressionKind::Literal,
            NodeContent::Operator(op) => ExpressionKind::Operator(op),
            NodeContent::Parenthetical(_) => ExpressionKind::Parenthetical,
        }
    }

    /// The operator of this node, if it is an operator node.
    pub fn operator_kind(&self) -> Option<Operator> {
        match self.kind() {
            ExpressionKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// The display text of this node.
    pub fn label(&self) -> String {
        match &self.node.borrow().content {
            NodeContent::Literal(label) | NodeContent::Parenthetical(label) => label.clone(),
            NodeContent::Operator(op) => op.symbol().to_string(),
        }
    }

    /// Replaces the display text of this node.
    ///
    /// Operator nodes may only be labelled `+` or `*`, and relabelling one changes which operator
    /// it is.
    pub fn set_label(&self, label: impl Into<String>) -> Result<(), NodeError> {
        let label = label.into();
        match &mut self.node.borrow_mut().content {
            NodeContent::Literal(current) | NodeContent::Parenthetical(current) => *current = label,
            NodeContent::Operator(op) =>
                *op = Operator::from_label(&label).ok_or(NodeError::InvalidOperatorLabel(label))?,
        }

        Ok(())
    }

    /// Handles to the children of this node, in order.
    pub fn children(&self) -> Vec<Expression> {
        self.node.borrow().children.clone()
    }

    pub fn child(&self, index: usize) -> Option<Expression> {
        self.node.borrow().children.get(index).cloned()
    }

    pub fn child_count(&self) -> usize {
        self.node.borrow().children.len()
    }

    /// The parent of this node, or `None` if it is a root.
    pub fn parent(&self) -> Option<Expression> {
        self.node.borrow().parent.upgrade().map(|node| Expression { node })
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Iterates over the parent of this node, its parent, and so on up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Expression> {
        iter::successors(self.parent(), |node| node.parent())
    }

    /// The root of the tree containing this node. A root is its own root.
    pub fn root(&self) -> Expression {
        self.ancestors().last().unwrap_or_else(|| self.clone())
    }

    /// Returns true if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Expression) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Appends `child` to this node's children.
    ///
    /// Fails, leaving both nodes untouched, if this node cannot take another child, if `child`
    /// already has a parent, or if `child` is this node or one of its ancestors.
    pub fn add_child(&self, child: Expression) -> Result<(), NodeError> {
        self.check_attachable(&child)?;
        self.attach(child);
        Ok(())
    }

    fn check_attachable(&self, child: &Expression) -> Result<(), NodeError> {
        {
            let data = self.node.borrow();
            match data.content {
                NodeContent::Literal(_) => return Err(NodeError::LiteralHasNoChildren),
                NodeContent::Parenthetical(_) if !data.children.is_empty()
                    => return Err(NodeError::ParentheticalAlreadyFilled),
                _ => (),
            }
        }

        if child.ptr_eq(self) || self.ancestors().any(|ancestor| ancestor.ptr_eq(child)) {
            return Err(NodeError::WouldCreateCycle);
        }
        if !child.is_root() {
            return Err(NodeError::AlreadyAttached);
        }

        Ok(())
    }

    fn attach(&self, child: Expression) {
        child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        self.node.borrow_mut().children.push(child);
    }

    /// Detaches and returns every child of this node.
    pub(crate) fn take_children(&self) -> Vec<Expression> {
        let children = mem::take(&mut self.node.borrow_mut().children);
        for child in &children {
            child.node.borrow_mut().parent = Weak::new();
        }
        children
    }

    /// Replaces the child at `index` with `replacements`, which must be detached. The replaced
    /// child becomes a root.
    pub(crate) fn splice_child(&self, index: usize, replacements: Vec<Expression>) {
        for replacement in &replacements {
            replacement.node.borrow_mut().parent = Rc::downgrade(&self.node);
        }

        let removed = self.node.borrow_mut().children
            .splice(index..=index, replacements)
            .collect::<Vec<_>>();
        for node in removed {
            node.node.borrow_mut().parent = Weak::new();
        }
    }

    /// Exchanges the positions of this node and `other` within their shared parent. All other
    /// siblings keep their positions.
    ///
    /// Both nodes must have the same parent; otherwise nothing is changed and an error is
    /// returned.
    pub fn swap_with(&self, other: &Expression) -> Result<(), NodeError> {
        let parent = self.parent().ok_or(NodeError::Detached)?;
        let other_parent = other.parent().ok_or(NodeError::Detached)?;
        if !parent.ptr_eq(&other_parent) {
            return Err(NodeError::NotSiblings);
        }

        let mut data = parent.node.borrow_mut();
        let this_index = data.children.iter()
            .position(|c| c.ptr_eq(self))
            .ok_or(NodeError::NotSiblings)?;
        let other_index = data.children.iter()
            .position(|c| c.ptr_eq(other))
            .ok_or(NodeError::NotSiblings)?;
        data.children.swap(this_index, other_index);

        tracing::trace!(this_index, other_index, "swapped siblings");
        Ok(())
    }

    /// Returns a copy of the tree rooted at this node. The copy is a root, and shares no nodes
    /// with the original.
    pub fn deep_copy(&self) -> Expression {
        let data = self.node.borrow();
        let copy = Expression::new(data.content.clone());
        for child in &data.children {
            copy.attach(child.deep_copy());
        }
        copy
    }

    /// Writes the labels of this node and its descendants in preorder, one per line, each
    /// indented by one tab per level below this node plus `indent`.
    pub fn write_debug(&self, out: &mut String, indent: usize) {
        out.extend(iter::repeat('\t').take(indent));
        out.push_str(&self.label());
        out.push('\n');

        for child in self.node.borrow().children.iter() {
            child.write_debug(out, indent + 1);
        }
    }

    /// Shorthand for [Expression::write_debug] into a new string, starting at no indentation.
    pub fn to_debug_string(&self) -> String {
        let mut out = String::new();
        self.write_debug(&mut out, 0);
        out
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        let this = self.node.borrow();
        let other = other.node.borrow();
        this.content == other.content && this.children == other.children
    }
}

impl Eq for Expression {}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("kind", &self.kind())
            .field("label", &self.label())
            .field("children", &self.node.borrow().children)
            .finish()
    }
}

/// Renders the tree as expression text. Parentheticals are rendered from their current contents
/// rather than their label.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.node.borrow();
        match &data.content {
            NodeContent::Literal(label) => f.write_str(label),

            NodeContent::Parenthetical(_) => {
                f.write_str("(")?;
                for child in &data.children {
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }

            NodeContent::Operator(op) => {
                for (i, child) in data.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", op.symbol())?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}
