//! Merging of nested same-operator chains.

use super::expression::Expression;

impl Expression {
    /// Converts nested operator nodes of the same operator into a single node, recursively through
    /// the whole tree, in place.
    ///
    /// For example, the tree for `1 + (2 + (3 + 4)) + 5` without its parentheticals would become a
    /// single `+` node with the children `1, 2, 3, 4, 5`, in that order. The children of a merged
    /// node take its place among its siblings. Parentheticals are never merged away, so explicit
    /// grouping from the source text survives.
    ///
    /// Afterwards, no operator node has a child with the same operator. Flattening an
    /// already-flat tree changes nothing.
    pub fn flatten(&self) {
        for child in self.children() {
            child.flatten();
        }

        let Some(op) = self.operator_kind() else { return };

        let mut index = 0;
        while let Some(child) = self.child(index) {
            if child.operator_kind() == Some(op) {
                let grandchildren = child.take_children();
                tracing::trace!(index, count = grandchildren.len(), "merging operator into parent");

                // Don't advance - the spliced-in nodes are checked from this index again
                self.splice_child(index, grandchildren);
            } else {
                index += 1;
            }
        }
    }
}
