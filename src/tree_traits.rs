/*
Cursors hold arena indices, never references into the chart.
A cursor is therefore not tied to a borrow of the chart: the chart can be mutated
while cursors are alive, and every dereference reads the label as it is now.
The traversal order itself is fixed when the cursor is created.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::OrgChart;

/// Capability shared by every traversal cursor.
///
/// Equality between two cursors of the same kind holds iff both are positioned on the
/// same node, or both are at the end.
pub trait Traversal: Sized {
    /// Cursor positioned on the first node of the chart's current shape.
    fn begin(chart: &OrgChart) -> Self;

    /// Terminal cursor, equal to every exhausted cursor of the same kind.
    fn end() -> Self;

    fn current(&self) -> Option<Index>;

    /// Moves to the next node.
    ///
    /// Advancing an exhausted cursor is a caller bug.
    fn advance(&mut self);

    fn is_end(&self) -> bool {
        self.current().is_none()
    }

    /// Label at the current position, None at the end or if the node was discarded.
    fn get<'c>(&self, chart: &'c OrgChart) -> Option<&'c str> {
        self.current().and_then(|idx| chart.label(idx))
    }

    fn get_mut<'c>(&self, chart: &'c mut OrgChart) -> Option<&'c mut String> {
        self.current().and_then(move |idx| chart.label_mut(idx))
    }

    fn labels(self, chart: &OrgChart) -> Labels<'_, Self> {
        Labels {
            cursor: self,
            chart,
        }
    }

    fn into_indices(self) -> Indices<Self> {
        Indices { cursor: self }
    }
}

/// Remaining positions of a cursor, discarded nodes included.
pub struct Indices<T> {
    cursor: T,
}

impl<T: Traversal> Iterator for Indices<T> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor.current()?;
        self.cursor.advance();
        Some(idx)
    }
}

/// Labels reached by a cursor, read from a borrowed chart. Discarded nodes are skipped.
pub struct Labels<'c, T> {
    cursor: T,
    chart: &'c OrgChart,
}

impl<'c, T: Traversal> Labels<'c, T> {
    /// The underlying cursor, positioned on the next label to be yielded.
    pub fn cursor(&self) -> &T {
        &self.cursor
    }
}

impl<'c, T: Traversal> Iterator for Labels<'c, T> {
    type Item = &'c str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.cursor.current() {
            self.cursor.advance();
            if let Some(label) = self.chart.label(idx) {
                return Some(label);
            }
        }
        None
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for OrgChart {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            let mut tree = Tree::new(self.label(root_idx).unwrap_or_default().to_string());

            fn build_tree(chart: &OrgChart, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = chart.node(node_idx) {
                    for &child_idx in &node.children {
                        if let Some(child) = chart.node(child_idx) {
                            let mut child_tree = Tree::new(child.label.clone());
                            build_tree(chart, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("Empty chart".to_string())
        }
    }
}
