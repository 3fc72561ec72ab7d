use generational_arena::{Arena, Index};
use std::fmt;
use std::mem;
use tracing::{debug, instrument};

use crate::errors::{ChartError, ChartResult};
use crate::tree_queue::{LevelOrder, ReverseOrder};
use crate::tree_stack::PreOrder;
use crate::tree_traits::{Labels, Traversal, TreeNodeConvert};

/// Tree node in the arena-based org chart.
#[derive(Debug, Clone)]
pub struct Node {
    /// Position title or name, labels may repeat
    pub label: String,
    /// Index of the superior in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of direct subordinates, in insertion order
    pub children: Vec<Index>,
}

impl Node {
    fn new(label: &str, parent: Option<Index>) -> Self {
        Self {
            label: label.to_string(),
            parent,
            children: Vec::new(),
        }
    }
}

/// Organization chart: a single root with any number of ordered subordinates per node.
///
/// All nodes live in one generational arena, every node being owned by its parent's
/// child list and the root by the chart. Cursors handed out by the `begin_*` methods
/// hold arena indices rather than borrowing the chart, so the chart stays mutable
/// while they are alive and they always read the current labels.
///
/// `Clone` is a deep copy. [`OrgChart::take`] moves the whole chart out and leaves
/// an empty one behind.
#[derive(Debug, Clone)]
pub struct OrgChart {
    arena: Arena<Node>,
    root: Option<Index>,
}

impl Default for OrgChart {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgChart {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Sets the root label.
    ///
    /// On an empty chart this creates the root. On a non-empty chart the previous
    /// tree is replaced: every descendant is discarded and the root is relabelled,
    /// leaving a single-node chart. The root keeps its arena slot, so a cursor created
    /// earlier reads `label` at the root position.
    #[instrument(level = "debug", skip(self))]
    pub fn set_root(&mut self, label: &str) -> &mut Self {
        let replaced = self.root.and_then(|root_idx| {
            self.arena.get_mut(root_idx).map(|root| {
                root.label = label.to_string();
                mem::take(&mut root.children)
            })
        });

        match replaced {
            Some(children) => {
                debug!("Replacing chart, discarding {} subtrees", children.len());
                for child in children {
                    self.discard_subtree(child);
                }
            }
            None => {
                let root_idx = self.arena.insert(Node::new(label, None));
                self.root = Some(root_idx);
            }
        }
        self
    }

    /// Appends `child` as the last subordinate of the first node labelled `parent`.
    ///
    /// The lookup is an exact, case-sensitive match in level order.
    ///
    /// # Errors
    ///
    /// [`ChartError::NotFound`] if the chart is empty or no node is labelled `parent`.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent: &str, child: &str) -> ChartResult<&mut Self> {
        let parent_idx = self
            .find(parent)
            .ok_or_else(|| ChartError::NotFound(parent.to_string()))?;

        let child_idx = self.arena.insert(Node::new(child, Some(parent_idx)));
        if let Some(parent_node) = self.arena.get_mut(parent_idx) {
            parent_node.children.push(child_idx);
        }
        debug!("Added {:?} under {:?}", child, parent);
        Ok(self)
    }

    /// Moves the whole chart out in O(1), leaving this one empty.
    #[instrument(level = "trace", skip(self))]
    pub fn take(&mut self) -> OrgChart {
        mem::take(self)
    }

    /// Level-order index of the first node labelled `label`.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, label: &str) -> Option<Index> {
        LevelOrder::begin(self)
            .into_indices()
            .find(|&idx| self.label(idx) == Some(label))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn root_label(&self) -> Option<&str> {
        self.root.and_then(|idx| self.label(idx))
    }

    pub fn node(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }

    /// Label of a live node, None once the node has been discarded.
    pub fn label(&self, idx: Index) -> Option<&str> {
        self.arena.get(idx).map(|node| node.label.as_str())
    }

    pub fn label_mut(&mut self, idx: Index) -> Option<&mut String> {
        self.arena.get_mut(idx).map(|node| &mut node.label)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels, 0 for an empty chart.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Labels of all nodes without subordinates, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        PreOrder::begin(self)
            .into_indices()
            .filter_map(|idx| self.node(idx))
            .filter(|node| node.children.is_empty())
            .map(|node| node.label.clone())
            .collect()
    }

    fn discard_subtree(&mut self, idx: Index) {
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                stack.extend(node.children);
            }
        }
    }

    // Cursors

    /// Default cursor, level order.
    pub fn begin(&self) -> LevelOrder {
        self.begin_level_order()
    }

    pub fn end(&self) -> LevelOrder {
        self.end_level_order()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn begin_level_order(&self) -> LevelOrder {
        LevelOrder::begin(self)
    }

    pub fn end_level_order(&self) -> LevelOrder {
        LevelOrder::end()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn begin_preorder(&self) -> PreOrder {
        PreOrder::begin(self)
    }

    pub fn end_preorder(&self) -> PreOrder {
        PreOrder::end()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn begin_reverse_order(&self) -> ReverseOrder {
        ReverseOrder::begin(self)
    }

    pub fn end_reverse_order(&self) -> ReverseOrder {
        ReverseOrder::end()
    }

    // Borrowing label iterators

    pub fn iter(&self) -> Labels<'_, LevelOrder> {
        self.iter_level_order()
    }

    pub fn iter_level_order(&self) -> Labels<'_, LevelOrder> {
        self.begin_level_order().labels(self)
    }

    pub fn iter_preorder(&self) -> Labels<'_, PreOrder> {
        self.begin_preorder().labels(self)
    }

    pub fn iter_reverse_order(&self) -> Labels<'_, ReverseOrder> {
        self.begin_reverse_order().labels(self)
    }

    // Algorithms over any cursor

    /// Hands every label the cursor reaches to `f` for in-place modification.
    #[instrument(level = "debug", skip(self, cursor, f))]
    pub fn for_each_mut<T, F>(&mut self, mut cursor: T, mut f: F)
    where
        T: Traversal,
        F: FnMut(&mut String),
    {
        while let Some(idx) = cursor.current() {
            if let Some(label) = self.label_mut(idx) {
                f(label);
            }
            cursor.advance();
        }
    }

    /// Overwrites every label the cursor reaches with `f(label)`.
    pub fn transform<T, F>(&mut self, cursor: T, mut f: F)
    where
        T: Traversal,
        F: FnMut(&str) -> String,
    {
        self.for_each_mut(cursor, |label| *label = f(label));
    }

    /// Replaces every label equal to `old` that the cursor reaches, returns the count.
    #[instrument(level = "debug", skip(self, cursor))]
    pub fn replace<T: Traversal>(&mut self, cursor: T, old: &str, new: &str) -> usize {
        let mut replaced = 0;
        self.for_each_mut(cursor, |label| {
            if label == old {
                *label = new.to_string();
                replaced += 1;
            }
        });
        debug!("Replaced {} labels", replaced);
        replaced
    }

    /// Multi-line box drawing of the chart.
    pub fn to_text(&self) -> String {
        self.to_tree_string().to_string()
    }
}

impl fmt::Display for OrgChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}

impl<'a> IntoIterator for &'a OrgChart {
    type Item = &'a str;
    type IntoIter = Labels<'a, LevelOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
