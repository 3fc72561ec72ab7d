use std::collections::VecDeque;

use generational_arena::Index;
use tracing::{instrument, trace};

use crate::arena::OrgChart;
use crate::tree_traits::Traversal;

/// Breadth-first walk from the root.
///
/// With `left_to_right` false the children of every node are enqueued right to left.
fn breadth_first(chart: &OrgChart, left_to_right: bool) -> VecDeque<Index> {
    let mut visited = VecDeque::new();
    let mut queue = VecDeque::new();
    queue.extend(chart.root());

    while let Some(idx) = queue.pop_front() {
        if let Some(node) = chart.node(idx) {
            if left_to_right {
                queue.extend(node.children.iter().copied());
            } else {
                queue.extend(node.children.iter().rev().copied());
            }
            visited.push_back(idx);
        }
    }
    visited
}

/// Level-order cursor: root first, each level fully before the next, left to right.
///
/// This is the default order of an [`OrgChart`].
#[derive(Debug, Clone, Default)]
pub struct LevelOrder {
    queue: VecDeque<Index>,
}

impl Traversal for LevelOrder {
    #[instrument(level = "trace", skip(chart))]
    fn begin(chart: &OrgChart) -> Self {
        let queue = breadth_first(chart, true);
        trace!("level order over {} nodes", queue.len());
        Self { queue }
    }

    fn end() -> Self {
        Self::default()
    }

    fn current(&self) -> Option<Index> {
        self.queue.front().copied()
    }

    fn advance(&mut self) {
        debug_assert!(!self.queue.is_empty(), "advanced past the end of level order");
        self.queue.pop_front();
    }
}

impl PartialEq for LevelOrder {
    fn eq(&self, other: &Self) -> bool {
        self.current() == other.current()
    }
}

impl Eq for LevelOrder {}

/// Reverse-order cursor: deepest level first, each level left to right, root last.
///
/// The levels are collected breadth first with children taken right to left and then
/// replayed from a stack, so for
///
/// ```text
/// A
/// ├── B
/// │   └── BB
/// ├── C
/// │   └── CC
/// │       └── CCC
/// └── D
/// ```
///
/// the cursor yields `CCC, BB, CC, B, C, D, A`.
#[derive(Debug, Clone, Default)]
pub struct ReverseOrder {
    stack: Vec<Index>,
}

impl Traversal for ReverseOrder {
    #[instrument(level = "trace", skip(chart))]
    fn begin(chart: &OrgChart) -> Self {
        let stack: Vec<Index> = breadth_first(chart, false).into();
        trace!("reverse order over {} nodes", stack.len());
        Self { stack }
    }

    fn end() -> Self {
        Self::default()
    }

    fn current(&self) -> Option<Index> {
        self.stack.last().copied()
    }

    fn advance(&mut self) {
        debug_assert!(!self.stack.is_empty(), "advanced past the end of reverse order");
        self.stack.pop();
    }
}

impl PartialEq for ReverseOrder {
    fn eq(&self, other: &Self) -> bool {
        self.current() == other.current()
    }
}

impl Eq for ReverseOrder {}
