use generational_arena::Index;
use tracing::{instrument, trace};

use crate::arena::OrgChart;
use crate::tree_traits::Traversal;

/// Pre-order cursor: every node before its subordinates, subordinates left to right.
#[derive(Debug, Clone, Default)]
pub struct PreOrder {
    // next node on top
    stack: Vec<Index>,
}

impl Traversal for PreOrder {
    #[instrument(level = "trace", skip(chart))]
    fn begin(chart: &OrgChart) -> Self {
        let mut visited = Vec::new();
        let mut stack: Vec<Index> = chart.root().into_iter().collect();

        while let Some(idx) = stack.pop() {
            if let Some(node) = chart.node(idx) {
                // Push children in reverse order for left-to-right traversal
                stack.extend(node.children.iter().rev().copied());
                visited.push(idx);
            }
        }

        visited.reverse();
        trace!("pre-order over {} nodes", visited.len());
        Self { stack: visited }
    }

    fn end() -> Self {
        Self::default()
    }

    fn current(&self) -> Option<Index> {
        self.stack.last().copied()
    }

    fn advance(&mut self) {
        debug_assert!(!self.stack.is_empty(), "advanced past the end of pre-order");
        self.stack.pop();
    }
}

impl PartialEq for PreOrder {
    fn eq(&self, other: &Self) -> bool {
        self.current() == other.current()
    }
}

impl Eq for PreOrder {}
