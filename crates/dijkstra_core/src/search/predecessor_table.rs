use rustc_hash::FxHashMap;

use crate::graph::NodeIndex;

/// Node each reached node was last relaxed from. The source and unreached
/// nodes have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredecessorTable {
    predecessors: FxHashMap<NodeIndex, NodeIndex>,
}

impl PredecessorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.predecessors.get(&node).copied()
    }

    pub fn set(&mut self, node: NodeIndex, predecessor: NodeIndex) {
        self.predecessors.insert(node, predecessor);
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }
}
