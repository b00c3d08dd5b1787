use serde::{Deserialize, Serialize};

use crate::{
    constants::Weight,
    error::Result,
    graph::NodeIndex,
    search::{
        distance_table::{Distance, DistanceTable},
        predecessor_table::PredecessorTable,
        reconstruct_path,
    },
};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }
}

/// Result of a single source search that settled every reachable node.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeIndex,
    distances: DistanceTable,
    predecessors: PredecessorTable,
}

impl ShortestPathTree {
    pub(crate) fn new(
        source: NodeIndex,
        distances: DistanceTable,
        predecessors: PredecessorTable,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn distance(&self, node: NodeIndex) -> Distance {
        self.distances.get(node)
    }

    /// Shortest path from the source to `target`, `None` if unreachable.
    pub fn path_to(&self, target: NodeIndex) -> Result<Option<ShortestPath>> {
        let Distance::Finite(weight) = self.distances.get(target) else {
            return Ok(None);
        };
        let nodes = reconstruct_path(&self.predecessors, self.source, target)?;
        Ok(Some(ShortestPath::new(nodes, weight)))
    }

    /// Reachable nodes, ordered by index
    pub fn reachable(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<_> = self.distances.iter().map(|(node, _)| node).collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorTable {
        &self.predecessors
    }
}
