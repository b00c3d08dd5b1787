use crate::constants::Weight;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Default integer typer for node and edge indices
pub type DefaultIdx = u32;

/// Node identifier.
///
/// The index is the identity of a node. Two nodes with the same label are
/// still distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Node {
    pub label: String,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Node {
            label: label.into(),
        }
    }
}

/// Directed, weighted edge
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Directed graph with non-negative integer edge weights.
///
/// Every edge endpoint is a member of the node set and every weight is >= 0.
/// Both are checked in [`Graph::add_edge`], so a search can rely on them.
/// Deserialization goes through [`GraphData`] and the same checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    pub(crate) edges_out: Vec<Vec<EdgeIndex>>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            edges_out: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            edges_out: Vec::with_capacity(num_nodes),
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
        }
    }

    /// Adds a new node to the graph
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let node_idx = NodeIndex::new(self.nodes.len());

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());
        self.nodes.push(node);

        node_idx
    }

    /// Add a new `edge` to the graph.
    ///
    /// Fails with [`Error::InvalidNode`] if an endpoint does not exist and with
    /// [`Error::NegativeWeight`] if the weight is negative.
    ///
    /// If an edge between source and target already exists the graph keeps a
    /// single edge carrying the lower of both weights.
    ///
    /// Returns the index of the new (or merged) edge.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeIndex> {
        if !self.contains(edge.source) {
            return Err(Error::InvalidNode(edge.source));
        }
        if !self.contains(edge.target) {
            return Err(Error::InvalidNode(edge.target));
        }
        if edge.weight < 0 {
            return Err(Error::NegativeWeight {
                from: edge.source,
                to: edge.target,
                weight: edge.weight,
            });
        }

        for edge_idx in self.edges_out[edge.source.index()].iter() {
            let old_edge = &mut self.edges[edge_idx.index()];
            if old_edge.target == edge.target {
                if edge.weight < old_edge.weight {
                    debug!(
                        "Lowering weight of edge {} -> {} from {} to {}",
                        edge.source.index(),
                        edge.target.index(),
                        old_edge.weight,
                        edge.weight
                    );
                    old_edge.weight = edge.weight;
                }
                return Ok(*edge_idx);
            }
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        self.edges_out[edge.source.index()].push(edge_idx);
        self.edges.push(edge);

        Ok(edge_idx)
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) -> Result<()> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.nodes.len()
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all node indices in insertion order
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.nodes.len()).map(NodeIndex::new)
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Outgoing neighbors of `node_idx` with the weight of the connecting
    /// edge, in edge insertion order.
    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> Result<impl Iterator<Item = (NodeIndex, Weight)> + '_> {
        let out = self
            .edges_out
            .get(node_idx.index())
            .ok_or(Error::InvalidNode(node_idx))?;

        Ok(out.iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            (edge.target, edge.weight)
        }))
    }

    /// Weight of the edge `source -> target`, if there is one.
    pub fn edge_weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        self.edges_out
            .get(source.index())?
            .iter()
            .map(|edge_idx| &self.edges[edge_idx.index()])
            .find(|edge| edge.target == target)
            .map(|edge| edge.weight)
    }

    /// Sum of the edge weights along `nodes`. `None` if two consecutive nodes
    /// are not connected or the sum overflows.
    pub fn path_weight(&self, nodes: &[NodeIndex]) -> Option<Weight> {
        nodes.windows(2).try_fold(0, |sum: Weight, pair| {
            sum.checked_add(self.edge_weight(pair[0], pair[1])?)
        })
    }
}

/// Serialized form of a [`Graph`]. The adjacency lists are rebuilt from the
/// edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl TryFrom<GraphData> for Graph {
    type Error = Error;

    fn try_from(data: GraphData) -> Result<Self> {
        let mut g = Graph::with_capacity(data.nodes.len(), data.edges.len());
        for node in data.nodes {
            g.add_node(node);
        }
        g.add_edges(data.edges)?;
        Ok(g)
    }
}

impl From<Graph> for GraphData {
    fn from(g: Graph) -> Self {
        GraphData {
            nodes: g.nodes,
            edges: g.edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_duplicate_edges() {
        let mut g = Graph::new();
        let a = g.add_node(Node::new("a"));
        let b = g.add_node(Node::new("b"));

        let edge1 = g.add_edge(Edge::new(a, b, 2)).unwrap();
        let edge2 = g.add_edge(Edge::new(a, b, 1)).unwrap();
        let edge3 = g.add_edge(Edge::new(a, b, 5)).unwrap();

        assert_eq!(edge1, edge2);
        assert_eq!(edge1, edge3);
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.edge_weight(a, b), Some(1));
    }

    #[test]
    fn reject_negative_weight() {
        let mut g = Graph::new();
        let a = g.add_node(Node::new("a"));
        let b = g.add_node(Node::new("b"));

        assert_eq!(
            g.add_edge(Edge::new(a, b, -1)),
            Err(Error::NegativeWeight {
                from: a,
                to: b,
                weight: -1,
            })
        );
        assert_eq!(g.num_edges(), 0);
        assert!(g.add_edge(Edge::new(a, b, 0)).is_ok());
    }

    #[test]
    fn reject_unknown_endpoints() {
        let mut g = Graph::new();
        let a = g.add_node(Node::new("a"));

        assert_eq!(
            g.add_edge(Edge::new(a, node_index(7), 1)),
            Err(Error::InvalidNode(node_index(7)))
        );
        assert_eq!(
            g.add_edge(Edge::new(node_index(3), a, 1)),
            Err(Error::InvalidNode(node_index(3)))
        );
        assert!(g.neighbors_outgoing(node_index(1)).is_err());
    }

    #[test]
    fn equal_labels_stay_distinct() {
        let mut g = Graph::new();
        let first = g.add_node(Node::new("x"));
        let second = g.add_node(Node::new("x"));

        g.add_edge(Edge::new(first, second, 4)).unwrap();

        assert_ne!(first, second);
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(g.edge_weight(first, second), Some(4));
        assert_eq!(g.edge_weight(second, first), None);
    }

    #[test]
    fn neighbors_in_insertion_order() {
        let mut g = Graph::new();
        for label in ["a", "b", "c", "d"] {
            g.add_node(Node::new(label));
        }
        g.add_edge(Edge::new(node_index(0), node_index(3), 3)).unwrap();
        g.add_edge(Edge::new(node_index(0), node_index(1), 1)).unwrap();
        g.add_edge(Edge::new(node_index(0), node_index(2), 2)).unwrap();

        let neighbors: Vec<_> = g.neighbors_outgoing(node_index(0)).unwrap().collect();
        assert_eq!(
            neighbors,
            vec![(node_index(3), 3), (node_index(1), 1), (node_index(2), 2)]
        );
    }

    #[test]
    fn path_weight_sums_edges() {
        let mut g = Graph::new();
        for label in ["a", "b", "c"] {
            g.add_node(Node::new(label));
        }
        g.add_edge(Edge::new(node_index(0), node_index(1), 2)).unwrap();
        g.add_edge(Edge::new(node_index(1), node_index(2), 5)).unwrap();

        let path = [node_index(0), node_index(1), node_index(2)];
        assert_eq!(g.path_weight(&path), Some(7));
        assert_eq!(g.path_weight(&[node_index(0)]), Some(0));
        assert_eq!(g.path_weight(&[node_index(0), node_index(2)]), None);

        g.add_edge(Edge::new(node_index(2), node_index(0), Weight::MAX)).unwrap();
        let around = [node_index(1), node_index(2), node_index(0)];
        assert_eq!(g.path_weight(&around), None);
    }

    #[test]
    fn deserialize_valid_graph() {
        let json = r#"{"nodes":[{"label":"a"},{"label":"b"},{"label":"c"}],
            "edges":[{"source":0,"target":1,"weight":3},{"source":1,"target":2,"weight":4}]}"#;
        let g: Graph = serde_json::from_str(json).unwrap();

        assert_eq!(g.num_nodes(), 3);
        let neighbors: Vec<_> = g.neighbors_outgoing(node_index(1)).unwrap().collect();
        assert_eq!(neighbors, vec![(node_index(2), 4)]);

        let serialized = serde_json::to_string(&g).unwrap();
        let again: Graph = serde_json::from_str(&serialized).unwrap();
        assert_eq!(again.edges, g.edges);
        assert_eq!(again.nodes, g.nodes);
    }

    #[test]
    fn deserialize_rejects_negative_weight() {
        let json = r#"{"nodes":[{"label":"a"},{"label":"b"}],
            "edges":[{"source":0,"target":1,"weight":-5}]}"#;
        let err = serde_json::from_str::<Graph>(json).unwrap_err();

        assert!(err.to_string().contains("negative weight -5"), "{}", err);
    }

    #[test]
    fn deserialize_rejects_unknown_endpoints() {
        let json = r#"{"nodes":[{"label":"a"},{"label":"b"}],
            "edges":[{"source":0,"target":3,"weight":1}]}"#;
        let err = serde_json::from_str::<Graph>(json).unwrap_err();

        assert!(err.to_string().contains("(3) does not exist"), "{}", err);

        // adjacency lists are never taken from the input
        let json = r#"{"edges_out":[[3],[]],"nodes":[{"label":"a"},{"label":"b"}],"edges":[]}"#;
        let g: Graph = serde_json::from_str(json).unwrap();
        assert_eq!(g.neighbors_outgoing(node_index(0)).unwrap().count(), 0);
    }
}
