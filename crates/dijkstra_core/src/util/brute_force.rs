//! Exhaustive reference search for small graphs.
use crate::{
    constants::Weight,
    graph::{Graph, NodeIndex},
};

/// Minimum weight over all simple paths from `source` to `target`.
///
/// Exponential in the number of nodes, only meant for graphs with a handful
/// of nodes.
pub fn shortest_distance(g: &Graph, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
    if !g.contains(source) || !g.contains(target) {
        return None;
    }

    let mut on_path = vec![false; g.num_nodes()];
    let mut best = None;
    visit(g, source, target, 0, &mut on_path, &mut best);
    best
}

fn visit(
    g: &Graph,
    node: NodeIndex,
    target: NodeIndex,
    weight: Weight,
    on_path: &mut [bool],
    best: &mut Option<Weight>,
) {
    if node == target {
        if best.map_or(true, |b| weight < b) {
            *best = Some(weight);
        }
        return;
    }

    on_path[node.index()] = true;
    for (neighbor, edge_weight) in g.neighbors_outgoing(node).into_iter().flatten() {
        if !on_path[neighbor.index()] {
            visit(g, neighbor, target, weight + edge_weight, on_path, best);
        }
    }
    on_path[node.index()] = false;
}
