use crate::{
    constants::Weight,
    error::Result,
    graph::{node_index, Edge, Graph, Node},
};

/// Edges of the 3x3 grid, all pointing east or south.
///
/// ```text
/// a -2- b -3- c
/// |     |     |
/// 1     2     1
/// |     |     |
/// d -1- e -1- f
/// |           |
/// 2           4
/// |           |
/// g -1- h -2- i
/// ```
pub const GRID_EDGES: [(usize, usize, Weight); 11] = [
    (0, 1, 2), // a -> b
    (0, 3, 1), // a -> d
    (1, 2, 3), // b -> c
    (1, 4, 2), // b -> e
    (2, 5, 1), // c -> f
    (3, 4, 1), // d -> e
    (3, 6, 2), // d -> g
    (4, 5, 1), // e -> f
    (5, 8, 4), // f -> i
    (6, 7, 1), // g -> h
    (7, 8, 2), // h -> i
];

pub const GRID_LABELS: [&str; 9] = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];

/// Builds a graph with nodes `0..num_nodes` labelled by their index.
pub fn graph_from_edges(num_nodes: usize, edges: &[(usize, usize, Weight)]) -> Result<Graph> {
    let labels: Vec<String> = (0..num_nodes).map(|i| i.to_string()).collect();
    labelled_graph_from_edges(&labels, edges)
}

pub fn labelled_graph_from_edges<S: AsRef<str>>(
    labels: &[S],
    edges: &[(usize, usize, Weight)],
) -> Result<Graph> {
    let mut g = Graph::with_capacity(labels.len(), edges.len());
    for label in labels {
        g.add_node(Node::new(label.as_ref()));
    }
    for &(source, target, weight) in edges {
        g.add_edge(Edge::new(node_index(source), node_index(target), weight))?;
    }
    Ok(g)
}

pub fn generate_grid_graph() -> Graph {
    labelled_graph_from_edges(&GRID_LABELS, &GRID_EDGES).expect("grid edges are valid")
}

/// The grid without the edge `source -> target`.
pub fn generate_grid_graph_without(source: usize, target: usize) -> Graph {
    let edges: Vec<_> = GRID_EDGES
        .iter()
        .copied()
        .filter(|&(s, t, _)| (s, t) != (source, target))
        .collect();
    labelled_graph_from_edges(&GRID_LABELS, &edges).expect("grid edges are valid")
}

pub fn generate_simple_graph() -> Graph {
    //      7 -> 8 -> 9
    //      |         |
    // 0 -> 5 -> 6 -  |
    // |         |  \ |
    // 1 -> 2 -> 3 -> 4
    graph_from_edges(
        10,
        &[
            (0, 1, 1),
            (1, 2, 1),
            (2, 3, 1),
            (3, 4, 20),
            (0, 5, 5),
            (5, 6, 1),
            (6, 4, 20),
            (6, 3, 20),
            (5, 7, 5),
            (7, 8, 1),
            (8, 9, 1),
            (9, 4, 1),
        ],
    )
    .expect("simple graph edges are valid")
}

/// Lattice of `width * height` nodes with edges pointing east and south.
///
/// Weights cycle through `1..=9` so that paths have different lengths.
pub fn generate_lattice(width: usize, height: usize) -> Graph {
    let mut edges = Vec::with_capacity(2 * width * height);
    for row in 0..height {
        for col in 0..width {
            let node = row * width + col;
            let weight = (node % 9 + 1) as Weight;
            if col + 1 < width {
                edges.push((node, node + 1, weight));
            }
            if row + 1 < height {
                edges.push((node, node + width, 10 - weight));
            }
        }
    }
    graph_from_edges(width * height, &edges).expect("lattice edges are valid")
}
