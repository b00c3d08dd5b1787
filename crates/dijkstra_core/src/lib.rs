//! Single source shortest paths on small directed graphs with non-negative
//! integer weights (Dijkstra's algorithm).
//!
//! # Basic usage
//! ```
//! use dijkstra_core::prelude::*;
//!
//! let mut g = Graph::new();
//! let a = g.add_node(Node::new("a"));
//! let b = g.add_node(Node::new("b"));
//! let c = g.add_node(Node::new("c"));
//!
//! g.add_edge(Edge::new(a, b, 4)).unwrap();
//! g.add_edge(Edge::new(a, c, 1)).unwrap();
//! g.add_edge(Edge::new(c, b, 2)).unwrap();
//!
//! let mut dijkstra = Dijkstra::new(&g);
//! let sp = dijkstra.search(a, b).unwrap().expect("b is reachable");
//!
//! assert_eq!(sp.nodes, vec![a, c, b]);
//! assert_eq!(sp.weight, 3);
//!
//! // Unreachable destinations are not an error
//! assert_eq!(dijkstra.search(b, a).unwrap(), None);
//! ```
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod search_params;
pub mod statistics;
pub mod util;
