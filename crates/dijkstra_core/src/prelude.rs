//! Re-exports of the most commonly used items in `dijkstra_core`.
pub use crate::constants::Weight;
pub use crate::error::{Error, Result};
pub use crate::search_params::SearchParams;

pub use crate::search;
pub use crate::search::dijkstra::{Dijkstra, DijkstraRun, SearchState, Termination};
pub use crate::search::distance_table::Distance;
pub use crate::search::frontier::FrontierKind;
pub use crate::search::shortest_path::{ShortestPath, ShortestPathTree};

pub use crate::graph::node_index;
pub use crate::graph::{Edge, Graph, Node, NodeIndex};
