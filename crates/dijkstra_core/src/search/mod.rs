use log::debug;

use crate::error::{Error, Result};
use crate::graph::NodeIndex;

use self::predecessor_table::PredecessorTable;

pub mod dijkstra;
pub mod distance_table;
pub mod frontier;
pub mod predecessor_table;
pub mod shortest_path;

/// Walks the predecessor chain back from `destination` and returns the nodes
/// from `source` to `destination`, both inclusive.
///
/// A path never contains more nodes than there are predecessor entries plus
/// the source, so a longer walk is reported as [`Error::PredecessorCycle`].
pub fn reconstruct_path(
    predecessors: &PredecessorTable,
    source: NodeIndex,
    destination: NodeIndex,
) -> Result<Vec<NodeIndex>> {
    let mut path = vec![destination];
    let mut current = destination;

    while current != source {
        let previous = predecessors.get(current).ok_or(Error::NoPath {
            from: source,
            to: destination,
        })?;
        if path.len() > predecessors.len() {
            return Err(Error::PredecessorCycle(destination));
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    debug!("Reconstructed path: {:?}", path);
    Ok(path)
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<shortest_path::ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: crate::constants::Weight,
    path: Option<shortest_path::ShortestPath>,
) {
    let expected_path = expected_path
        .into_iter()
        .map(crate::graph::node_index)
        .collect();
    assert_eq!(
        Some(shortest_path::ShortestPath::new(
            expected_path,
            expected_weight
        )),
        path
    );
}
