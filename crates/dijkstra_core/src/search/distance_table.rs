use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{constants::Weight, graph::NodeIndex};

/// Tentative distance of a node. `Infinity` compares greater than every
/// finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance {
    Finite(Weight),
    Infinity,
}

impl Distance {
    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(weight) => Some(weight),
            Distance::Infinity => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl From<Option<Weight>> for Distance {
    fn from(weight: Option<Weight>) -> Self {
        weight.map_or(Distance::Infinity, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{weight}"),
            Distance::Infinity => write!(f, "inf"),
        }
    }
}

/// Best known distance from the source per node. Nodes without an entry are
/// at infinity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceTable {
    distances: FxHashMap<NodeIndex, Weight>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node: NodeIndex) -> Distance {
        self.distances.get(&node).copied().into()
    }

    /// Overwrites the distance of `node`. Callers only lower distances.
    pub fn set(&mut self, node: NodeIndex, distance: Weight) {
        debug_assert!(
            Distance::Finite(distance) <= self.get(node),
            "distance of node {} increased",
            node.index()
        );
        self.distances.insert(node, distance);
    }

    /// Number of nodes with a finite distance
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.distances.iter().map(|(node, weight)| (*node, *weight))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::node_index;

    use super::*;

    #[test]
    fn absent_is_infinity() {
        let mut table = DistanceTable::new();
        assert_eq!(table.get(node_index(3)), Distance::Infinity);

        table.set(node_index(3), 12);
        assert_eq!(table.get(node_index(3)), Distance::Finite(12));
        assert_eq!(table.get(node_index(4)), Distance::Infinity);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn infinity_is_greatest() {
        assert!(Distance::Finite(Weight::MAX) < Distance::Infinity);
        assert!(Distance::Finite(0) < Distance::Finite(1));
        assert_eq!(Distance::from(None::<Weight>), Distance::Infinity);
        assert_eq!(Distance::from(Some::<Weight>(3)).finite(), Some(3));
    }
}
