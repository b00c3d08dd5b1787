use thiserror::Error;

use crate::{constants::Weight, graph::NodeIndex};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node index ({}) does not exist", .0.index())]
    InvalidNode(NodeIndex),

    #[error("edge {} -> {} has negative weight {weight}", .from.index(), .to.index())]
    NegativeWeight {
        from: NodeIndex,
        to: NodeIndex,
        weight: Weight,
    },

    /// The distance reached over `from -> to` does not fit into [`Weight`].
    #[error("distance over edge {} -> {} overflows", .from.index(), .to.index())]
    DistanceOverflow { from: NodeIndex, to: NodeIndex },

    #[error("no path from {} to {}", .from.index(), .to.index())]
    NoPath { from: NodeIndex, to: NodeIndex },

    /// Following predecessors from this node never reached the source.
    #[error("predecessor chain starting at {} does not terminate", .0.index())]
    PredecessorCycle(NodeIndex),
}
