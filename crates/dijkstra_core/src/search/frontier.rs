//! Set of nodes that are not settled yet.
//!
//! Two implementations are provided. [`LinearFrontier`] scans all members on
//! every extraction and is the better choice for graphs of a few dozen nodes.
//! [`HeapFrontier`] keeps the members in an indexed binary heap and extracts
//! in `O(log |V|)`.
//!
//! Both break ties between members with equal distance by the lower
//! [`NodeIndex`], i.e. the node that was added to the graph first. Searches
//! produce the same paths with either frontier.
use std::{cmp::Reverse, fmt::Debug};

use priority_queue::PriorityQueue;

use crate::{
    constants::Weight,
    graph::NodeIndex,
    search::distance_table::{Distance, DistanceTable},
};

pub trait Frontier: Debug {
    fn contains(&self, node: NodeIndex) -> bool;

    /// Removes `node`. Removing a node that is not a member is a no-op.
    fn remove(&mut self, node: NodeIndex);

    /// Informs the frontier that the tentative distance of `node` dropped to
    /// `distance`.
    fn decrease(&mut self, node: NodeIndex, distance: Weight);

    /// Member with the smallest finite tentative distance. Members at infinity
    /// are never returned, so `None` means no member is reachable.
    fn extract_minimum(&self, distances: &DistanceTable) -> Option<NodeIndex>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrontierKind {
    #[default]
    LinearScan,
    BinaryHeap,
}

impl FrontierKind {
    /// Creates a frontier containing the nodes `0..num_nodes`.
    pub fn build(self, num_nodes: usize) -> Box<dyn Frontier> {
        match self {
            FrontierKind::LinearScan => Box::new(LinearFrontier::new(num_nodes)),
            FrontierKind::BinaryHeap => Box::new(HeapFrontier::new(num_nodes)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinearFrontier {
    members: Vec<bool>,
    len: usize,
}

impl LinearFrontier {
    pub fn new(num_nodes: usize) -> Self {
        LinearFrontier {
            members: vec![true; num_nodes],
            len: num_nodes,
        }
    }
}

impl Frontier for LinearFrontier {
    fn contains(&self, node: NodeIndex) -> bool {
        self.members.get(node.index()).copied().unwrap_or(false)
    }

    fn remove(&mut self, node: NodeIndex) {
        if let Some(member) = self.members.get_mut(node.index()) {
            if *member {
                *member = false;
                self.len -= 1;
            }
        }
    }

    fn decrease(&mut self, _node: NodeIndex, _distance: Weight) {}

    fn extract_minimum(&self, distances: &DistanceTable) -> Option<NodeIndex> {
        // min_by_key keeps the first of several equal minima
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| **member)
            .map(|(idx, _)| NodeIndex::new(idx))
            .map(|node| (distances.get(node), node))
            .filter(|(distance, _)| distance.is_finite())
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, node)| node)
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Highest priority is the smallest `(distance, node)` pair.
type HeapPriority = Reverse<(Distance, NodeIndex)>;

#[derive(Debug, Clone)]
pub struct HeapFrontier {
    queue: PriorityQueue<NodeIndex, HeapPriority>,
}

impl HeapFrontier {
    pub fn new(num_nodes: usize) -> Self {
        let mut queue = PriorityQueue::with_capacity(num_nodes);
        for idx in 0..num_nodes {
            let node = NodeIndex::new(idx);
            queue.push(node, Reverse((Distance::Infinity, node)));
        }
        HeapFrontier { queue }
    }
}

impl Frontier for HeapFrontier {
    fn contains(&self, node: NodeIndex) -> bool {
        self.queue.get(&node).is_some()
    }

    fn remove(&mut self, node: NodeIndex) {
        self.queue.remove(&node);
    }

    fn decrease(&mut self, node: NodeIndex, distance: Weight) {
        self.queue
            .change_priority(&node, Reverse((Distance::Finite(distance), node)));
    }

    fn extract_minimum(&self, distances: &DistanceTable) -> Option<NodeIndex> {
        let (node, Reverse((distance, _))) = self.queue.peek()?;
        debug_assert_eq!(*distance, distances.get(*node));
        distance.is_finite().then_some(*node)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
