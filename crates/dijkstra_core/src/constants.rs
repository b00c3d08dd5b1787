/// Edge weight type
///
/// Signed so that negative input can be detected and rejected when an edge is
/// added. Weights stored in a [`Graph`](crate::graph::Graph) are always >= 0.
pub type Weight = i64;
