pub mod brute_force;
pub mod test_graphs;
