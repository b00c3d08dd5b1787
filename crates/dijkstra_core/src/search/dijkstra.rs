use std::time::Instant;

use log::{debug, info, trace};

use crate::error::{Error, Result};
use crate::graph::*;
use crate::search::distance_table::{Distance, DistanceTable};
use crate::search::frontier::Frontier;
use crate::search::predecessor_table::PredecessorTable;
use crate::search::shortest_path::{ShortestPath, ShortestPathTree};
use crate::search_params::SearchParams;
use crate::statistics::SearchStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Initializing,
    Relaxing(NodeIndex),
    SelectingNext,
    Terminated(Termination),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The destination has been settled, its distance is final.
    DestinationSettled,
    /// No unsettled node is reachable from the source.
    FrontierExhausted,
}

/// A single run of Dijkstra's algorithm, advanced one state transition at a
/// time with [`DijkstraRun::step`].
///
/// The distance and predecessor tables are consistent between any two steps,
/// so a caller may stop a run early and inspect them.
#[derive(Debug)]
pub struct DijkstraRun<'a> {
    g: &'a Graph,
    source: NodeIndex,
    destination: Option<NodeIndex>,
    stop_at_destination: bool,
    state: SearchState,
    distances: DistanceTable,
    predecessors: PredecessorTable,
    frontier: Box<dyn Frontier>,
    nodes_settled: usize,
    edges_relaxed: usize,
}

impl<'a> DijkstraRun<'a> {
    /// Prepares a run from `source`. Without a `destination` the run settles
    /// every reachable node.
    pub fn new(
        graph: &'a Graph,
        source: NodeIndex,
        destination: Option<NodeIndex>,
        params: SearchParams,
    ) -> Result<Self> {
        if !graph.contains(source) {
            return Err(Error::InvalidNode(source));
        }
        if let Some(destination) = destination.filter(|d| !graph.contains(*d)) {
            return Err(Error::InvalidNode(destination));
        }

        Ok(DijkstraRun {
            g: graph,
            source,
            destination,
            stop_at_destination: params.stop_at_destination,
            state: SearchState::Initializing,
            distances: DistanceTable::new(),
            predecessors: PredecessorTable::new(),
            frontier: params.frontier.build(graph.num_nodes()),
            nodes_settled: 0,
            edges_relaxed: 0,
        })
    }

    /// Performs one state transition and returns the new state. Stepping a
    /// terminated run does nothing.
    pub fn step(&mut self) -> Result<SearchState> {
        self.state = match self.state {
            SearchState::Initializing => {
                self.distances.set(self.source, 0);
                self.frontier.decrease(self.source, 0);
                SearchState::Relaxing(self.source)
            }
            SearchState::Relaxing(current) => {
                self.relax_neighbors(current)?;
                self.settle(current)
            }
            SearchState::SelectingNext => match self.frontier.extract_minimum(&self.distances) {
                Some(next) => SearchState::Relaxing(next),
                None => SearchState::Terminated(Termination::FrontierExhausted),
            },
            terminated @ SearchState::Terminated(_) => terminated,
        };

        Ok(self.state)
    }

    /// Steps until the run terminates.
    pub fn run(&mut self) -> Result<Termination> {
        loop {
            if let SearchState::Terminated(termination) = self.step()? {
                return Ok(termination);
            }
        }
    }

    /// Fails with [`Error::DistanceOverflow`] if a tentative distance does not
    /// fit into [`Weight`](crate::constants::Weight).
    fn relax_neighbors(&mut self, current: NodeIndex) -> Result<()> {
        let g = self.g;
        // only nodes at a finite distance become current
        let Distance::Finite(current_distance) = self.distances.get(current) else {
            return Ok(());
        };

        for (neighbor, weight) in g.neighbors_outgoing(current)? {
            if !self.frontier.contains(neighbor) {
                continue;
            }
            self.edges_relaxed += 1;

            let new_distance = current_distance
                .checked_add(weight)
                .ok_or(Error::DistanceOverflow {
                    from: current,
                    to: neighbor,
                })?;

            if Distance::Finite(new_distance) < self.distances.get(neighbor) {
                trace!(
                    "Relax {} -> {}: {} -> {}",
                    current.index(),
                    neighbor.index(),
                    self.distances.get(neighbor),
                    new_distance
                );
                self.distances.set(neighbor, new_distance);
                self.predecessors.set(neighbor, current);
                self.frontier.decrease(neighbor, new_distance);
            }
        }

        Ok(())
    }

    fn settle(&mut self, current: NodeIndex) -> SearchState {
        self.frontier.remove(current);
        self.nodes_settled += 1;
        debug!(
            "Settled node {} at distance {}",
            current.index(),
            self.distances.get(current)
        );

        if self.stop_at_destination && self.destination == Some(current) {
            SearchState::Terminated(Termination::DestinationSettled)
        } else if self.frontier.is_empty() {
            SearchState::Terminated(Termination::FrontierExhausted)
        } else {
            SearchState::SelectingNext
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn destination(&self) -> Option<NodeIndex> {
        self.destination
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorTable {
        &self.predecessors
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn nodes_settled(&self) -> usize {
        self.nodes_settled
    }

    pub fn edges_relaxed(&self) -> usize {
        self.edges_relaxed
    }

    pub fn into_tables(self) -> (DistanceTable, PredecessorTable) {
        (self.distances, self.predecessors)
    }
}

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
    params: SearchParams,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_params(graph, SearchParams::default())
    }

    pub fn with_params(graph: &'a Graph, params: SearchParams) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
            params,
        }
    }

    /// Shortest path from `source` to `destination`.
    ///
    /// Returns `Ok(None)` if the destination is unreachable and
    /// [`Error::InvalidNode`] if an endpoint is not part of the graph.
    pub fn search(
        &mut self,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Result<Option<ShortestPath>> {
        let started = Instant::now();
        self.stats = SearchStats::default();

        let mut run = DijkstraRun::new(self.g, source, Some(destination), self.params)?;
        if source == destination {
            self.stats.nodes_settled = 1;
            self.stats.duration = Some(started.elapsed());
            return Ok(Some(ShortestPath::new(vec![source], 0)));
        }

        let termination = run.run()?;
        self.record(&run, started);
        debug!("Search terminated: {:?}", termination);

        let sp = match run.distances().get(destination) {
            Distance::Finite(weight) => {
                let nodes = super::reconstruct_path(run.predecessors(), source, destination)?;
                Some(ShortestPath::new(nodes, weight))
            }
            Distance::Infinity => None,
        };

        if let Some(sp) = &sp {
            debug!("Path found: {:?}", sp);
            info!("Path found, weight: {}, {}", sp.weight, self.stats);
        } else {
            info!("No path found, {}", self.stats);
        }

        Ok(sp)
    }

    /// Settles every node reachable from `source`.
    pub fn shortest_path_tree(&mut self, source: NodeIndex) -> Result<ShortestPathTree> {
        let started = Instant::now();
        self.stats = SearchStats::default();

        let mut run = DijkstraRun::new(self.g, source, None, self.params)?;
        run.run()?;
        self.record(&run, started);
        info!("Shortest path tree from {}, {}", source.index(), self.stats);

        let (distances, predecessors) = run.into_tables();
        Ok(ShortestPathTree::new(source, distances, predecessors))
    }

    fn record(&mut self, run: &DijkstraRun, started: Instant) {
        self.stats = SearchStats {
            nodes_settled: run.nodes_settled(),
            edges_relaxed: run.edges_relaxed(),
            duration: Some(started.elapsed()),
        };
    }
}
