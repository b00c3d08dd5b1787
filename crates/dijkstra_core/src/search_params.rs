//! Parameters for a shortest path search
use crate::search::frontier::FrontierKind;

/// Parameters for a shortest path search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub(crate) frontier: FrontierKind,
    // Stop as soon as the destination is settled
    pub(crate) stop_at_destination: bool,
}

impl SearchParams {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn frontier(mut self, kind: FrontierKind) -> Self {
        self.frontier = kind;
        self
    }

    /// If `false` the search settles every reachable node even after the
    /// destination has been settled.
    pub fn stop_at_destination(mut self, stop: bool) -> Self {
        self.stop_at_destination = stop;
        self
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            frontier: FrontierKind::LinearScan,
            stop_at_destination: true,
        }
    }
}
