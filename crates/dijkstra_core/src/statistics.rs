use std::{fmt, time::Duration};

/// Counters of the last search run by a [`Dijkstra`](crate::search::dijkstra::Dijkstra).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes settled, {} edges relaxed",
            self.nodes_settled, self.edges_relaxed
        )?;
        if let Some(duration) = self.duration {
            write!(f, " in {:?}", duration)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_duration() {
        let stats = SearchStats {
            nodes_settled: 4,
            edges_relaxed: 7,
            duration: None,
        };
        assert_eq!(stats.to_string(), "4 nodes settled, 7 edges relaxed");
    }
}
