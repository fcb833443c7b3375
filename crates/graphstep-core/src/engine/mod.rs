//! Algorithm execution engine
//!
//! Contains the seven algorithm procedures and the name-based dispatch:
//! - `dfs`, `bfs`: traversal
//! - `dijkstra`, `bellman_ford`: shortest paths
//! - `prim`, `kruskal`: minimum spanning tree
//! - `coloring`: greedy coloring
//! - `shared`: utilities used by multiple procedures
//! - `event`: the observable event stream

pub mod bellman_ford;
pub mod bfs;
pub mod coloring;
pub mod dfs;
pub mod dijkstra;
pub mod event;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use event::{AlgorithmEvent, EventSink, FnSink, RunSummary, VertexDistance};

use std::fmt;
use std::str::FromStr;

use crate::error::{GraphstepError, Result};
use crate::graph::GraphSource;

/// The closed set of procedures the engine can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    BellmanFord,
    Prim,
    Kruskal,
    GraphColoring,
}

impl Algorithm {
    /// Every algorithm, in picker order
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::Prim,
        Algorithm::Kruskal,
        Algorithm::GraphColoring,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::Prim => "Prim",
            Algorithm::Kruskal => "Kruskal",
            Algorithm::GraphColoring => "Graph Coloring",
        }
    }

    /// Whether the procedure needs a start vertex
    pub fn requires_start(&self) -> bool {
        !matches!(self, Algorithm::Kruskal | Algorithm::GraphColoring)
    }
}

impl FromStr for Algorithm {
    type Err = GraphstepError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            "prim" => Ok(Algorithm::Prim),
            "kruskal" => Ok(Algorithm::Kruskal),
            "graph coloring" | "graph-coloring" | "coloring" => Ok(Algorithm::GraphColoring),
            other => Err(GraphstepError::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run `algorithm` over `graph`, streaming events into `sink`.
///
/// Validates the start-vertex requirement before any event is emitted:
/// a required-but-missing start fails with `MissingStartVertex`, a start
/// that is not in the graph with `UnknownVertex`. Kruskal and Graph
/// Coloring ignore `start` entirely.
#[tracing::instrument(skip(graph, sink), fields(algorithm = %algorithm))]
pub fn run(
    algorithm: Algorithm,
    graph: &dyn GraphSource,
    start: Option<&str>,
    sink: &mut dyn EventSink,
) -> Result<()> {
    match algorithm {
        Algorithm::Dfs => dfs::dfs(graph, required_start(algorithm, graph, start)?, sink),
        Algorithm::Bfs => bfs::bfs(graph, required_start(algorithm, graph, start)?, sink),
        Algorithm::Dijkstra => {
            dijkstra::dijkstra(graph, required_start(algorithm, graph, start)?, sink)
        }
        Algorithm::BellmanFord => {
            bellman_ford::bellman_ford(graph, required_start(algorithm, graph, start)?, sink)
        }
        Algorithm::Prim => prim::prim(graph, required_start(algorithm, graph, start)?, sink),
        Algorithm::Kruskal => kruskal::kruskal(graph, sink),
        Algorithm::GraphColoring => coloring::graph_coloring(graph, sink),
    }
}

/// Collect a full run into a finished event list, for non-interactive callers
pub fn run_to_vec(
    algorithm: Algorithm,
    graph: &dyn GraphSource,
    start: Option<&str>,
) -> Result<Vec<AlgorithmEvent>> {
    let mut events = Vec::new();
    run(algorithm, graph, start, &mut events)?;
    Ok(events)
}

fn required_start<'a>(
    algorithm: Algorithm,
    graph: &dyn GraphSource,
    start: Option<&'a str>,
) -> Result<&'a str> {
    let start = start.ok_or_else(|| GraphstepError::MissingStartVertex {
        algorithm: algorithm.name().to_string(),
    })?;
    if !graph.vertices().iter().any(|v| v == start) {
        return Err(GraphstepError::UnknownVertex {
            vertex: start.to_string(),
        });
    }
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn small_graph() -> Graph {
        let mut graph = Graph::new(false);
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph
    }

    #[test]
    fn test_algorithm_names_parse_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(matches!(
            "a-star".parse::<Algorithm>(),
            Err(GraphstepError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_start_requirements() {
        assert!(Algorithm::Dfs.requires_start());
        assert!(Algorithm::Prim.requires_start());
        assert!(!Algorithm::Kruskal.requires_start());
        assert!(!Algorithm::GraphColoring.requires_start());
    }

    #[test]
    fn test_missing_start_emits_no_events() {
        let graph = small_graph();
        let mut events = Vec::new();
        let result = run(Algorithm::Bfs, &graph, None, &mut events);

        assert!(matches!(
            result,
            Err(GraphstepError::MissingStartVertex { .. })
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn test_unknown_start_vertex_rejected() {
        let graph = small_graph();
        let mut events = Vec::new();
        let result = run(Algorithm::Dijkstra, &graph, Some("Z"), &mut events);

        assert!(matches!(result, Err(GraphstepError::UnknownVertex { .. })));
        assert!(events.is_empty());
    }

    #[test]
    fn test_kruskal_runs_without_start() {
        let events = run_to_vec(Algorithm::Kruskal, &small_graph(), None).unwrap();
        assert!(matches!(
            events.last(),
            Some(AlgorithmEvent::Completed { .. })
        ));
    }

    #[test]
    fn test_run_dispatches_each_algorithm() {
        let graph = small_graph();
        for algorithm in Algorithm::ALL {
            let events = run_to_vec(algorithm, &graph, Some("A")).unwrap();
            assert!(!events.is_empty(), "{} emitted nothing", algorithm.name());
        }
    }
}
