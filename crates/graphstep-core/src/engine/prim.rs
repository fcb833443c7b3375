//! Prim minimum spanning tree

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::engine::event::{AlgorithmEvent, EventSink, RunSummary};
use crate::engine::shared::EdgeEntry;
use crate::error::Result;
use crate::graph::GraphSource;

/// State tracked while growing the tree
struct PrimState {
    visited: HashSet<String>,
    heap: BinaryHeap<Reverse<EdgeEntry>>,
    total_weight: f64,
    chosen: usize,
}

impl PrimState {
    /// Push all edges from `u` that cross into the unvisited set
    fn push_crossing_edges(&mut self, graph: &dyn GraphSource, u: &str) -> Result<()> {
        for v in graph.neighbors(u)? {
            if !self.visited.contains(&v) {
                let weight = graph.weight(u, &v)?;
                self.heap.push(Reverse(EdgeEntry {
                    weight,
                    from: u.to_string(),
                    to: v,
                }));
            }
        }
        Ok(())
    }
}

/// Prim's minimum spanning tree grown from `start`.
///
/// The heap holds candidate edges crossing the visited/unvisited cut.
/// Extraction skips edges whose far endpoint was claimed since they were
/// pushed (lazy deletion, as in Dijkstra). When the graph is not connected
/// from `start` the result is the spanning tree of its component.
#[tracing::instrument(skip(graph, sink), fields(start = %start))]
pub fn prim(graph: &dyn GraphSource, start: &str, sink: &mut dyn EventSink) -> Result<()> {
    let mut state = PrimState {
        visited: HashSet::from([start.to_string()]),
        heap: BinaryHeap::new(),
        total_weight: 0.0,
        chosen: 0,
    };
    state.push_crossing_edges(graph, start)?;

    while let Some(Reverse(EdgeEntry { weight, from, to })) = state.heap.pop() {
        if state.visited.contains(&to) {
            continue;
        }
        state.visited.insert(to.clone());
        state.total_weight += weight;
        state.chosen += 1;

        if !sink.emit(AlgorithmEvent::EdgeChosen {
            from,
            to: to.clone(),
            weight,
        }) {
            return Ok(());
        }

        state.push_crossing_edges(graph, &to)?;
    }

    sink.emit(AlgorithmEvent::Completed {
        summary: RunSummary::SpanningTree {
            total_weight: state.total_weight,
            edge_count: state.chosen,
        },
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn diamond() -> Graph {
        let mut graph = Graph::new(false);
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 2.0).unwrap();
        graph.add_edge("C", "D", 3.0).unwrap();
        graph.add_edge("D", "A", 4.0).unwrap();
        graph.add_edge("A", "C", 2.0).unwrap();
        graph
    }

    fn chosen_edges(events: &[AlgorithmEvent]) -> Vec<(String, String, f64)> {
        events
            .iter()
            .filter_map(|e| match e {
                AlgorithmEvent::EdgeChosen { from, to, weight } => {
                    Some((from.clone(), to.clone(), *weight))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_prim_diamond_tree() {
        let mut events = Vec::new();
        prim(&diamond(), "A", &mut events).unwrap();

        // Weight ties (A-C vs B-C, both 2) break on the source vertex
        assert_eq!(
            chosen_edges(&events),
            vec![
                ("A".to_string(), "B".to_string(), 1.0),
                ("A".to_string(), "C".to_string(), 2.0),
                ("C".to_string(), "D".to_string(), 3.0),
            ]
        );

        assert!(matches!(
            events.last(),
            Some(AlgorithmEvent::Completed {
                summary: RunSummary::SpanningTree {
                    total_weight,
                    edge_count: 3,
                }
            }) if *total_weight == 6.0
        ));
    }

    #[test]
    fn test_prim_disconnected_gives_partial_tree() {
        let mut graph = diamond();
        graph.add_vertex("X").unwrap();
        graph.add_vertex("Y").unwrap();
        graph.add_edge("X", "Y", 1.0).unwrap();

        let mut events = Vec::new();
        prim(&graph, "A", &mut events).unwrap();

        // Only A's component is spanned
        assert_eq!(chosen_edges(&events).len(), 3);
    }

    #[test]
    fn test_prim_single_vertex() {
        let mut graph = Graph::new(false);
        graph.add_vertex("A").unwrap();

        let mut events = Vec::new();
        prim(&graph, "A", &mut events).unwrap();

        assert!(matches!(
            events.last(),
            Some(AlgorithmEvent::Completed {
                summary: RunSummary::SpanningTree {
                    total_weight,
                    edge_count: 0,
                }
            }) if *total_weight == 0.0
        ));
    }
}
