//! Bellman-Ford shortest paths with negative-cycle detection

use crate::engine::event::{AlgorithmEvent, EventSink, RunSummary};
use crate::engine::shared::{collect_arcs, distance_summary, init_distances};
use crate::error::Result;
use crate::graph::GraphSource;

/// Bellman-Ford shortest paths from `start`.
///
/// Runs at most `|V|-1` relaxation rounds over the arc list in encounter
/// order, announcing each round with an `IterationMarker` and stopping
/// early once a round makes no change. Undirected edges relax in both
/// directions. A final pass that still relaxes an arc means a reachable
/// negative cycle: the run ends with `NegativeCycleDetected` and no
/// `Completed` event.
#[tracing::instrument(skip(graph, sink), fields(start = %start))]
pub fn bellman_ford(graph: &dyn GraphSource, start: &str, sink: &mut dyn EventSink) -> Result<()> {
    let vertex_count = graph.vertices().len();
    let arcs = collect_arcs(graph)?;
    let mut dist = init_distances(graph, start);

    for round in 1..vertex_count {
        if !sink.emit(AlgorithmEvent::IterationMarker {
            label: format!("round {}", round),
        }) {
            return Ok(());
        }

        let mut updated = false;
        for arc in &arcs {
            let candidate = dist[&arc.from] + arc.weight;
            if candidate < dist[&arc.to] {
                dist.insert(arc.to.clone(), candidate);
                updated = true;
                if !sink.emit(AlgorithmEvent::EdgeRelaxed {
                    from: arc.from.clone(),
                    to: arc.to.clone(),
                    new_distance: candidate,
                }) {
                    return Ok(());
                }
            }
        }

        if !updated {
            break;
        }
    }

    // Extra pass: an arc that still relaxes closes a negative cycle
    for arc in &arcs {
        if dist[&arc.from] + arc.weight < dist[&arc.to] {
            sink.emit(AlgorithmEvent::NegativeCycleDetected);
            return Ok(());
        }
    }

    let distances = distance_summary(graph, &dist);
    sink.emit(AlgorithmEvent::Completed {
        summary: RunSummary::ShortestPaths { distances },
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dijkstra::dijkstra;
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

    fn summary_distances(events: &[AlgorithmEvent]) -> Vec<(String, Option<f64>)> {
        match events.last() {
            Some(AlgorithmEvent::Completed {
                summary: RunSummary::ShortestPaths { distances },
            }) => distances
                .iter()
                .map(|d| (d.vertex.clone(), d.distance))
                .collect(),
            other => panic!("expected ShortestPaths completion, got {:?}", other),
        }
    }

    #[test]
    fn test_bellman_ford_matches_dijkstra_on_non_negative_weights() {
        let graph = diamond();

        let mut bf_events = Vec::new();
        bellman_ford(&graph, "A", &mut bf_events).unwrap();

        let mut dj_events = Vec::new();
        dijkstra(&graph, "A", &mut dj_events).unwrap();

        assert_eq!(summary_distances(&bf_events), summary_distances(&dj_events));
    }

    #[test]
    fn test_bellman_ford_handles_negative_edge() {
        let mut graph = Graph::new(true);
        for v in ["A", "B", "C"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge("A", "B", 4.0).unwrap();
        graph.add_edge("A", "C", 2.0).unwrap();
        graph.add_edge("C", "B", -3.0).unwrap();

        let mut events = Vec::new();
        bellman_ford(&graph, "A", &mut events).unwrap();

        assert_eq!(
            summary_distances(&events),
            vec![
                ("A".to_string(), Some(0.0)),
                ("B".to_string(), Some(-1.0)),
                ("C".to_string(), Some(2.0)),
            ]
        );
    }

    #[test]
    fn test_bellman_ford_detects_negative_cycle() {
        let mut graph = Graph::new(true);
        for v in ["A", "B", "C"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", -3.0).unwrap();
        graph.add_edge("C", "A", 1.0).unwrap();

        let mut events = Vec::new();
        bellman_ford(&graph, "A", &mut events).unwrap();

        assert!(matches!(
            events.last(),
            Some(AlgorithmEvent::NegativeCycleDetected)
        ));
        assert!(!events
            .iter()
            .any(|e| matches!(e, AlgorithmEvent::Completed { .. })));
    }

    #[test]
    fn test_bellman_ford_stops_early_when_quiescent() {
        // A path graph converges in the first round; the second round is
        // announced, finds nothing to relax, and the loop stops.
        let mut graph = Graph::new(true);
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 2.0).unwrap();
        graph.add_edge("C", "D", 3.0).unwrap();

        let mut events = Vec::new();
        bellman_ford(&graph, "A", &mut events).unwrap();

        let rounds = events
            .iter()
            .filter(|e| matches!(e, AlgorithmEvent::IterationMarker { .. }))
            .count();
        assert_eq!(rounds, 2);

        assert_eq!(
            summary_distances(&events),
            vec![
                ("A".to_string(), Some(0.0)),
                ("B".to_string(), Some(1.0)),
                ("C".to_string(), Some(3.0)),
                ("D".to_string(), Some(6.0)),
            ]
        );
    }

    #[test]
    fn test_undirected_negative_edge_is_a_negative_cycle() {
        // u - v with negative weight relaxes back and forth forever
        let mut graph = Graph::new(false);
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_edge("A", "B", -1.0).unwrap();

        let mut events = Vec::new();
        bellman_ford(&graph, "A", &mut events).unwrap();

        assert!(matches!(
            events.last(),
            Some(AlgorithmEvent::NegativeCycleDetected)
        ));
    }
}
