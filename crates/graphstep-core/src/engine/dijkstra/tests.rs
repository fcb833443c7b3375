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

fn final_distances(events: &[AlgorithmEvent]) -> Vec<(String, Option<f64>)> {
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

/// Brute-force shortest path over all simple paths, for cross-checking
fn brute_force_distance(graph: &Graph, from: &str, to: &str) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: &str,
        to: &str,
        seen: &mut Vec<String>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == to {
            *best = Some(best.map_or(cost, |b: f64| b.min(cost)));
            return;
        }
        for next in graph.neighbors(current).unwrap() {
            if !seen.contains(&next) {
                seen.push(next.clone());
                let weight = graph.weight(current, &next).unwrap();
                walk(graph, &next, to, seen, cost + weight, best);
                seen.pop();
            }
        }
    }

    let mut best = None;
    let mut seen = vec![from.to_string()];
    walk(graph, from, to, &mut seen, 0.0, &mut best);
    best
}

#[test]
fn test_dijkstra_diamond_distances() {
    let mut events = Vec::new();
    dijkstra(&diamond(), "A", &mut events).unwrap();

    assert_eq!(
        final_distances(&events),
        vec![
            ("A".to_string(), Some(0.0)),
            ("B".to_string(), Some(1.0)),
            ("C".to_string(), Some(2.0)),
            ("D".to_string(), Some(4.0)),
        ]
    );
}

#[test]
fn test_dijkstra_matches_brute_force() {
    let graph = diamond();
    let mut events = Vec::new();
    dijkstra(&graph, "B", &mut events).unwrap();

    for (vertex, distance) in final_distances(&events) {
        assert_eq!(distance, brute_force_distance(&graph, "B", &vertex));
    }
}

#[test]
fn test_dijkstra_settle_event_order() {
    let mut events = Vec::new();
    dijkstra(&diamond(), "A", &mut events).unwrap();

    let settled: Vec<(String, f64)> = events
        .iter()
        .filter_map(|e| match e {
            AlgorithmEvent::VertexSettled { vertex, distance } => {
                Some((vertex.clone(), *distance))
            }
            _ => None,
        })
        .collect();

    // Settles in non-decreasing distance order, one settle per vertex
    assert_eq!(
        settled,
        vec![
            ("A".to_string(), 0.0),
            ("B".to_string(), 1.0),
            ("C".to_string(), 2.0),
            ("D".to_string(), 4.0),
        ]
    );

    // Relaxations for A's three neighbors come right after A settles
    assert!(matches!(
        events[1],
        AlgorithmEvent::EdgeRelaxed { ref to, new_distance, .. }
            if to == "B" && new_distance == 1.0
    ));
}

#[test]
fn test_dijkstra_discards_stale_entries() {
    // B is first relaxed to 5 through the direct edge, then improved to 2
    // through C; the stale heap entry must be skipped, not re-settled.
    let mut graph = Graph::new(true);
    for v in ["A", "B", "C"] {
        graph.add_vertex(v).unwrap();
    }
    graph.add_edge("A", "B", 5.0).unwrap();
    graph.add_edge("A", "C", 1.0).unwrap();
    graph.add_edge("C", "B", 1.0).unwrap();

    let mut events = Vec::new();
    dijkstra(&graph, "A", &mut events).unwrap();

    let settles: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            AlgorithmEvent::VertexSettled { vertex, .. } => Some(vertex.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(settles, vec!["A", "C", "B"]);

    let relaxed_b: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            AlgorithmEvent::EdgeRelaxed { to, new_distance, .. } if to == "B" => {
                Some(*new_distance)
            }
            _ => None,
        })
        .collect();
    assert_eq!(relaxed_b, vec![5.0, 2.0]);
}

#[test]
fn test_dijkstra_unreachable_vertex_has_no_distance() {
    let mut graph = Graph::new(true);
    graph.add_vertex("A").unwrap();
    graph.add_vertex("far").unwrap();

    let mut events = Vec::new();
    dijkstra(&graph, "A", &mut events).unwrap();

    assert_eq!(
        final_distances(&events),
        vec![("A".to_string(), Some(0.0)), ("far".to_string(), None)]
    );
}
