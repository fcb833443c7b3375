//! Observable algorithm step events
//!
//! Every procedure reports its progress as a sequence of
//! [`AlgorithmEvent`]s pushed into an [`EventSink`]. Event order is causal
//! and deterministic; consumers may rely on the exact sequence.

use std::fmt;

use serde::Serialize;

/// Per-vertex distance in a shortest-path summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexDistance {
    /// Vertex identifier
    pub vertex: String,
    /// Final distance from the start vertex; `None` when unreachable
    pub distance: Option<f64>,
}

/// Final result carried by [`AlgorithmEvent::Completed`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunSummary {
    /// DFS/BFS: number of vertices reached
    Traversal { visited: usize },
    /// Dijkstra/Bellman-Ford: final distances in vertex order
    ShortestPaths { distances: Vec<VertexDistance> },
    /// Prim/Kruskal: chosen edge count and total weight
    SpanningTree { total_weight: f64, edge_count: usize },
    /// Greedy coloring: number of distinct colors used
    Coloring { colors_used: usize },
}

/// One observable step of an algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent {
    /// A vertex was discovered for the first time (DFS/BFS)
    VertexVisited { vertex: String },
    /// A tentative distance improved (Dijkstra/Bellman-Ford)
    EdgeRelaxed {
        from: String,
        to: String,
        new_distance: f64,
    },
    /// A vertex's distance was finalized (Dijkstra)
    VertexSettled { vertex: String, distance: f64 },
    /// An edge joined the spanning tree (Prim/Kruskal)
    EdgeChosen { from: String, to: String, weight: f64 },
    /// A vertex received a color (greedy coloring)
    VertexColored { vertex: String, color: u32 },
    /// A relaxation round began (Bellman-Ford)
    IterationMarker { label: String },
    /// A reachable negative cycle was found; the run ends without `Completed`
    NegativeCycleDetected,
    /// The run finished normally
    Completed { summary: RunSummary },
}

impl fmt::Display for AlgorithmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmEvent::VertexVisited { vertex } => write!(f, "visit {}", vertex),
            AlgorithmEvent::EdgeRelaxed {
                from,
                to,
                new_distance,
            } => write!(f, "relax {} -> {} (dist = {})", from, to, new_distance),
            AlgorithmEvent::VertexSettled { vertex, distance } => {
                write!(f, "settle {} (distance = {})", vertex, distance)
            }
            AlgorithmEvent::EdgeChosen { from, to, weight } => {
                write!(f, "choose edge {} - {} (w = {})", from, to, weight)
            }
            AlgorithmEvent::VertexColored { vertex, color } => {
                write!(f, "vertex {} -> color {}", vertex, color)
            }
            AlgorithmEvent::IterationMarker { label } => write!(f, "{}", label),
            AlgorithmEvent::NegativeCycleDetected => write!(f, "negative cycle detected"),
            AlgorithmEvent::Completed { summary } => write!(f, "{}", summary),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunSummary::Traversal { visited } => {
                write!(f, "done ({} vertices visited)", visited)
            }
            RunSummary::ShortestPaths { distances } => {
                write!(f, "distances:")?;
                for entry in distances {
                    match entry.distance {
                        Some(d) => write!(f, " {}={}", entry.vertex, d)?,
                        None => write!(f, " {}=unreachable", entry.vertex)?,
                    }
                }
                Ok(())
            }
            RunSummary::SpanningTree {
                total_weight,
                edge_count,
            } => write!(
                f,
                "MST total weight = {} ({} edges)",
                total_weight, edge_count
            ),
            RunSummary::Coloring { colors_used } => write!(f, "colors used: {}", colors_used),
        }
    }
}

/// Consumer of the event stream.
///
/// `emit` returns `false` to request early termination; the producer stops
/// between steps without emitting further events. This is the cancellation
/// mechanism: a consumer that has seen enough simply declines the next
/// event.
pub trait EventSink {
    fn emit(&mut self, event: AlgorithmEvent) -> bool;
}

/// The degenerate batch consumer: collect everything
impl EventSink for Vec<AlgorithmEvent> {
    fn emit(&mut self, event: AlgorithmEvent) -> bool {
        self.push(event);
        true
    }
}

/// Adapter turning a closure into a sink, for streaming consumers
pub struct FnSink<F>(pub F);

impl<F> EventSink for FnSink<F>
where
    F: FnMut(AlgorithmEvent) -> bool,
{
    fn emit(&mut self, event: AlgorithmEvent) -> bool {
        (self.0)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_log_lines() {
        assert_eq!(
            AlgorithmEvent::VertexVisited {
                vertex: "A".to_string()
            }
            .to_string(),
            "visit A"
        );
        assert_eq!(
            AlgorithmEvent::VertexSettled {
                vertex: "B".to_string(),
                distance: 3.0
            }
            .to_string(),
            "settle B (distance = 3)"
        );
        assert_eq!(
            AlgorithmEvent::EdgeChosen {
                from: "A".to_string(),
                to: "B".to_string(),
                weight: 1.5
            }
            .to_string(),
            "choose edge A - B (w = 1.5)"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let event = AlgorithmEvent::EdgeRelaxed {
            from: "A".to_string(),
            to: "B".to_string(),
            new_distance: 2.0,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "edge_relaxed");
        assert_eq!(json["new_distance"], 2.0);
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<AlgorithmEvent> = Vec::new();
        assert!(sink.emit(AlgorithmEvent::NegativeCycleDetected));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_fn_sink_can_stop() {
        let mut count = 0;
        let mut sink = FnSink(|_event| {
            count += 1;
            false
        });
        assert!(!sink.emit(AlgorithmEvent::NegativeCycleDetected));
        assert_eq!(count, 1);
    }
}
