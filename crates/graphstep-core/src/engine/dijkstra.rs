//! Dijkstra shortest paths

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::engine::event::{AlgorithmEvent, EventSink, RunSummary};
use crate::engine::shared::{distance_summary, init_distances, DistEntry};
use crate::error::Result;
use crate::graph::GraphSource;

/// State tracked during a Dijkstra run
struct DijkstraState {
    dist: HashMap<String, f64>,
    heap: BinaryHeap<Reverse<DistEntry>>,
}

/// Shortest paths from `start` under non-negative edge weights.
///
/// The heap may hold several entries for one vertex; stale entries (those
/// superseded by a better distance) are discarded lazily on extraction
/// rather than updated in place. Each extraction that survives the
/// staleness check settles its vertex, then relaxes the outgoing edges.
///
/// Negative weights are a precondition violation: the run completes but
/// the reported distances are unspecified.
#[tracing::instrument(skip(graph, sink), fields(start = %start))]
pub fn dijkstra(graph: &dyn GraphSource, start: &str, sink: &mut dyn EventSink) -> Result<()> {
    let mut state = DijkstraState {
        dist: init_distances(graph, start),
        heap: BinaryHeap::new(),
    };
    state.heap.push(Reverse(DistEntry {
        vertex: start.to_string(),
        distance: 0.0,
    }));

    while let Some(Reverse(DistEntry {
        vertex: current,
        distance,
    })) = state.heap.pop()
    {
        // Lazy deletion: a shorter path was settled after this entry was pushed
        if distance > state.dist[&current] {
            continue;
        }

        if !sink.emit(AlgorithmEvent::VertexSettled {
            vertex: current.clone(),
            distance,
        }) {
            return Ok(());
        }

        for neighbor in graph.neighbors(&current)? {
            let weight = graph.weight(&current, &neighbor)?;
            let candidate = distance + weight;
            if candidate < state.dist[&neighbor] {
                state.dist.insert(neighbor.clone(), candidate);
                if !sink.emit(AlgorithmEvent::EdgeRelaxed {
                    from: current.clone(),
                    to: neighbor.clone(),
                    new_distance: candidate,
                }) {
                    return Ok(());
                }
                state.heap.push(Reverse(DistEntry {
                    vertex: neighbor,
                    distance: candidate,
                }));
            }
        }
    }

    let distances = distance_summary(graph, &state.dist);
    sink.emit(AlgorithmEvent::Completed {
        summary: RunSummary::ShortestPaths { distances },
    });
    Ok(())
}

#[cfg(test)]
mod tests;
