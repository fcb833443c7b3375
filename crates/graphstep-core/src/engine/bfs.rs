//! Breadth-first traversal

use std::collections::{HashSet, VecDeque};

use crate::engine::event::{AlgorithmEvent, EventSink, RunSummary};
use crate::error::Result;
use crate::graph::GraphSource;

/// Breadth-first traversal from `start`.
///
/// A vertex joins the frontier the first time it is discovered and is
/// never re-queued; `VertexVisited` fires at dequeue, so events arrive in
/// FIFO discovery order.
#[tracing::instrument(skip(graph, sink), fields(start = %start))]
pub fn bfs(graph: &dyn GraphSource, start: &str, sink: &mut dyn EventSink) -> Result<()> {
    let mut visited: HashSet<String> = HashSet::from([start.to_string()]);
    let mut queue: VecDeque<String> = VecDeque::from([start.to_string()]);

    while let Some(current) = queue.pop_front() {
        if !sink.emit(AlgorithmEvent::VertexVisited {
            vertex: current.clone(),
        }) {
            return Ok(());
        }

        for neighbor in graph.neighbors(&current)? {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
    }

    sink.emit(AlgorithmEvent::Completed {
        summary: RunSummary::Traversal {
            visited: visited.len(),
        },
    });
    Ok(())
}
