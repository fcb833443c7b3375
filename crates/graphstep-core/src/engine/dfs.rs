//! Depth-first traversal

use std::collections::HashSet;

use crate::engine::event::{AlgorithmEvent, EventSink, RunSummary};
use crate::error::Result;
use crate::graph::GraphSource;

/// Depth-first traversal from `start`.
///
/// Uses an explicit stack instead of recursion so deep graphs cannot blow
/// the call stack. Neighbors are pushed in reverse and the visited check
/// happens at pop time, which reproduces the discovery order of the
/// recursive formulation exactly.
#[tracing::instrument(skip(graph, sink), fields(start = %start))]
pub fn dfs(graph: &dyn GraphSource, start: &str, sink: &mut dyn EventSink) -> Result<()> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut stack = vec![start.to_string()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        if !sink.emit(AlgorithmEvent::VertexVisited {
            vertex: current.clone(),
        }) {
            return Ok(());
        }

        for neighbor in graph.neighbors(&current)?.into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
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
