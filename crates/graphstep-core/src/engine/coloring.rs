//! Greedy graph coloring

use std::collections::{HashMap, HashSet};

use crate::engine::event::{AlgorithmEvent, EventSink, RunSummary};
use crate::error::Result;
use crate::graph::GraphSource;

/// Greedy sequential coloring in vertex insertion order.
///
/// Each vertex takes the smallest positive color absent from its already
/// colored neighbors. This is a heuristic, not a minimum coloring; the
/// policy is fixed so outputs stay reproducible.
#[tracing::instrument(skip(graph, sink))]
pub fn graph_coloring(graph: &dyn GraphSource, sink: &mut dyn EventSink) -> Result<()> {
    let mut colors: HashMap<String, u32> = HashMap::new();
    let mut palette: HashSet<u32> = HashSet::new();

    for vertex in graph.vertices() {
        let used: HashSet<u32> = graph
            .neighbors(&vertex)?
            .iter()
            .filter_map(|n| colors.get(n).copied())
            .collect();

        let mut color = 1;
        while used.contains(&color) {
            color += 1;
        }

        colors.insert(vertex.clone(), color);
        palette.insert(color);

        if !sink.emit(AlgorithmEvent::VertexColored { vertex, color }) {
            return Ok(());
        }
    }

    sink.emit(AlgorithmEvent::Completed {
        summary: RunSummary::Coloring {
            colors_used: palette.len(),
        },
    });
    Ok(())
}
