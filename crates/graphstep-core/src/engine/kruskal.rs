//! Kruskal minimum spanning tree

use std::cmp::Ordering;

use crate::engine::event::{AlgorithmEvent, EventSink, RunSummary};
use crate::engine::shared::{collect_edges, DisjointSet};
use crate::error::Result;
use crate::graph::GraphSource;

/// Kruskal's minimum spanning tree.
///
/// The edge list is taken in encounter order and sorted ascending by
/// weight with a stable sort, so weight ties keep their encounter order
/// and repeated runs always choose the same tree. An edge joins the tree
/// when its endpoints sit in different disjoint sets.
#[tracing::instrument(skip(graph, sink))]
pub fn kruskal(graph: &dyn GraphSource, sink: &mut dyn EventSink) -> Result<()> {
    let mut edges = collect_edges(graph)?;
    edges.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut sets = DisjointSet::from_vertices(graph.vertices());
    let mut total_weight = 0.0;
    let mut chosen = 0;

    for edge in edges {
        if sets.union(&edge.from, &edge.to) {
            total_weight += edge.weight;
            chosen += 1;
            if !sink.emit(AlgorithmEvent::EdgeChosen {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            }) {
                return Ok(());
            }
        }
    }

    sink.emit(AlgorithmEvent::Completed {
        summary: RunSummary::SpanningTree {
            total_weight,
            edge_count: chosen,
        },
    });
    Ok(())
}
