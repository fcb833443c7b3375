//! Common utilities used by multiple algorithms
//!
//! Heap entries, edge-list collection, distance tables, and the
//! disjoint-set structure. Heap entries carry explicit tie-breaks on
//! vertex identifiers so extraction order stays reproducible.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::engine::event::VertexDistance;
use crate::error::Result;
use crate::graph::GraphSource;

/// Min-heap entry keyed by tentative distance (Dijkstra)
#[derive(Debug, Clone)]
pub struct DistEntry {
    pub vertex: String,
    pub distance: f64,
}

impl PartialEq for DistEntry {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.distance == other.distance
    }
}

impl Eq for DistEntry {}

impl PartialOrd for DistEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Min-heap entry for a candidate crossing edge (Prim)
#[derive(Debug, Clone)]
pub struct EdgeEntry {
    pub weight: f64,
    pub from: String,
    pub to: String,
}

impl PartialEq for EdgeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.from == other.from && self.to == other.to
    }
}

impl Eq for EdgeEntry {}

impl PartialOrd for EdgeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

/// A concrete edge with its resolved weight
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRef {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Collect every stored arc in deterministic encounter order: vertices in
/// insertion order, each vertex's neighbors in adjacency order. Undirected
/// graphs yield both orientations.
pub fn collect_arcs(graph: &dyn GraphSource) -> Result<Vec<EdgeRef>> {
    let mut arcs = Vec::new();
    for u in graph.vertices() {
        for v in graph.neighbors(&u)? {
            let weight = graph.weight(&u, &v)?;
            arcs.push(EdgeRef {
                from: u.clone(),
                to: v,
                weight,
            });
        }
    }
    Ok(arcs)
}

/// Collect the edge list in deterministic encounter order. Undirected
/// graphs report each edge once, keeping the first encounter.
pub fn collect_edges(graph: &dyn GraphSource) -> Result<Vec<EdgeRef>> {
    if graph.is_directed() {
        return collect_arcs(graph);
    }

    let mut edges = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for u in graph.vertices() {
        for v in graph.neighbors(&u)? {
            let key = if u <= v {
                (u.clone(), v.clone())
            } else {
                (v.clone(), u.clone())
            };
            if !seen.insert(key) {
                continue;
            }
            let weight = graph.weight(&u, &v)?;
            edges.push(EdgeRef {
                from: u.clone(),
                to: v,
                weight,
            });
        }
    }
    Ok(edges)
}

/// Tentative-distance table: the start at 0.0, everything else at +inf
pub fn init_distances(graph: &dyn GraphSource, start: &str) -> HashMap<String, f64> {
    let mut dist: HashMap<String, f64> = graph
        .vertices()
        .into_iter()
        .map(|v| (v, f64::INFINITY))
        .collect();
    dist.insert(start.to_string(), 0.0);
    dist
}

/// Snapshot the distance table in vertex order for the completion summary
pub fn distance_summary(
    graph: &dyn GraphSource,
    dist: &HashMap<String, f64>,
) -> Vec<VertexDistance> {
    graph
        .vertices()
        .into_iter()
        .map(|vertex| {
            let d = dist.get(&vertex).copied().unwrap_or(f64::INFINITY);
            VertexDistance {
                vertex,
                distance: d.is_finite().then_some(d),
            }
        })
        .collect()
}

/// Disjoint-set over vertex identifiers with path compression and
/// union-by-attachment: the second root attaches under the first.
#[derive(Debug)]
pub struct DisjointSet {
    parent: HashMap<String, String>,
}

impl DisjointSet {
    /// Each vertex starts in its own singleton set
    pub fn from_vertices(vertices: Vec<String>) -> Self {
        let parent = vertices.into_iter().map(|v| (v.clone(), v)).collect();
        Self { parent }
    }

    /// Representative of the set containing `x`
    pub fn find(&mut self, x: &str) -> String {
        let mut root = x.to_string();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }

        // Path compression
        let mut current = x.to_string();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`.
    /// Returns true when they were separate (the union happened).
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_b, root_a);
        true
    }
}
