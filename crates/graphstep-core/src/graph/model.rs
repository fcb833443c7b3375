//! In-memory graph model
//!
//! Vertices keep insertion order and neighbor lists keep edge insertion
//! order. Iteration order is part of the engine's determinism contract:
//! traversal discovery order, heap tie-breaks, and greedy color choices
//! all follow from it.

use std::collections::HashMap;

use crate::error::{GraphstepError, Result};

/// Capability contract the algorithm engine depends on.
///
/// Anything that can enumerate vertices and neighbors in a deterministic
/// order and answer edge-weight queries can drive the engine: the in-memory
/// [`Graph`], or an adapter over a remote graph store.
pub trait GraphSource {
    /// All vertex identifiers, in a fixed deterministic order.
    fn vertices(&self) -> Vec<String>;

    /// Neighbors of `v` in a fixed deterministic order.
    fn neighbors(&self, v: &str) -> Result<Vec<String>>;

    /// Weight of the edge `u -> v`.
    fn weight(&self, u: &str, v: &str) -> Result<f64>;

    /// Whether edges are one-way.
    fn is_directed(&self) -> bool;
}

/// Adjacency-list graph with insertion-ordered vertices and neighbors.
///
/// Immutable for the duration of an algorithm run; built once from a
/// [`GraphDefinition`](crate::graph::GraphDefinition) or assembled directly.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    weights: HashMap<(usize, usize), f64>,
    directed: bool,
}

impl Graph {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            weights: HashMap::new(),
            directed,
        }
    }

    /// Add a vertex. Identifiers must be unique.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(GraphstepError::already_exists("vertex", id));
        }
        self.index.insert(id.clone(), self.vertices.len());
        self.vertices.push(id);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Add an edge between two existing vertices.
    ///
    /// Undirected graphs record both directions. Re-adding an existing edge
    /// overwrites its weight without duplicating the neighbor entry.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(GraphstepError::invalid_value(
                "edge weight",
                format!("{} -> {} ({})", u, v, weight),
            ));
        }

        let ui = self.index_of(u)?;
        let vi = self.index_of(v)?;

        self.insert_arc(ui, vi, weight);
        if !self.directed {
            self.insert_arc(vi, ui, weight);
        }

        Ok(())
    }

    fn insert_arc(&mut self, from: usize, to: usize, weight: f64) {
        if !self.adjacency[from].contains(&to) {
            self.adjacency[from].push(to);
        }
        self.weights.insert((from, to), weight);
    }

    fn index_of(&self, v: &str) -> Result<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| GraphstepError::UnknownVertex {
                vertex: v.to_string(),
            })
    }

    /// Vertex identifiers in insertion order
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Whether the vertex is present
    pub fn contains(&self, v: &str) -> bool {
        self.index.contains_key(v)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges (undirected pairs count once)
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.weights.len()
        } else {
            // Mirrored arcs; self-loops appear once
            let loops = self
                .weights
                .keys()
                .filter(|(from, to)| from == to)
                .count();
            (self.weights.len() - loops) / 2 + loops
        }
    }

    /// Neighbors of `v` in edge insertion order
    pub fn neighbors(&self, v: &str) -> Result<Vec<String>> {
        let vi = self.index_of(v)?;
        Ok(self.adjacency[vi]
            .iter()
            .map(|&i| self.vertices[i].clone())
            .collect())
    }

    /// Weight of the edge `u -> v`
    pub fn weight(&self, u: &str, v: &str) -> Result<f64> {
        let ui = self.index_of(u)?;
        let vi = self.index_of(v)?;
        self.weights
            .get(&(ui, vi))
            .copied()
            .ok_or_else(|| GraphstepError::NoSuchEdge {
                from: u.to_string(),
                to: v.to_string(),
            })
    }

    /// Whether edges are one-way
    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

impl GraphSource for Graph {
    fn vertices(&self) -> Vec<String> {
        self.vertices.clone()
    }

    fn neighbors(&self, v: &str) -> Result<Vec<String>> {
        Graph::neighbors(self, v)
    }

    fn weight(&self, u: &str, v: &str) -> Result<f64> {
        Graph::weight(self, u, v)
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
