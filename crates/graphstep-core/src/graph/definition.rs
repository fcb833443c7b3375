//! On-disk graph definition format
//!
//! A definition is a structured record with `vertices`, `edges`,
//! `directed`, `weighted`, and an optional `name`. JSON is the primary
//! encoding; YAML is accepted by file extension. Edges are 2- or 3-element
//! sequences `[u, v]` / `[u, v, weight]`; when `weighted` is false a
//! supplied weight is ignored and every edge costs 1.0.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphstepError, Result};
use crate::graph::model::Graph;

/// One edge entry: `[u, v]` or `[u, v, weight]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    /// `[u, v]`
    Unweighted(String, String),
    /// `[u, v, weight]`
    Weighted(String, String, f64),
}

impl EdgeSpec {
    /// Edge endpoints as `(from, to)`
    pub fn endpoints(&self) -> (&str, &str) {
        match self {
            EdgeSpec::Unweighted(u, v) | EdgeSpec::Weighted(u, v, _) => (u, v),
        }
    }

    /// The supplied weight, if any
    pub fn weight(&self) -> Option<f64> {
        match self {
            EdgeSpec::Unweighted(..) => None,
            EdgeSpec::Weighted(_, _, w) => Some(*w),
        }
    }
}

/// Serde model of a graph definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Vertex identifiers, unique, in display order
    pub vertices: Vec<String>,

    /// Edge list in declaration order
    pub edges: Vec<EdgeSpec>,

    /// Treat edges as one-way
    #[serde(default)]
    pub directed: bool,

    /// Honor per-edge weights; otherwise every edge costs 1.0
    #[serde(default)]
    pub weighted: bool,

    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GraphDefinition {
    /// Parse a JSON definition
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a YAML definition
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a definition from a file, choosing the parser by extension
    /// (`.yaml`/`.yml` for YAML, JSON otherwise).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let parsed = if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        };

        parsed.map_err(|e| GraphstepError::invalid_definition(path, e))
    }

    /// Serialize to pretty JSON, the canonical file encoding
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The built-in demo graph: four vertices in a weighted diamond
    pub fn sample() -> Self {
        GraphDefinition {
            vertices: ["A", "B", "C", "D"].map(String::from).to_vec(),
            edges: vec![
                EdgeSpec::Weighted("A".to_string(), "B".to_string(), 1.0),
                EdgeSpec::Weighted("B".to_string(), "C".to_string(), 2.0),
                EdgeSpec::Weighted("C".to_string(), "D".to_string(), 3.0),
                EdgeSpec::Weighted("D".to_string(), "A".to_string(), 4.0),
                EdgeSpec::Weighted("A".to_string(), "C".to_string(), 2.0),
            ],
            directed: false,
            weighted: true,
            name: Some("sample".to_string()),
        }
    }

    /// Build the in-memory graph, validating vertex uniqueness, edge
    /// endpoints, and weight finiteness.
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.directed);

        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone())?;
        }

        for spec in &self.edges {
            let (u, v) = spec.endpoints();
            let weight = if self.weighted {
                spec.weight().unwrap_or(1.0)
            } else {
                1.0
            };
            graph.add_edge(u, v, weight)?;
        }

        Ok(graph)
    }
}
