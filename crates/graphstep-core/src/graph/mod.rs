//! Graph model and on-disk definition format
//!
//! Provides the problem-instance side of graphstep:
//! - In-memory adjacency graph with deterministic iteration order
//! - Capability trait the algorithm engine depends on
//! - Serde model for the graph definition file format

pub mod definition;
pub mod model;

pub use definition::{EdgeSpec, GraphDefinition};
pub use model::{Graph, GraphSource};
