//! Graph module: Graph model, construction and Neo4j storage
//!
//! Defines the generic node/edge graph built from manifests and
//! provides the Neo4j client that persists manifests as a graph.

pub mod convert;
pub mod model;
pub mod neo4j;
mod queries;
pub mod sync;

#[cfg(test)]
mod tests;
