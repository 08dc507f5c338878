//! Neo4j query modules organized by entity

mod capability;
mod dependency;
mod system;

// Re-export Neo4jClient for the impl blocks
pub(super) use super::neo4j::Neo4jClient;
