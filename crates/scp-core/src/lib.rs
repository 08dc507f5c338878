//! scp-core: Core library for SCP architecture graphs
//!
//! Turns declarative service manifests (`scp.yaml`) into a directed graph
//! of systems, the capabilities they provide and the dependencies they
//! consume. The graph can be exported as JSON or as a Mermaid flowchart,
//! or synchronized into a Neo4j database.
//!
//! # Layout
//!
//! - [`manifest`] - typed manifest model, YAML loading and validation
//! - [`graph`] - generic graph construction and Neo4j storage
//! - [`export`] - JSON and Mermaid renderings
//! - [`scanner`] - manifest discovery on disk and on GitHub

pub mod export;
pub mod graph;
pub mod manifest;
pub mod scanner;
pub mod urn;

#[cfg(test)]
mod test_fixtures;

// Re-export commonly used types
pub use export::{build_diagram, render, Direction, ExportFormat};
pub use graph::convert::build_graph;
pub use graph::model::{Edge, EdgeKind, Graph, GraphMeta, Node, NodeKind};
pub use graph::neo4j::{Neo4jClient, Neo4jConfig, Neo4jError};
pub use graph::sync::SyncStats;
pub use manifest::{load_manifest, parse_manifest, LoadError, Manifest, SourcedManifest};
pub use scanner::{GitHubScanner, RemoteManifest, ScanError, Scanner};
