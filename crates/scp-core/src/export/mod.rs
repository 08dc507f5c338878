//! Export module: textual renderings of the architecture graph
//!
//! Two encodings are supported: the generic node/edge graph as JSON and a
//! Mermaid flowchart with tier-based styling.

pub mod mermaid;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::convert::build_graph;
use crate::manifest::Manifest;

pub use mermaid::{build_diagram, Direction};

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Mermaid,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Json => "json",
            Self::Mermaid => "mermaid",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "mermaid" => Ok(Self::Mermaid),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// Render manifests in the requested format
///
/// `direction` only applies to Mermaid output.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(
    manifests: &[Manifest],
    format: ExportFormat,
    direction: Direction,
) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => build_graph(manifests).to_json_pretty(),
        ExportFormat::Mermaid => Ok(build_diagram(manifests, direction)),
    }
}
