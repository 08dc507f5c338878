//! Scan command: Discover manifests under a directory and build the graph

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use scp_core::{load_manifest, Scanner, SourcedManifest};
use tracing::{debug, info};

use super::publish::publish;
use super::types::{ExportArgs, Neo4jArgs};
use super::Outcome;

/// Run the scan command
///
/// Files that fail to load are reported and left out; the scan itself still
/// succeeds.
///
/// # Errors
/// Returns an error if the path cannot be scanned, or if the Neo4j sync or
/// the export fails.
pub async fn run(
    path: &Path,
    neo4j: &Neo4jArgs,
    export: &ExportArgs,
    out: &mut impl Write,
) -> Result<Outcome> {
    writeln!(out, "Scanning {}", path.display())?;

    let files = Scanner::new(path).scan()?;
    if files.is_empty() {
        writeln!(out, "No scp.yaml files found")?;
        return Ok(Outcome::Success);
    }

    writeln!(out, "Found {} SCP files\n", files.len())?;

    let mut manifests = Vec::with_capacity(files.len());
    let mut failed = 0;

    for file in &files {
        match load_manifest(file) {
            Ok(manifest) => {
                writeln!(out, "  ✓ {} ({})", manifest.system.name, manifest.urn())?;
                manifests.push(SourcedManifest::new(manifest, file.display().to_string()));
            }
            Err(e) => {
                debug!("Load failure: {:?}", e);
                writeln!(out, "  ✗ {}: {}", file.display(), e)?;
                failed += 1;
            }
        }
    }

    if failed > 0 {
        writeln!(out, "\nWarning: {failed} files failed to parse")?;
    }
    info!("Loaded {} of {} manifests", manifests.len(), files.len());

    publish(&manifests, neo4j.config(), export, out).await?;
    Ok(Outcome::Success)
}
