//! Scan-github command: Discover manifests across a GitHub organization

use std::io::Write;

use anyhow::{Context, Result};
use scp_core::{GitHubScanner, SourcedManifest};

use super::publish::publish;
use super::types::{ExportArgs, Neo4jArgs};
use super::Outcome;

/// Run the scan-github command
///
/// Fails without a token.
///
/// # Errors
/// Returns an error if the GitHub API cannot be queried, or if the Neo4j
/// sync or the export fails.
pub async fn run(
    org: &str,
    token: Option<&str>,
    api_url: &str,
    neo4j: &Neo4jArgs,
    export: &ExportArgs,
    out: &mut impl Write,
) -> Result<Outcome> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        writeln!(
            out,
            "Error: GitHub token required (--token or GITHUB_TOKEN env var)"
        )?;
        return Ok(Outcome::Failure);
    };

    writeln!(out, "Scanning GitHub org {org}")?;

    let scanner = GitHubScanner::new(token)?.with_base_url(api_url);
    let found = scanner.scan_org(org).await.context("GitHub API error")?;

    if found.is_empty() {
        writeln!(out, "No scp.yaml files found")?;
        return Ok(Outcome::Success);
    }

    writeln!(out, "Found {} SCP files\n", found.len())?;
    for remote in &found {
        writeln!(out, "  ✓ {} ({})", remote.manifest.system.name, remote.repo)?;
    }

    let manifests: Vec<SourcedManifest> = found.into_iter().map(Into::into).collect();

    publish(&manifests, neo4j.config(), export, out).await?;
    Ok(Outcome::Success)
}
