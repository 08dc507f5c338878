//! Shared tail of the scan commands: Neo4j sync and export

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use scp_core::{render, Manifest, Neo4jClient, Neo4jConfig, SourcedManifest, SyncStats};
use tracing::info;

use super::types::ExportArgs;

/// Sync manifests into Neo4j and report the stats
///
/// # Errors
/// Returns an error if connecting or any write fails.
pub async fn sync(
    config: &Neo4jConfig,
    manifests: &[SourcedManifest],
    out: &mut impl Write,
) -> Result<SyncStats> {
    writeln!(out, "\nSyncing to Neo4j {}", config.uri)?;

    let client = Neo4jClient::connect(config)
        .await
        .context("Neo4j connection failed")?;
    client.setup_constraints().await.context("Neo4j error")?;
    let stats = client
        .sync_manifests(manifests)
        .await
        .context("Neo4j error")?;

    writeln!(out, "Graph Stats\n{stats}")?;
    Ok(stats)
}

/// Render manifests in the requested format, if any, to a file or `out`
///
/// # Errors
/// Returns an error if rendering or writing fails.
pub fn export(manifests: &[SourcedManifest], args: &ExportArgs, out: &mut impl Write) -> Result<()> {
    let Some(format) = args.format else {
        return Ok(());
    };

    let plain: Vec<Manifest> = manifests.iter().map(|s| s.manifest.clone()).collect();
    let content = render(&plain, format, args.direction)?;
    info!("Rendered {} manifests as {}", plain.len(), format);

    match &args.output {
        Some(path) => {
            fs::write(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "\nExported to {}", path.display())?;
        }
        None => {
            writeln!(out)?;
            writeln!(out, "{content}")?;
        }
    }

    Ok(())
}

/// Sync when configured, then export when requested
///
/// # Errors
/// Returns an error if the sync or the export fails.
pub async fn publish(
    manifests: &[SourcedManifest],
    neo4j: Option<Neo4jConfig>,
    export_args: &ExportArgs,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(config) = neo4j {
        sync(&config, manifests, out).await?;
    }
    export(manifests, export_args, out)
}
