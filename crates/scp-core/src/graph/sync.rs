//! Manifest synchronization into Neo4j

use chrono::Utc;
use tracing::{debug, info};

use super::neo4j::{Neo4jClient, Neo4jError};
use crate::manifest::SourcedManifest;

/// Counts reported after a sync
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub systems_created: usize,
    pub systems_updated: usize,
    pub capabilities_synced: usize,
    pub dependencies_synced: usize,
}

impl SyncStats {
    /// Systems touched, created or updated
    #[must_use]
    pub fn systems_total(&self) -> usize {
        self.systems_created + self.systems_updated
    }

    /// Record one system upsert
    pub fn record_system(&mut self, created: bool) {
        if created {
            self.systems_created += 1;
        } else {
            self.systems_updated += 1;
        }
    }
}

impl std::fmt::Display for SyncStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Systems: {} created, {} updated\nCapabilities: {}\nDependencies: {}",
            self.systems_created,
            self.systems_updated,
            self.capabilities_synced,
            self.dependencies_synced
        )
    }
}

impl Neo4jClient {
    /// Upsert every manifest, in order
    ///
    /// Each manifest writes its system first, then its dependencies, then
    /// its capabilities. All writes of one sync share a single timestamp.
    ///
    /// # Errors
    /// Returns the first query error; manifests before it stay written.
    pub async fn sync_manifests(
        &self,
        manifests: &[SourcedManifest],
    ) -> Result<SyncStats, Neo4jError> {
        let now = Utc::now().to_rfc3339();
        let mut stats = SyncStats::default();

        for sourced in manifests {
            let manifest = &sourced.manifest;
            let urn = manifest.urn();

            let created = self.upsert_system(manifest, &sourced.source, &now).await?;
            stats.record_system(created);
            debug!(
                "{} system {} from {}",
                if created { "Created" } else { "Updated" },
                urn,
                sourced.source
            );

            for dep in &manifest.depends {
                self.upsert_dependency(urn, dep, &now).await?;
                stats.dependencies_synced += 1;
            }

            for cap in &manifest.provides {
                self.upsert_capability(urn, cap).await?;
                stats.capabilities_synced += 1;
            }
        }

        info!(
            "Synced {} systems ({} new)",
            stats.systems_total(),
            stats.systems_created
        );
        Ok(stats)
    }
}
