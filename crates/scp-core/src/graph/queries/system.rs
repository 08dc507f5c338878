//! System-related Neo4j queries

use neo4rs::Query;

use super::Neo4jClient;
use crate::graph::neo4j::{optional_integer, optional_string, Neo4jError};
use crate::manifest::Manifest;

impl Neo4jClient {
    /// Create or update the system a manifest describes
    ///
    /// A system first created as a dependency stub is promoted here: its
    /// `stub` flag is cleared and its declared properties overwrite the
    /// placeholder ones. Returns `true` only if this call created the node,
    /// so a promoted stub or a repeated manifest counts as an update.
    ///
    /// # Errors
    /// Returns an error if the query fails or returns no row.
    pub async fn upsert_system(
        &self,
        manifest: &Manifest,
        source: &str,
        now: &str,
    ) -> Result<bool, Neo4jError> {
        let query = Query::new(
            r#"
            MERGE (s:System {urn: $urn})
            ON CREATE SET s.created_at = datetime($now),
                          s._created = true
            WITH s, coalesce(s._created, false) AS created
            REMOVE s._created
            SET s.name = $name,
                s.description = $description,
                s.tier = $tier,
                s.domain = $domain,
                s.team = $team,
                s.source = $source,
                s.stub = false,
                s.updated_at = datetime($now)
            RETURN created
            "#
            .to_string(),
        )
        .param("urn", manifest.urn())
        .param("now", now)
        .param("name", manifest.system.name.clone())
        .param(
            "description",
            optional_string(manifest.system.description.as_deref()),
        )
        .param("tier", optional_integer(manifest.tier()))
        .param("domain", optional_string(manifest.domain()))
        .param("team", optional_string(manifest.team()))
        .param("source", source);

        let mut result = self.graph().execute(query).await?;

        match result.next().await? {
            Some(row) => Ok(row.get("created").unwrap_or(false)),
            None => Err(Neo4jError::Query(format!(
                "upsert of {} returned no row",
                manifest.urn()
            ))),
        }
    }
}
