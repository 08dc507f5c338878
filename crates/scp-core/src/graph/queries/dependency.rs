//! Dependency-related Neo4j queries

use neo4rs::Query;

use super::Neo4jClient;
use crate::graph::neo4j::{optional_string, Neo4jError};
use crate::manifest::Dependency;
use crate::urn;

impl Neo4jClient {
    /// Link a consumer to its dependency target
    ///
    /// The target is created as a stub if it is not in the graph yet. The
    /// relationship is keyed by capability so that two dependencies on
    /// different capabilities of the same system stay distinct; a missing
    /// capability is stored as the empty string.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn upsert_dependency(
        &self,
        consumer_urn: &str,
        dependency: &Dependency,
        now: &str,
    ) -> Result<(), Neo4jError> {
        let query = Query::new(
            r#"
            MATCH (s:System {urn: $from})
            MERGE (t:System {urn: $to})
            ON CREATE SET t.name = $stub_name,
                          t.stub = true,
                          t.created_at = datetime($now)
            MERGE (s)-[r:DEPENDS_ON {capability: $capability}]->(t)
            SET r.type = $type,
                r.criticality = $criticality,
                r.failure_mode = $failure_mode,
                r.updated_at = datetime($now)
            "#
            .to_string(),
        )
        .param("from", consumer_urn)
        .param("to", dependency.system.clone())
        .param("stub_name", urn::last_segment(&dependency.system))
        .param("now", now)
        .param(
            "capability",
            dependency.capability.clone().unwrap_or_default(),
        )
        .param("type", optional_string(dependency.kind.as_deref()))
        .param(
            "criticality",
            optional_string(dependency.criticality.as_deref()),
        )
        .param(
            "failure_mode",
            optional_string(dependency.failure_mode.as_deref()),
        );

        self.graph().run(query).await?;
        Ok(())
    }
}
