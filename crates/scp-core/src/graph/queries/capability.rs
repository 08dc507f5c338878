//! Capability-related Neo4j queries

use neo4rs::Query;

use super::Neo4jClient;
use crate::graph::neo4j::{optional_string, Neo4jError};
use crate::manifest::Capability;

impl Neo4jClient {
    /// Create or update a capability and its `PROVIDES` edge
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn upsert_capability(
        &self,
        owner_urn: &str,
        capability: &Capability,
    ) -> Result<(), Neo4jError> {
        let query = Query::new(
            r#"
            MATCH (s:System {urn: $urn})
            MERGE (c:Capability {id: $id})
            SET c.name = $name,
                c.type = $type
            MERGE (s)-[:PROVIDES]->(c)
            "#
            .to_string(),
        )
        .param("urn", owner_urn)
        .param("id", format!("{owner_urn}:{}", capability.capability))
        .param("name", capability.capability.clone())
        .param("type", optional_string(capability.kind.as_deref()));

        self.graph().run(query).await?;
        Ok(())
    }
}
