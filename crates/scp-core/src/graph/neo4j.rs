//! Neo4j client for graph storage

use std::sync::Arc;

use neo4rs::{BoltInteger, BoltNull, BoltType, ConfigBuilder, Graph, Query};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during Neo4j operations
#[derive(Debug, Error)]
pub enum Neo4jError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),
}

/// Configuration for Neo4j connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
}

impl Neo4jConfig {
    /// Create a new Neo4j configuration
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
            database: None,
        }
    }

    /// Build a configuration only when uri, user and password are all set
    ///
    /// Empty strings count as unset, so an exported but blank environment
    /// variable does not trigger a sync.
    #[must_use]
    pub fn from_parts(
        uri: Option<&str>,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Option<Self> {
        fn present(v: Option<&str>) -> Option<&str> {
            v.filter(|s| !s.is_empty())
        }

        Some(Self::new(present(uri)?, present(user)?, present(password)?))
    }

    /// Set the database name
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
}

/// Client for interacting with Neo4j
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

impl Neo4jClient {
    /// Connect to Neo4j
    ///
    /// # Errors
    /// Returns an error if the connection fails.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, Neo4jError> {
        let mut builder = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password);

        if let Some(db) = &config.database {
            builder = builder.db(db.as_str());
        }

        let neo_config = builder
            .build()
            .map_err(|e| Neo4jError::Connection(e.to_string()))?;
        let graph = Graph::connect(neo_config).await?;

        debug!("Connected to Neo4j at {}", config.uri);

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    /// Create uniqueness constraints if they don't exist
    ///
    /// # Errors
    /// Returns an error if a constraint statement fails.
    pub async fn setup_constraints(&self) -> Result<(), Neo4jError> {
        let constraints = [
            "CREATE CONSTRAINT system_urn IF NOT EXISTS FOR (s:System) REQUIRE s.urn IS UNIQUE",
            "CREATE CONSTRAINT capability_id IF NOT EXISTS FOR (c:Capability) REQUIRE c.id IS UNIQUE",
        ];

        for stmt in constraints {
            self.graph.run(Query::new(stmt.to_string())).await?;
        }

        Ok(())
    }

    /// Get access to the graph for query modules
    pub(super) fn graph(&self) -> &Graph {
        &self.graph
    }
}

/// Bolt value for an optional string property; absent becomes `null`
pub(super) fn optional_string(value: Option<&str>) -> BoltType {
    value.map_or(BoltType::Null(BoltNull), |s| {
        BoltType::String(s.to_string().into())
    })
}

/// Bolt value for an optional integer property; absent becomes `null`
pub(super) fn optional_integer(value: Option<i64>) -> BoltType {
    value.map_or(BoltType::Null(BoltNull), |v| {
        BoltType::Integer(BoltInteger::new(v))
    })
}
