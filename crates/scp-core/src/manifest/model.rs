//! Manifest model types

use serde::{Deserialize, Serialize};

/// A single `scp.yaml` manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// SCP schema version
    pub scp: String,
    /// The system this manifest describes
    pub system: System,
    /// Owning team, if declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    /// Capabilities this system provides
    #[serde(default)]
    pub provides: Vec<Capability>,
    /// Capabilities this system consumes from other systems
    #[serde(default)]
    pub depends: Vec<Dependency>,
}

impl Manifest {
    /// URN of the described system
    #[must_use]
    pub fn urn(&self) -> &str {
        &self.system.urn
    }

    /// Criticality tier, if the system is classified
    #[must_use]
    pub fn tier(&self) -> Option<i64> {
        self.system.classification.as_ref().and_then(|c| c.tier)
    }

    /// Business domain, if the system is classified
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.system
            .classification
            .as_ref()
            .and_then(|c| c.domain.as_deref())
    }

    /// Owning team, if ownership is declared
    #[must_use]
    pub fn team(&self) -> Option<&str> {
        self.ownership.as_ref().map(|o| o.team.as_str())
    }
}

/// Identity and classification of a system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    /// Globally unique identifier, e.g. `urn:scp:acme:order-service`
    pub urn: String,
    /// Human readable name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

/// Criticality and domain classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// 1 is the most critical tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Team ownership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    pub team: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
}

/// A way to reach the owning team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Channel kind, e.g. `slack` or `email`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

/// A capability provided by a system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Name, unique within the owning manifest
    pub capability: String,
    /// Transport or protocol tag, e.g. `rest`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A dependency on another system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// URN of the target system
    pub system: String,
    /// Specific capability consumed on the target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// How required the dependency is, e.g. `required` or `optional`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<String>,
    /// How the consumer reacts to failure, e.g. `fail-fast` or `degrade`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_mode: Option<String>,
}

/// A manifest paired with where it was found
///
/// The source is a file path for local scans and `owner/repo` for GitHub scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedManifest {
    pub manifest: Manifest,
    pub source: String,
}

impl SourcedManifest {
    #[must_use]
    pub fn new(manifest: Manifest, source: impl Into<String>) -> Self {
        Self {
            manifest,
            source: source.into(),
        }
    }
}
