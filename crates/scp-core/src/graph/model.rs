//! Graph model types

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Kind of node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    System,
    Capability,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::System => "System",
            Self::Capability => "Capability",
        };
        write!(f, "{s}")
    }
}

/// Kind-specific node fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAttrs {
    /// A system declared by its own manifest
    System {
        tier: Option<i64>,
        domain: Option<String>,
        team: Option<String>,
    },
    /// A system only referenced as a dependency target
    Stub,
    Capability { capability_type: Option<String> },
}

/// A node in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// System URN, or `<owner-urn>:<capability>` for capabilities
    pub id: String,
    pub name: String,
    pub attrs: NodeAttrs,
}

impl Node {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.attrs {
            NodeAttrs::System { .. } | NodeAttrs::Stub => NodeKind::System,
            NodeAttrs::Capability { .. } => NodeKind::Capability,
        }
    }

    #[must_use]
    pub fn is_stub(&self) -> bool {
        matches!(self.attrs, NodeAttrs::Stub)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", &self.kind())?;
        map.serialize_entry("name", &self.name)?;
        match &self.attrs {
            NodeAttrs::System { tier, domain, team } => {
                map.serialize_entry("tier", tier)?;
                map.serialize_entry("domain", domain)?;
                map.serialize_entry("team", team)?;
            }
            NodeAttrs::Stub => map.serialize_entry("stub", &true)?,
            NodeAttrs::Capability { capability_type } => {
                map.serialize_entry("capability_type", capability_type)?;
            }
        }
        map.end()
    }
}

/// Kind of edge/relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    DependsOn,
    Provides,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DependsOn => "DEPENDS_ON",
            Self::Provides => "PROVIDES",
        };
        write!(f, "{s}")
    }
}

/// Kind-specific edge fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeAttrs {
    DependsOn {
        capability: Option<String>,
        criticality: Option<String>,
        failure_mode: Option<String>,
    },
    Provides,
}

/// An edge in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Source node ID
    pub from: String,
    /// Target node ID
    pub to: String,
    pub attrs: EdgeAttrs,
}

impl Edge {
    #[must_use]
    pub fn kind(&self) -> EdgeKind {
        match self.attrs {
            EdgeAttrs::DependsOn { .. } => EdgeKind::DependsOn,
            EdgeAttrs::Provides => EdgeKind::Provides,
        }
    }
}

impl Serialize for Edge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("from", &self.from)?;
        map.serialize_entry("to", &self.to)?;
        map.serialize_entry("type", &self.kind())?;
        if let EdgeAttrs::DependsOn {
            capability,
            criticality,
            failure_mode,
        } = &self.attrs
        {
            map.serialize_entry("capability", capability)?;
            map.serialize_entry("criticality", criticality)?;
            map.serialize_entry("failure_mode", failure_mode)?;
        }
        map.end()
    }
}

/// Summary counts derived from the node and edge lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphMeta {
    pub systems_count: usize,
    pub capabilities_count: usize,
    pub dependencies_count: usize,
}

/// The generic architecture graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub meta: GraphMeta,
}

impl Graph {
    /// Nodes of the given kind, in emission order
    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.kind() == kind)
    }

    /// Edges of the given kind, in emission order
    pub fn edges_of(&self, kind: EdgeKind) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.kind() == kind)
    }

    /// Look up a node by ID
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Pretty-printed JSON with two-space indentation
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
