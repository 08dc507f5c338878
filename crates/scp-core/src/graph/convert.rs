//! Conversion from manifests to the generic graph

use std::collections::HashSet;

use tracing::debug;

use super::model::{Edge, EdgeAttrs, EdgeKind, Graph, GraphMeta, Node, NodeAttrs, NodeKind};
use crate::manifest::{Capability, Dependency, Manifest};
use crate::urn;

/// Build the generic node/edge graph for a sequence of manifests
///
/// Manifests are processed in order. For each one the system node comes
/// first (only on the first sighting of its URN), then every dependency
/// edge, then every capability node with its `PROVIDES` edge. Dependency
/// targets that no earlier manifest declared get a stub node just before
/// their first edge. A later manifest for an already seen URN, including
/// one that was stubbed, contributes edges and capabilities only.
#[must_use]
pub fn build_graph(manifests: &[Manifest]) -> Graph {
    let mut builder = GraphBuilder::default();

    for manifest in manifests {
        builder.add_manifest(manifest);
    }

    builder.finish()
}

/// Call-scoped graph under construction
#[derive(Default)]
struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// System URNs already emitted, declared or stubbed
    seen_systems: HashSet<String>,
}

impl GraphBuilder {
    fn add_manifest(&mut self, manifest: &Manifest) {
        let urn = manifest.urn();

        if self.seen_systems.insert(urn.to_string()) {
            self.nodes.push(system_node(manifest));
        } else {
            debug!("Duplicate manifest for {}, keeping first", urn);
        }

        for dep in &manifest.depends {
            self.add_dependency(urn, dep);
        }

        for cap in &manifest.provides {
            self.add_capability(urn, cap);
        }
    }

    fn add_dependency(&mut self, consumer: &str, dep: &Dependency) {
        if self.seen_systems.insert(dep.system.clone()) {
            self.nodes.push(stub_node(&dep.system));
        }

        self.edges.push(Edge {
            from: consumer.to_string(),
            to: dep.system.clone(),
            attrs: EdgeAttrs::DependsOn {
                capability: dep.capability.clone(),
                criticality: dep.criticality.clone(),
                failure_mode: dep.failure_mode.clone(),
            },
        });
    }

    fn add_capability(&mut self, owner: &str, cap: &Capability) {
        let id = format!("{owner}:{}", cap.capability);

        // Emitted per declaration, never deduplicated and never matched
        // against system URNs.
        let node = Node {
            id: id.clone(),
            name: cap.capability.clone(),
            attrs: NodeAttrs::Capability {
                capability_type: cap.kind.clone(),
            },
        };
        self.nodes.push(node);

        self.edges.push(Edge {
            from: owner.to_string(),
            to: id,
            attrs: EdgeAttrs::Provides,
        });
    }

    fn finish(self) -> Graph {
        let meta = GraphMeta {
            systems_count: count_nodes(&self.nodes, NodeKind::System),
            capabilities_count: count_nodes(&self.nodes, NodeKind::Capability),
            dependencies_count: self
                .edges
                .iter()
                .filter(|e| e.kind() == EdgeKind::DependsOn)
                .count(),
        };

        Graph {
            nodes: self.nodes,
            edges: self.edges,
            meta,
        }
    }
}

fn count_nodes(nodes: &[Node], kind: NodeKind) -> usize {
    nodes.iter().filter(|n| n.kind() == kind).count()
}

fn system_node(manifest: &Manifest) -> Node {
    Node {
        id: manifest.urn().to_string(),
        name: manifest.system.name.clone(),
        attrs: NodeAttrs::System {
            tier: manifest.tier(),
            domain: manifest.domain().map(str::to_string),
            team: manifest.team().map(str::to_string),
        },
    }
}

fn stub_node(target: &str) -> Node {
    Node {
        id: target.to_string(),
        name: urn::last_segment(target).to_string(),
        attrs: NodeAttrs::Stub,
    }
}
