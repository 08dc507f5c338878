//! Mermaid flowchart export

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::manifest::Manifest;
use crate::urn;

/// Style applied to tier-1 systems
const CRITICAL_CLASS_DEF: &str = "classDef critical fill:#ff6b6b,stroke:#333,stroke-width:2px";

const INDENT: &str = "    ";

/// Flowchart layout direction
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Top to bottom
    TB,
    /// Bottom to top
    BT,
    /// Left to right
    #[default]
    LR,
    /// Right to left
    RL,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TB => "TB",
            Self::BT => "BT",
            Self::LR => "LR",
            Self::RL => "RL",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TB" => Ok(Self::TB),
            "BT" => Ok(Self::BT),
            "LR" => Ok(Self::LR),
            "RL" => Ok(Self::RL),
            _ => Err(format!("unknown direction '{s}', expected TB, BT, LR or RL")),
        }
    }
}

/// A system as it appears in the diagram
#[derive(Debug, Clone)]
struct DiagramNode {
    id: String,
    name: String,
    tier: Option<i64>,
}

impl DiagramNode {
    fn line(&self) -> String {
        match self.tier {
            Some(1) => format!("{INDENT}{}[[\"🔴 {}\"]]", self.id, self.name),
            Some(2) => format!("{INDENT}{}[\"🟡 {}\"]", self.id, self.name),
            _ => format!("{INDENT}{}[\"{}\"]", self.id, self.name),
        }
    }
}

/// Systems keyed by URN, kept in first-registration order
#[derive(Default)]
struct Registry {
    nodes: Vec<DiagramNode>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Insert or replace a system; replacing keeps the original position
    fn register(&mut self, urn: &str, node: DiagramNode) {
        match self.index.get(urn) {
            Some(&pos) => self.nodes[pos] = node,
            None => {
                self.index.insert(urn.to_string(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    fn contains(&self, urn: &str) -> bool {
        self.index.contains_key(urn)
    }

    fn id_of(&self, urn: &str) -> String {
        self.index
            .get(urn)
            .map_or_else(|| urn::node_id(urn), |&pos| self.nodes[pos].id.clone())
    }
}

/// A recorded dependency: consumer URN, target URN, capability label
type DependencyLine<'a> = (&'a str, &'a str, Option<&'a str>);

/// Render manifests as a Mermaid flowchart
///
/// Systems are drawn by tier: tier 1 as a double-bordered 🔴 node, tier 2
/// as a 🟡 node, anything else as a plain node. Dependency targets with no
/// manifest of their own appear as plain nodes named after their URN.
/// Edges carry the consumed capability as a label when one is given.
/// Tier-1 systems are additionally listed under the `critical` class.
#[must_use]
pub fn build_diagram(manifests: &[Manifest], direction: Direction) -> String {
    let (registry, dependencies) = collect(manifests);

    let mut lines = vec![format!("flowchart {direction}")];

    lines.push(String::new());
    lines.push(format!("{INDENT}%% Systems"));
    lines.extend(registry.nodes.iter().map(DiagramNode::line));

    lines.push(String::new());
    lines.push(format!("{INDENT}%% Dependencies"));
    lines.extend(
        dependencies
            .into_iter()
            .map(|(from, to, capability)| edge_line(&registry, from, to, capability)),
    );

    lines.push(String::new());
    lines.push(format!("{INDENT}%% Styling"));
    lines.extend(critical_style_lines(&registry));

    lines.join("\n")
}

/// Register every system and record every dependency, in input order
fn collect(manifests: &[Manifest]) -> (Registry, Vec<DependencyLine<'_>>) {
    let mut registry = Registry::default();
    let mut dependencies = Vec::new();

    for manifest in manifests {
        let system_urn = manifest.urn();
        registry.register(
            system_urn,
            DiagramNode {
                id: urn::node_id(system_urn),
                name: manifest.system.name.clone(),
                tier: manifest.tier(),
            },
        );

        for dep in &manifest.depends {
            dependencies.push((system_urn, dep.system.as_str(), dep.capability.as_deref()));

            if !registry.contains(&dep.system) {
                registry.register(
                    &dep.system,
                    DiagramNode {
                        id: urn::node_id(&dep.system),
                        name: urn::stub_display_name(&dep.system),
                        tier: None,
                    },
                );
            }
        }
    }

    (registry, dependencies)
}

fn edge_line(registry: &Registry, from: &str, to: &str, capability: Option<&str>) -> String {
    let from_id = registry.id_of(from);
    let to_id = registry.id_of(to);
    match capability.filter(|c| !c.is_empty()) {
        Some(cap) => format!("{INDENT}{from_id} -->|{cap}| {to_id}"),
        None => format!("{INDENT}{from_id} --> {to_id}"),
    }
}

/// `classDef` and `class` lines for tier-1 systems, or nothing if there are none
fn critical_style_lines(registry: &Registry) -> Vec<String> {
    let critical: Vec<&str> = registry
        .nodes
        .iter()
        .filter(|n| n.tier == Some(1))
        .map(|n| n.id.as_str())
        .collect();

    if critical.is_empty() {
        return Vec::new();
    }

    vec![
        format!("{INDENT}{CRITICAL_CLASS_DEF}"),
        format!("{INDENT}class {} critical", critical.join(",")),
    ]
}
