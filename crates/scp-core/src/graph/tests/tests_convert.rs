//! Tests for building the generic graph from manifests

#![allow(clippy::expect_used)]

use std::collections::HashSet;

use crate::graph::convert::build_graph;
use crate::graph::model::{EdgeAttrs, EdgeKind, GraphMeta, NodeAttrs, NodeKind};
use crate::test_fixtures::{capability, dependency, manifest, order_and_user};

#[test]
fn test_order_and_user_counts() {
    let graph = build_graph(&order_and_user());

    assert_eq!(graph.nodes_of(NodeKind::System).count(), 2);
    assert_eq!(graph.nodes_of(NodeKind::Capability).count(), 2);
    assert_eq!(graph.edges_of(EdgeKind::DependsOn).count(), 1);
    assert_eq!(graph.edges_of(EdgeKind::Provides).count(), 2);
    assert_eq!(
        graph.meta,
        GraphMeta {
            systems_count: 2,
            capabilities_count: 2,
            dependencies_count: 1,
        }
    );
}

#[test]
fn test_order_and_user_emission_order() {
    let graph = build_graph(&order_and_user());

    let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        node_ids,
        vec![
            "urn:scp:test:order-service",
            "urn:scp:test:user-service",
            "urn:scp:test:order-service:order-management",
            "urn:scp:test:user-service:user-lookup",
        ]
    );

    let edges: Vec<(&str, &str, EdgeKind)> = graph
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str(), e.kind()))
        .collect();
    assert_eq!(
        edges,
        vec![
            (
                "urn:scp:test:order-service",
                "urn:scp:test:user-service",
                EdgeKind::DependsOn
            ),
            (
                "urn:scp:test:order-service",
                "urn:scp:test:order-service:order-management",
                EdgeKind::Provides
            ),
            (
                "urn:scp:test:user-service",
                "urn:scp:test:user-service:user-lookup",
                EdgeKind::Provides
            ),
        ]
    );
}

#[test]
fn test_dependency_edge_carries_labels() {
    let graph = build_graph(&order_and_user());
    let edge = graph
        .edges_of(EdgeKind::DependsOn)
        .next()
        .expect("one dependency edge");

    assert_eq!(
        edge.attrs,
        EdgeAttrs::DependsOn {
            capability: Some("user-lookup".to_string()),
            criticality: Some("required".to_string()),
            failure_mode: Some("fail-fast".to_string()),
        }
    );
}

#[test]
fn test_order_service_properties() {
    let graph = build_graph(&order_and_user());
    let node = graph.node("urn:scp:test:order-service").expect("order node");

    assert_eq!(node.name, "Order Service");
    assert_eq!(
        node.attrs,
        NodeAttrs::System {
            tier: Some(1),
            domain: Some("ordering".to_string()),
            team: Some("commerce".to_string()),
        }
    );
}

#[test]
fn test_unclassified_system_has_null_properties() {
    let graph = build_graph(&[manifest("urn:scp:test:plain", "Plain", None)]);

    assert_eq!(
        graph.nodes[0].attrs,
        NodeAttrs::System {
            tier: None,
            domain: None,
            team: None,
        }
    );
}

#[test]
fn test_unknown_dependency_yields_single_stub() {
    let mut a = manifest("urn:scp:test:a", "A", None);
    a.depends = vec![dependency("urn:scp:ext:payment-gateway", Some("charge"))];
    let mut b = manifest("urn:scp:test:b", "B", None);
    b.depends = vec![dependency("urn:scp:ext:payment-gateway", Some("refund"))];

    let graph = build_graph(&[a, b]);

    let stubs: Vec<_> = graph.nodes.iter().filter(|n| n.is_stub()).collect();
    assert_eq!(stubs.len(), 1);
    assert_eq!(stubs[0].id, "urn:scp:ext:payment-gateway");
    assert_eq!(stubs[0].name, "payment-gateway");
    assert_eq!(graph.meta.systems_count, 3);
    assert_eq!(graph.meta.dependencies_count, 2);
}

#[test]
fn test_stub_emitted_before_its_edge_and_capabilities() {
    let mut a = manifest("urn:scp:test:a", "A", None);
    a.provides = vec![capability("api", "rest")];
    a.depends = vec![dependency("urn:scp:test:z", None)];

    let graph = build_graph(&[a]);
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();

    assert_eq!(ids, vec!["urn:scp:test:a", "urn:scp:test:z", "urn:scp:test:a:api"]);
    assert_eq!(graph.edges[0].kind(), EdgeKind::DependsOn);
    assert_eq!(graph.edges[1].kind(), EdgeKind::Provides);
}

#[test]
fn test_dependency_without_capability_keeps_edge() {
    let mut a = manifest("urn:scp:test:a", "A", None);
    a.depends = vec![dependency("urn:scp:test:b", None)];

    let graph = build_graph(&[a]);
    let edge = graph
        .edges_of(EdgeKind::DependsOn)
        .next()
        .expect("dependency edge");

    assert_eq!(
        edge.attrs,
        EdgeAttrs::DependsOn {
            capability: None,
            criticality: None,
            failure_mode: None,
        }
    );
}

#[test]
fn test_stubbed_system_is_not_replaced_by_later_manifest() {
    let mut a = manifest("urn:scp:test:a", "A", None);
    a.depends = vec![dependency("urn:scp:test:b", None)];
    let mut b = manifest("urn:scp:test:b", "B Service", Some(1));
    b.provides = vec![capability("b-api", "grpc")];

    let graph = build_graph(&[a, b]);
    let node = graph.node("urn:scp:test:b").expect("b node");

    assert!(node.is_stub());
    assert_eq!(node.name, "b");
    assert_eq!(graph.meta.systems_count, 2);
    assert_eq!(graph.meta.capabilities_count, 1);
}

#[test]
fn test_duplicate_manifest_first_wins_but_adds_edges() {
    let mut first = manifest("urn:scp:test:svc", "First", Some(1));
    first.depends = vec![dependency("urn:scp:test:db", None)];
    let mut second = manifest("urn:scp:test:svc", "Second", Some(3));
    second.depends = vec![dependency("urn:scp:test:cache", None)];

    let graph = build_graph(&[first, second]);
    let svc_nodes: Vec<_> = graph
        .nodes
        .iter()
        .filter(|n| n.id == "urn:scp:test:svc")
        .collect();

    assert_eq!(svc_nodes.len(), 1);
    assert_eq!(svc_nodes[0].name, "First");
    assert_eq!(graph.meta.dependencies_count, 2);
    assert_eq!(graph.meta.systems_count, 3);
}

#[test]
fn test_node_ids_unique_and_edges_resolve() {
    let mut a = manifest("urn:scp:test:a", "A", Some(1));
    a.provides = vec![capability("one", "rest"), capability("two", "event")];
    a.depends = vec![
        dependency("urn:scp:test:b", Some("read")),
        dependency("urn:scp:test:c", None),
    ];
    let mut b = manifest("urn:scp:test:b", "B", Some(2));
    b.depends = vec![dependency("urn:scp:test:a", Some("one"))];

    let graph = build_graph(&[a, b]);

    let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), graph.nodes.len());
    for edge in &graph.edges {
        assert!(ids.contains(edge.from.as_str()), "dangling from {}", edge.from);
        assert!(ids.contains(edge.to.as_str()), "dangling to {}", edge.to);
    }
}

#[test]
fn test_malformed_dependency_urn_degrades() {
    let mut a = manifest("urn:scp:test:a", "A", None);
    a.depends = vec![dependency("legacy-db", None), dependency("urn:scp:test:", None)];

    let graph = build_graph(&[a]);

    assert_eq!(graph.node("legacy-db").expect("stub").name, "legacy-db");
    assert_eq!(graph.node("urn:scp:test:").expect("stub").name, "");
}

#[test]
fn test_empty_input() {
    let graph = build_graph(&[]);

    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
    assert_eq!(graph.meta, GraphMeta::default());
}

#[test]
fn test_repeated_calls_are_identical() {
    let manifests = order_and_user();
    assert_eq!(build_graph(&manifests), build_graph(&manifests));
}

#[test]
fn test_system_urn_matching_capability_id_is_still_emitted() {
    let mut orders = manifest("urn:scp:acme:orders", "Orders", None);
    orders.provides = vec![capability("api", "rest")];
    let orders_api = manifest("urn:scp:acme:orders:api", "Orders API", Some(2));

    let graph = build_graph(&[orders, orders_api]);

    assert_eq!(graph.meta.systems_count, 2);
    assert_eq!(graph.meta.capabilities_count, 1);
    let system = graph
        .nodes_of(NodeKind::System)
        .find(|n| n.id == "urn:scp:acme:orders:api")
        .expect("declared system");
    assert_eq!(system.name, "Orders API");
    assert!(!system.is_stub());
}

#[test]
fn test_dependency_on_capability_shaped_urn_gets_stub() {
    let mut orders = manifest("urn:scp:acme:orders", "Orders", None);
    orders.provides = vec![capability("api", "rest")];
    let mut billing = manifest("urn:scp:acme:billing", "Billing", None);
    billing.depends = vec![dependency("urn:scp:acme:orders:api", None)];

    let graph = build_graph(&[orders, billing]);

    let stub = graph
        .nodes_of(NodeKind::System)
        .find(|n| n.id == "urn:scp:acme:orders:api")
        .expect("stub for dependency target");
    assert!(stub.is_stub());
    assert_eq!(stub.name, "api");
    assert_eq!(graph.meta.systems_count, 3);
}
