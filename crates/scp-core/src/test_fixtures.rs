//! Manifest builders shared by unit tests

use crate::manifest::{Capability, Classification, Dependency, Manifest, Ownership, System};

pub(crate) fn manifest(urn: &str, name: &str, tier: Option<i64>) -> Manifest {
    Manifest {
        scp: "0.1.0".to_string(),
        system: System {
            urn: urn.to_string(),
            name: name.to_string(),
            description: None,
            classification: tier.map(|t| Classification {
                tier: Some(t),
                domain: None,
                tags: vec![],
            }),
        },
        ownership: None,
        provides: vec![],
        depends: vec![],
    }
}

pub(crate) fn capability(name: &str, kind: &str) -> Capability {
    Capability {
        capability: name.to_string(),
        kind: Some(kind.to_string()),
    }
}

pub(crate) fn dependency(system: &str, capability: Option<&str>) -> Dependency {
    Dependency {
        system: system.to_string(),
        capability: capability.map(str::to_string),
        kind: None,
        criticality: None,
        failure_mode: None,
    }
}

/// Order service (tier 1) consuming `user-lookup` from user service (tier 2)
pub(crate) fn order_and_user() -> Vec<Manifest> {
    let mut order = manifest("urn:scp:test:order-service", "Order Service", Some(1));
    if let Some(classification) = order.system.classification.as_mut() {
        classification.domain = Some("ordering".to_string());
    }
    order.ownership = Some(Ownership {
        team: "commerce".to_string(),
        contacts: vec![],
    });
    order.provides = vec![capability("order-management", "rest")];
    order.depends = vec![Dependency {
        system: "urn:scp:test:user-service".to_string(),
        capability: Some("user-lookup".to_string()),
        kind: Some("rest".to_string()),
        criticality: Some("required".to_string()),
        failure_mode: Some("fail-fast".to_string()),
    }];

    let mut user = manifest("urn:scp:test:user-service", "User Service", Some(2));
    if let Some(classification) = user.system.classification.as_mut() {
        classification.domain = Some("identity".to_string());
    }
    user.provides = vec![capability("user-lookup", "rest")];

    vec![order, user]
}
