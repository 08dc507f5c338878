//! URN helpers for deriving names and identifiers
//!
//! These never fail. A URN without any `:` is treated as its own last
//! segment, and a URN ending in `:` yields an empty segment. The loader
//! rejects both shapes, but hand-built manifests can still carry them.

/// Last colon-delimited segment of a URN
///
/// `urn:scp:acme:order-service` → `order-service`
#[must_use]
pub fn last_segment(urn: &str) -> &str {
    urn.rsplit(':').next().unwrap_or(urn)
}

/// Mermaid node identifier for a URN
///
/// `urn:scp:acme:order-service` → `order_service`. Only hyphens are
/// rewritten; any other character is passed through.
#[must_use]
pub fn node_id(urn: &str) -> String {
    last_segment(urn).replace('-', "_")
}

/// Display name for a system known only by URN
///
/// `urn:scp:acme:order-service` → `Order Service`
#[must_use]
pub fn stub_display_name(urn: &str) -> String {
    title_case(&last_segment(urn).replace('-', " "))
}

/// Uppercase the first letter of every word and lowercase the rest
///
/// A word starts at any letter not preceded by another letter, so
/// `api2go` becomes `Api2Go`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
