//! Tests for command outcomes

use crate::commands::Outcome;

#[test]
fn test_outcome_success_flag() {
    assert!(Outcome::Success.is_success());
    assert!(!Outcome::Failure.is_success());
}

#[test]
fn test_outcome_codes() {
    assert_eq!(Outcome::Success.code(), 0);
    assert_eq!(Outcome::Failure.code(), 1);
}
