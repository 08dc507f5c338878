//! Tests for scp CLI argument parsing
//!
//! Flags with environment fallbacks are parsed with those variables cleared
//! so the host environment cannot leak into the assertions.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::env;
use std::path::PathBuf;

use clap::Parser;
use scp_cli::{Cli, Commands};
use scp_core::{Direction, ExportFormat};
use serial_test::serial;

const ENV_VARS: [&str; 6] = [
    "NEO4J_URI",
    "NEO4J_USER",
    "NEO4J_PASSWORD",
    "NEO4J_DATABASE",
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn parse(args: &[&str]) -> Cli {
    clear_env();
    Cli::try_parse_from(args).unwrap()
}

#[test]
#[serial]
fn test_scan_minimal() {
    let cli = parse(&["scp", "scan", "/repos"]);

    assert!(!cli.verbose);
    match cli.command {
        Commands::Scan {
            path,
            neo4j,
            export,
        } => {
            assert_eq!(path, PathBuf::from("/repos"));
            assert!(neo4j.config().is_none());
            assert_eq!(export.format, None);
            assert_eq!(export.direction, Direction::LR);
            assert_eq!(export.output, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
#[serial]
fn test_scan_with_export_flags() {
    let cli = parse(&[
        "scp",
        "scan",
        ".",
        "-e",
        "mermaid",
        "--direction",
        "tb",
        "-o",
        "graph.mmd",
    ]);

    let Commands::Scan { export, .. } = cli.command else {
        panic!("expected scan");
    };
    assert_eq!(export.format, Some(ExportFormat::Mermaid));
    assert_eq!(export.direction, Direction::TB);
    assert_eq!(export.output, Some(PathBuf::from("graph.mmd")));
}

#[test]
#[serial]
fn test_scan_rejects_unknown_format() {
    clear_env();
    assert!(Cli::try_parse_from(["scp", "scan", ".", "--export", "dot"]).is_err());
}

#[test]
#[serial]
fn test_scan_rejects_unknown_direction() {
    clear_env();
    assert!(Cli::try_parse_from(["scp", "scan", ".", "--direction", "up"]).is_err());
}

#[test]
#[serial]
fn test_neo4j_flags_build_config() {
    let cli = parse(&[
        "scp",
        "scan",
        ".",
        "--neo4j-uri",
        "bolt://localhost:7687",
        "--neo4j-user",
        "neo4j",
        "--neo4j-password",
        "secret",
        "--neo4j-database",
        "arch",
    ]);

    let Commands::Scan { neo4j, .. } = cli.command else {
        panic!("expected scan");
    };
    let config = neo4j.config().unwrap();
    assert_eq!(config.uri, "bolt://localhost:7687");
    assert_eq!(config.user, "neo4j");
    assert_eq!(config.password, "secret");
    assert_eq!(config.database.as_deref(), Some("arch"));
}

#[test]
#[serial]
fn test_neo4j_config_needs_password() {
    let cli = parse(&[
        "scp",
        "scan",
        ".",
        "--neo4j-uri",
        "bolt://localhost:7687",
        "--neo4j-user",
        "neo4j",
    ]);

    let Commands::Scan { neo4j, .. } = cli.command else {
        panic!("expected scan");
    };
    assert!(neo4j.config().is_none());
}

#[test]
#[serial]
fn test_neo4j_flags_fall_back_to_env() {
    clear_env();
    env::set_var("NEO4J_URI", "bolt://env:7687");
    env::set_var("NEO4J_USER", "env-user");
    env::set_var("NEO4J_PASSWORD", "env-pass");

    let cli = Cli::try_parse_from(["scp", "scan", "."]).unwrap();
    clear_env();

    let Commands::Scan { neo4j, .. } = cli.command else {
        panic!("expected scan");
    };
    let config = neo4j.config().unwrap();
    assert_eq!(config.uri, "bolt://env:7687");
    assert_eq!(config.database, None);
}

#[test]
#[serial]
fn test_scan_github_token_from_env() {
    clear_env();
    env::set_var("GITHUB_TOKEN", "ghp_test");

    let cli = Cli::try_parse_from(["scp", "scan-github", "acme"]).unwrap();
    clear_env();

    let Commands::ScanGithub {
        org,
        token,
        api_url,
        ..
    } = cli.command
    else {
        panic!("expected scan-github");
    };
    assert_eq!(org, "acme");
    assert_eq!(token.as_deref(), Some("ghp_test"));
    assert_eq!(api_url, "https://api.github.com");
}

#[test]
#[serial]
fn test_scan_github_without_token() {
    let cli = parse(&["scp", "scan-github", "acme", "--api-url", "https://ghe.local/api/v3"]);

    let Commands::ScanGithub { token, api_url, .. } = cli.command else {
        panic!("expected scan-github");
    };
    assert_eq!(token, None);
    assert_eq!(api_url, "https://ghe.local/api/v3");
}

#[test]
#[serial]
fn test_validate_and_version() {
    let cli = parse(&["scp", "validate", "scp.yaml"]);
    assert!(matches!(cli.command, Commands::Validate { path } if path == PathBuf::from("scp.yaml")));

    let cli = parse(&["scp", "version"]);
    assert!(matches!(cli.command, Commands::Version));
}

#[test]
#[serial]
fn test_verbose_is_global() {
    let cli = parse(&["scp", "validate", ".", "-v"]);
    assert!(cli.verbose);

    let cli = parse(&["scp", "--verbose", "version"]);
    assert!(cli.verbose);
}

#[test]
#[serial]
fn test_missing_subcommand_is_an_error() {
    clear_env();
    assert!(Cli::try_parse_from(["scp"]).is_err());
}
