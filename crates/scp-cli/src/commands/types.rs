//! Command types shared between main and library

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scp_core::scanner::DEFAULT_API_URL;
use scp_core::{Direction, ExportFormat, Neo4jConfig};

#[derive(Debug, Parser)]
#[command(name = "scp")]
#[command(
    author,
    version,
    about = "SCP Constructor - Build architecture graphs from scp.yaml files",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a local directory for SCP files and build the architecture graph
    Scan {
        /// Directory to scan for scp.yaml files
        path: PathBuf,

        #[command(flatten)]
        neo4j: Neo4jArgs,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Scan a GitHub organization for SCP files
    ScanGithub {
        /// GitHub organization to scan
        org: String,

        /// GitHub personal access token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// GitHub API root, for GitHub Enterprise hosts
        #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,

        #[command(flatten)]
        neo4j: Neo4jArgs,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Validate SCP files without syncing to a graph
    Validate {
        /// Path to an scp.yaml file or a directory
        path: PathBuf,
    },

    /// Show version information
    Version,
}

/// Neo4j connection flags; a sync runs only when uri, user and password are set
#[derive(Debug, Clone, Default, Args)]
pub struct Neo4jArgs {
    /// Neo4j connection URI
    #[arg(long, env = "NEO4J_URI")]
    pub neo4j_uri: Option<String>,

    /// Neo4j username
    #[arg(long, env = "NEO4J_USER")]
    pub neo4j_user: Option<String>,

    /// Neo4j password
    #[arg(long, env = "NEO4J_PASSWORD", hide_env_values = true)]
    pub neo4j_password: Option<String>,

    /// Neo4j database name
    #[arg(long, env = "NEO4J_DATABASE")]
    pub neo4j_database: Option<String>,
}

impl Neo4jArgs {
    /// Connection settings, if enough flags are present to sync
    #[must_use]
    pub fn config(&self) -> Option<Neo4jConfig> {
        let config = Neo4jConfig::from_parts(
            self.neo4j_uri.as_deref(),
            self.neo4j_user.as_deref(),
            self.neo4j_password.as_deref(),
        )?;

        Some(match self.neo4j_database.as_deref().filter(|d| !d.is_empty()) {
            Some(db) => config.with_database(db),
            None => config,
        })
    }
}

/// Export flags
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Export format: json, mermaid
    #[arg(short = 'e', long = "export")]
    pub format: Option<ExportFormat>,

    /// Mermaid flowchart direction: TB, BT, LR, RL
    #[arg(long, default_value = "LR")]
    pub direction: Direction,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
