//! scp: CLI for building architecture graphs from SCP manifests

use std::io;
use std::process::ExitCode;

use clap::Parser;
use scp_cli::commands::{scan, scan_github, validate, version};
use scp_cli::{setup_logging, Cli, Commands, Outcome};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut out = io::stdout();

    let outcome = match cli.command {
        Commands::Scan {
            path,
            neo4j,
            export,
        } => scan::run(&path, &neo4j, &export, &mut out).await?,
        Commands::ScanGithub {
            org,
            token,
            api_url,
            neo4j,
            export,
        } => {
            scan_github::run(&org, token.as_deref(), &api_url, &neo4j, &export, &mut out).await?
        }
        Commands::Validate { path } => validate::run(&path, &mut out)?,
        Commands::Version => {
            version::run(&mut out)?;
            Outcome::Success
        }
    };

    Ok(outcome.into())
}
