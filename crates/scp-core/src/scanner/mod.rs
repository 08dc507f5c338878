//! Scanner module: Manifest discovery
//!
//! Finds `scp.yaml` manifests either by walking a local directory tree
//! or by querying the repositories of a GitHub organization.

mod github;
mod local;

use std::path::PathBuf;

use thiserror::Error;

pub use github::{collect_manifests, GitHubScanner, RemoteManifest, Repository, DEFAULT_API_URL};
pub use local::{Scanner, MANIFEST_FILE_NAMES};

/// Errors that can occur while discovering manifests
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error ({status}): {message}")]
    GitHub { status: u16, message: String },
}
