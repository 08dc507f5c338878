//! GitHub organization scanner
//!
//! Lists the repositories of an organization through the REST API and
//! fetches the manifest at the root of each one. Fetches run concurrently
//! but results keep the repository listing order.

use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::ScanError;
use crate::manifest::{parse_manifest, Manifest, SourcedManifest};

/// Public GitHub API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Maximum page size the repository listing accepts
const PER_PAGE: usize = 100;

const DEFAULT_CONCURRENCY: usize = 8;

const API_VERSION: &str = "2022-11-28";

const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Asks the contents endpoint for the file body instead of base64 JSON
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

const USER_AGENT: &str = concat!("scp-constructor/", env!("CARGO_PKG_VERSION"));

/// A repository as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    #[serde(default)]
    pub archived: bool,
}

/// A manifest found in a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteManifest {
    /// `owner/name` of the repository
    pub repo: String,
    pub manifest: Manifest,
}

impl From<RemoteManifest> for SourcedManifest {
    fn from(remote: RemoteManifest) -> Self {
        Self::new(remote.manifest, remote.repo)
    }
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// Scanner for manifests across a GitHub organization
#[derive(Debug, Clone)]
pub struct GitHubScanner {
    client: Client,
    token: String,
    base_url: String,
    manifest_path: String,
    concurrency: usize,
}

impl GitHubScanner {
    /// Create a scanner authenticated with a personal access token
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self, ScanError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: DEFAULT_API_URL.to_string(),
            manifest_path: "scp.yaml".to_string(),
            concurrency: DEFAULT_CONCURRENCY,
        })
    }

    /// Use a different API root, e.g. a GitHub Enterprise host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Limit the number of manifest fetches in flight (at least one)
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Find and load every manifest in the organization
    ///
    /// Repositories without a manifest are skipped silently; manifests that
    /// fail to parse or validate are logged and skipped.
    ///
    /// # Errors
    /// Returns an error if listing repositories or fetching a manifest fails.
    pub async fn scan_org(&self, org: &str) -> Result<Vec<RemoteManifest>, ScanError> {
        let repos = self.list_repositories(org).await?;
        info!("Found {} active repositories in {}", repos.len(), org);

        let fetched: Vec<(String, Option<String>)> = stream::iter(repos)
            .map(|repo| async move {
                let content = self.fetch_manifest(&repo).await?;
                Ok::<_, ScanError>((repo.full_name, content))
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(collect_manifests(fetched))
    }

    /// List the organization's repositories, skipping archived ones
    ///
    /// # Errors
    /// Returns an error if a request fails or the API answers with an error.
    pub async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, ScanError> {
        let mut repos = Vec::new();
        let mut page = 1;

        loop {
            let url = repos_url(&self.base_url, org, page);
            debug!("GET {}", url);

            let response = self
                .authorized(self.client.get(&url), JSON_MEDIA_TYPE)
                .send()
                .await?;
            let batch: Vec<Repository> = check_status(response).await?.json().await?;
            let batch_len = batch.len();

            repos.extend(batch.into_iter().filter(|r| !r.archived));

            if batch_len < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    /// Fetch the raw manifest of one repository, `None` if it has none
    ///
    /// # Errors
    /// Returns an error if the request fails or the API answers with an
    /// error other than not found.
    pub async fn fetch_manifest(&self, repo: &Repository) -> Result<Option<String>, ScanError> {
        let url = contents_url(&self.base_url, &repo.full_name, &self.manifest_path);
        debug!("GET {}", url);

        let response = self
            .authorized(self.client.get(&url), RAW_MEDIA_TYPE)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let text = check_status(response).await?.text().await?;
        Ok(Some(text))
    }

    fn authorized(&self, builder: RequestBuilder, accept: &str) -> RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header(header::ACCEPT, accept)
            .header("X-GitHub-Api-Version", API_VERSION)
    }
}

/// Parse fetched manifests, keeping order and dropping failures
///
/// Each entry pairs a repository name with its manifest text, `None` when
/// the repository has no manifest.
#[must_use]
pub fn collect_manifests(fetched: Vec<(String, Option<String>)>) -> Vec<RemoteManifest> {
    fetched
        .into_iter()
        .filter_map(|(repo, content)| {
            let text = content?;
            match parse_manifest(&text, &repo) {
                Ok(manifest) => Some(RemoteManifest { repo, manifest }),
                Err(e) => {
                    warn!("Skipping {}: {}", repo, e);
                    None
                }
            }
        })
        .collect()
}

fn repos_url(base_url: &str, org: &str, page: usize) -> String {
    format!("{base_url}/orgs/{org}/repos?per_page={PER_PAGE}&page={page}&type=all")
}

fn contents_url(base_url: &str, full_name: &str, path: &str) -> String {
    format!("{base_url}/repos/{full_name}/contents/{path}")
}

async fn check_status(response: Response) -> Result<Response, ScanError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or(body);

    Err(ScanError::GitHub {
        status: status.as_u16(),
        message,
    })
}
