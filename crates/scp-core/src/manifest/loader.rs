//! Manifest loading and validation

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::model::Manifest;

/// Prefix every system URN must carry
pub const URN_PREFIX: &str = "urn:scp:";

/// Highest accepted classification tier
pub const MAX_TIER: i64 = 5;

/// A single validation failure at a dotted field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path, e.g. `depends.0.system`. Empty when the failure is not tied to a field.
    pub loc: String,
    pub msg: String,
}

impl FieldError {
    #[must_use]
    pub fn new(loc: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            msg: msg.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loc.is_empty() {
            write!(f, "{}", self.msg)
        } else {
            write!(f, "{}: {}", self.loc, self.msg)
        }
    }
}

/// Errors that can occur while loading a manifest
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {source_label}: {message}")]
    Parse {
        source_label: String,
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Invalid manifest {source_label}: {} validation error(s)", .errors.len())]
    Invalid {
        source_label: String,
        errors: Vec<FieldError>,
    },
}

impl LoadError {
    /// Field-level errors behind this failure
    ///
    /// Read failures carry none; parse failures carry exactly one.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Io { .. } => &[],
            Self::Parse { errors, .. } | Self::Invalid { errors, .. } => errors,
        }
    }
}

/// Read and validate a manifest file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid YAML for the
/// manifest schema, or fails validation.
pub fn load_manifest(path: &Path) -> Result<Manifest, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&text, &path.display().to_string())
}

/// Parse and validate manifest text
///
/// `source_label` only decorates errors.
///
/// # Errors
/// Returns an error if the text does not match the manifest schema or fails
/// validation.
pub fn parse_manifest(text: &str, source_label: &str) -> Result<Manifest, LoadError> {
    let manifest: Manifest = serde_yaml::from_str(text).map_err(|e| {
        let message = e.to_string();
        LoadError::Parse {
            source_label: source_label.to_string(),
            errors: vec![FieldError::new("", message.clone())],
            message,
        }
    })?;

    let errors = validate(&manifest);
    if !errors.is_empty() {
        return Err(LoadError::Invalid {
            source_label: source_label.to_string(),
            errors,
        });
    }

    debug!("Loaded {} from {}", manifest.system.urn, source_label);
    Ok(manifest)
}

/// Check semantic rules the YAML schema cannot express
#[must_use]
pub fn validate(manifest: &Manifest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if manifest.scp.trim().is_empty() {
        errors.push(FieldError::new("scp", "schema version must not be empty"));
    }

    validate_system(manifest, &mut errors);
    validate_provides(manifest, &mut errors);

    for (i, dep) in manifest.depends.iter().enumerate() {
        if let Some(msg) = check_urn(&dep.system) {
            errors.push(FieldError::new(format!("depends.{i}.system"), msg));
        }
    }

    errors
}

fn validate_system(manifest: &Manifest, errors: &mut Vec<FieldError>) {
    let system = &manifest.system;

    if let Some(msg) = check_urn(&system.urn) {
        errors.push(FieldError::new("system.urn", msg));
    }
    if system.name.trim().is_empty() {
        errors.push(FieldError::new("system.name", "must not be empty"));
    }
    if let Some(tier) = manifest.tier() {
        if !(1..=MAX_TIER).contains(&tier) {
            errors.push(FieldError::new(
                "system.classification.tier",
                format!("must be between 1 and {MAX_TIER}, got {tier}"),
            ));
        }
    }
    if let Some(ownership) = &manifest.ownership {
        if ownership.team.trim().is_empty() {
            errors.push(FieldError::new("ownership.team", "must not be empty"));
        }
    }
}

fn validate_provides(manifest: &Manifest, errors: &mut Vec<FieldError>) {
    let mut seen = HashSet::new();
    for (i, cap) in manifest.provides.iter().enumerate() {
        if cap.capability.trim().is_empty() {
            errors.push(FieldError::new(
                format!("provides.{i}.capability"),
                "must not be empty",
            ));
        } else if !seen.insert(cap.capability.as_str()) {
            errors.push(FieldError::new(
                format!("provides.{i}.capability"),
                format!("duplicate capability '{}'", cap.capability),
            ));
        }
    }
}

fn check_urn(urn: &str) -> Option<String> {
    if !urn.starts_with(URN_PREFIX) {
        return Some(format!("'{urn}' must start with '{URN_PREFIX}'"));
    }
    if urn.rsplit(':').next().unwrap_or_default().is_empty() {
        return Some(format!("'{urn}' must end with a non-empty name segment"));
    }
    None
}
