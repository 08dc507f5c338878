//! Validate command: Check manifests without syncing or exporting

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use scp_core::{load_manifest, Scanner};

use super::Outcome;

/// Field errors shown per failing file
const MAX_SHOWN_ERRORS: usize = 5;

/// Run the validate command on a single file or a directory tree
///
/// # Errors
/// Returns an error if a directory path cannot be scanned or output fails.
pub fn run(path: &Path, out: &mut impl Write) -> Result<Outcome> {
    let files: Vec<PathBuf> = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        Scanner::new(path).scan()?
    };

    if files.is_empty() {
        writeln!(out, "No SCP files found")?;
        return Ok(Outcome::Success);
    }

    let mut failed = 0;

    for file in &files {
        match load_manifest(file) {
            Ok(manifest) => {
                writeln!(out, "✓ {}", file.display())?;
                writeln!(out, "  System: {} ({})", manifest.system.name, manifest.urn())?;
                if !manifest.depends.is_empty() {
                    writeln!(out, "  Dependencies: {}", manifest.depends.len())?;
                }
                if !manifest.provides.is_empty() {
                    writeln!(out, "  Capabilities: {}", manifest.provides.len())?;
                }
            }
            Err(e) => {
                failed += 1;
                writeln!(out, "✗ {}", file.display())?;
                writeln!(out, "  Error: {e}")?;
                for field in e.errors().iter().take(MAX_SHOWN_ERRORS) {
                    writeln!(out, "    - {field}")?;
                }
            }
        }
    }

    if failed > 0 {
        writeln!(out, "\n{failed} file(s) failed validation")?;
        Ok(Outcome::Failure)
    } else {
        writeln!(out, "\nAll {} file(s) valid", files.len())?;
        Ok(Outcome::Success)
    }
}
