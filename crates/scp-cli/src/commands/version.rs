//! Version command

use std::io::Write;

use anyhow::Result;

/// Version line printed by `scp version`
#[must_use]
pub fn version_line() -> String {
    format!("scp-constructor v{}", env!("CARGO_PKG_VERSION"))
}

/// Run the version command
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", version_line())?;
    Ok(())
}
