//! CLI commands

pub mod publish;
pub mod scan;
pub mod scan_github;
pub mod types;
pub mod validate;
pub mod version;

use std::process::ExitCode;

pub use types::{Cli, Commands, ExportArgs, Neo4jArgs};

/// How a command finished, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Process exit status
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        Self::from(outcome.code())
    }
}
