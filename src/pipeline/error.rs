//! Error types for the conversion pipeline.
//!
//! Three layers of failure exist:
//! - [`RunError`]: an external process could not be spawned or exited non-zero.
//! - [`ConversionError`]: a single format failed. Never fatal to the run.
//! - [`ConvertError`]: a precondition failed. Terminates the run with exit code 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Where users can get pandoc when it cannot be installed automatically.
pub const MANUAL_INSTALL_URL: &str = "https://pandoc.org/installing.html";

/// Failure to run an external command.
#[derive(Debug, Error)]
pub enum RunError {
    /// The program could not be started (usually not installed or not on PATH).
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The program ran but reported failure.
    #[error("'{program}' exited with {}", describe_code(.code))]
    Status { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Failure of one format's conversion.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Tool(#[from] RunError),

    /// A file from an earlier run could not be removed before converting.
    #[error("could not remove previous output {}: {source}", .path.display())]
    StaleOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The tool reported success but the output file cannot be read back.
    #[error("output file {} was not produced: {source}", .path.display())]
    MissingOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fatal precondition failures. Each maps to exit code 1.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{} not found!", .path.display())]
    SourceMissing { path: PathBuf },

    #[error("'{program}' is not installed or cannot be run")]
    ToolMissing { program: String },

    #[error("failed to install '{program}' automatically: {source}")]
    InstallFailed {
        program: String,
        #[source]
        source: RunError,
    },

    #[error("automatic installation is not supported on {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("install confirmation failed: {0}")]
    Prompt(String),
}

impl ConvertError {
    /// Follow-up advice printed under the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            ConvertError::ToolMissing { .. }
            | ConvertError::InstallFailed { .. }
            | ConvertError::UnsupportedPlatform { .. } => Some(format!(
                "Please install manually from: {}",
                MANUAL_INSTALL_URL
            )),
            _ => None,
        }
    }
}
