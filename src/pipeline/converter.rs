//! Per-format conversion through pandoc
//!
//! Each converter builds one fixed command line, runs it with the tool's
//! output streamed to the terminal and reads the produced file's size back
//! for display. Failures are captured in [`ConversionOutcome::Failed`] and
//! never escape this module.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::ConverterConfig;
use super::error::ConversionError;
use super::formats::Format;
use super::runner::{Invocation, OutputMode, ToolRunner};
use crate::utils::{
    format_kb, print_command, print_detail, print_error, print_hint, print_step, print_success,
    DOCUMENT, GLOBE, MEMO,
};

/// Result of attempting one format.
#[derive(Debug)]
pub enum ConversionOutcome {
    Produced {
        format: Format,
        path: PathBuf,
        bytes: u64,
    },
    Failed {
        format: Format,
        error: ConversionError,
        /// Extra advice, e.g. the LaTeX requirement for PDF.
        hint: Option<String>,
    },
}

impl ConversionOutcome {
    pub fn format(&self) -> Format {
        match self {
            ConversionOutcome::Produced { format, .. } => *format,
            ConversionOutcome::Failed { format, .. } => *format,
        }
    }

    pub fn is_produced(&self) -> bool {
        matches!(self, ConversionOutcome::Produced { .. })
    }

    /// Path of the produced file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConversionOutcome::Produced { path, .. } => Some(path),
            ConversionOutcome::Failed { .. } => None,
        }
    }
}

/// The pandoc command line for `format`.
pub fn invocation(format: Format, config: &ConverterConfig) -> Invocation {
    let output = config.output_path(format);
    let base = Invocation::new(&config.tool).args([
        config.source.to_string_lossy().into_owned(),
        "-o".to_string(),
        output.to_string_lossy().into_owned(),
        "--from".to_string(),
        "markdown".to_string(),
    ]);

    match format {
        Format::Docx => base.args(["--to", "docx"]),
        Format::Pdf => base.arg(format!("--pdf-engine={}", config.pdf_engine)),
        Format::Html => base
            .args(["--to", "html", "--standalone"])
            .arg(format!("--css={}", config.stylesheet)),
    }
}

/// Hint attached to a failed conversion of `format`.
pub fn failure_hint(format: Format, config: &ConverterConfig) -> Option<String> {
    match format {
        Format::Pdf => Some(format!(
            "Note: PDF conversion requires LaTeX ({}) to be installed",
            config.pdf_engine
        )),
        Format::Docx | Format::Html => None,
    }
}

/// Convert the source document to `format`.
pub fn convert(
    format: Format,
    config: &ConverterConfig,
    runner: &dyn ToolRunner,
) -> ConversionOutcome {
    let icon = match format {
        Format::Docx => &MEMO,
        Format::Pdf => &DOCUMENT,
        Format::Html => &GLOBE,
    };
    print_step(icon, &format!("Converting to {} format...", format));

    match run_conversion(format, config, runner) {
        Ok((path, bytes)) => {
            print_success(&format!("Successfully created: {}", path.display()));
            print_detail(&format!("File size: {}", format_kb(bytes)));
            ConversionOutcome::Produced { format, path, bytes }
        }
        Err(error) => {
            print_error(&format!("Failed to convert to {}: {}", format, error));
            let hint = failure_hint(format, config);
            if let Some(hint) = &hint {
                print_hint(hint);
            }
            ConversionOutcome::Failed { format, error, hint }
        }
    }
}

fn run_conversion(
    format: Format,
    config: &ConverterConfig,
    runner: &dyn ToolRunner,
) -> Result<(PathBuf, u64), ConversionError> {
    let path = config.output_path(format);
    remove_previous_output(&path)?;

    let command = invocation(format, config);
    if config.verbose {
        print_command(&command);
    }
    runner.run(&command, OutputMode::Inherit)?;

    let bytes = fs::metadata(&path)
        .map_err(|source| ConversionError::MissingOutput {
            path: path.clone(),
            source,
        })?
        .len();
    Ok((path, bytes))
}

/// Delete a file left by an earlier run so it cannot pass for new output.
fn remove_previous_output(path: &Path) -> Result<(), ConversionError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ConversionError::StaleOutput {
            path: path.to_path_buf(),
            source,
        }),
    }
}
