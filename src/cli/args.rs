//! Command-line argument definitions using clap

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::pipeline::{
    ConverterConfig, InstallPolicy, DEFAULT_BASE_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_PDF_ENGINE,
    DEFAULT_SOURCE, DEFAULT_STYLESHEET, DEFAULT_TOOL,
};

/// Convert a Markdown resume to DOCX, PDF and HTML using pandoc
#[derive(Parser, Debug)]
#[command(name = "convert-resume")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("install").args(["no_install", "confirm_install"])))]
pub struct Cli {
    /// Comma-separated output formats: docx, pdf, html or all (case-insensitive).
    /// Defaults to docx. Unknown formats are skipped with a warning.
    pub formats: Option<String>,

    /// Markdown source document
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub input: PathBuf,

    /// Directory receiving the generated files (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File name (without extension) shared by all generated files
    #[arg(short, long, default_value = DEFAULT_BASE_NAME)]
    pub name: String,

    /// Stylesheet referenced by HTML output. Not bundled or checked for existence.
    #[arg(long, default_value = DEFAULT_STYLESHEET)]
    pub css: String,

    /// Conversion tool to invoke
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub pandoc: String,

    /// LaTeX engine pandoc uses for PDF output
    #[arg(long, default_value = DEFAULT_PDF_ENGINE)]
    pub pdf_engine: String,

    /// Fail instead of installing pandoc when it is missing
    #[arg(long, default_value = "false")]
    pub no_install: bool,

    /// Ask before installing pandoc with the system package manager
    #[arg(long, default_value = "false")]
    pub confirm_install: bool,

    /// Print every external command before running it
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Cli {
    /// Raw format-list argument, if one was given.
    pub fn formats(&self) -> Option<&str> {
        self.formats.as_deref()
    }

    pub fn install_policy(&self) -> InstallPolicy {
        if self.no_install {
            InstallPolicy::Never
        } else if self.confirm_install {
            InstallPolicy::Confirm
        } else {
            InstallPolicy::Auto
        }
    }

    /// Build the converter configuration from parsed arguments.
    pub fn config(&self) -> ConverterConfig {
        ConverterConfig {
            source: self.input.clone(),
            output_dir: self.output_dir.clone(),
            base_name: self.name.clone(),
            stylesheet: self.css.clone(),
            tool: self.pandoc.clone(),
            pdf_engine: self.pdf_engine.clone(),
            install_policy: self.install_policy(),
            verbose: self.verbose,
        }
    }
}
