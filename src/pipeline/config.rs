//! Converter configuration passed explicitly to every pipeline step

use std::path::{Path, PathBuf};

use super::formats::Format;

pub const DEFAULT_SOURCE: &str = "resume.md";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_BASE_NAME: &str = "John_Young_Resume";
pub const DEFAULT_STYLESHEET: &str = "style.css";
pub const DEFAULT_TOOL: &str = "pandoc";
pub const DEFAULT_PDF_ENGINE: &str = "pdflatex";

/// What to do when the conversion tool is not installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallPolicy {
    /// Run the platform package manager without asking.
    #[default]
    Auto,
    /// Ask on the terminal before running the package manager.
    Confirm,
    /// Never install; a missing tool is fatal.
    Never,
}

/// Paths, names and switches for one conversion run.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// File stem shared by every generated file.
    pub base_name: String,
    /// Stylesheet href written into HTML output. Not validated.
    pub stylesheet: String,
    pub tool: String,
    pub pdf_engine: String,
    pub install_policy: InstallPolicy,
    /// Echo every external command line before running it.
    pub verbose: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_name: DEFAULT_BASE_NAME.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            pdf_engine: DEFAULT_PDF_ENGINE.to_string(),
            install_policy: InstallPolicy::default(),
            verbose: false,
        }
    }
}

impl ConverterConfig {
    /// Build a default configuration rooted at `dir`.
    pub fn rooted_at(dir: &Path) -> Self {
        Self {
            source: dir.join(DEFAULT_SOURCE),
            output_dir: dir.join(DEFAULT_OUTPUT_DIR),
            ..Default::default()
        }
    }

    /// Destination file for a format, e.g. `output/John_Young_Resume.docx`.
    pub fn output_path(&self, format: Format) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.base_name, format.extension()))
    }
}
