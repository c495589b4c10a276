//! Shared test utilities: a recording fake runner and workspace fixtures

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use resume_convert::pipeline::{ConverterConfig, Invocation, OutputMode, RunError, ToolRunner};
use tempfile::TempDir;

pub const SAMPLE_RESUME: &str = "# John Young\n\n## Experience\n\n- Rust engineer\n";

/// Fake [`ToolRunner`] that records every invocation.
///
/// Conversions write a small file at the `-o` path unless their extension is
/// listed in `failing` or `write_output` is off.
pub struct FakeRunner {
    pub calls: RefCell<Vec<Invocation>>,
    pub tool_installed: Cell<bool>,
    /// Whether a successful install makes the probe pass afterwards.
    pub install_fixes_tool: bool,
    pub install_fails: bool,
    pub failing: HashSet<String>,
    pub write_output: bool,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            tool_installed: Cell::new(true),
            install_fixes_tool: true,
            install_fails: false,
            failing: HashSet::new(),
            write_output: true,
        }
    }
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner whose tool is not installed yet.
    pub fn without_tool() -> Self {
        Self {
            tool_installed: Cell::new(false),
            ..Self::default()
        }
    }

    /// Make conversions to `extension` exit with a failure status.
    pub fn failing(mut self, extension: &str) -> Self {
        self.failing.insert(extension.to_string());
        self
    }

    /// Conversion invocations only (no probes, no installs).
    pub fn conversions(&self) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|inv| inv.output_arg().is_some())
            .cloned()
            .collect()
    }

    /// Extensions of the files each conversion targeted, in call order.
    pub fn converted_extensions(&self) -> Vec<String> {
        self.conversions()
            .iter()
            .filter_map(|inv| inv.output_arg().map(extension_of))
            .collect()
    }

    /// Package-manager invocations.
    pub fn installs(&self) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|inv| is_install(inv))
            .cloned()
            .collect()
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, invocation: &Invocation, _mode: OutputMode) -> Result<(), RunError> {
        self.calls.borrow_mut().push(invocation.clone());

        if invocation.args == ["--version"] {
            return if self.tool_installed.get() {
                Ok(())
            } else {
                Err(RunError::Spawn {
                    program: invocation.program.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "not found"),
                })
            };
        }

        if is_install(invocation) {
            if self.install_fails {
                return Err(status_error(invocation, 100));
            }
            if self.install_fixes_tool {
                self.tool_installed.set(true);
            }
            return Ok(());
        }

        let Some(output) = invocation.output_arg() else {
            return Ok(());
        };
        if self.failing.contains(&extension_of(output)) {
            return Err(status_error(invocation, 43));
        }
        if self.write_output {
            fs::write(output, format!("converted by {}", invocation.program))
                .expect("fake runner could not write output");
        }
        Ok(())
    }
}

fn is_install(invocation: &Invocation) -> bool {
    invocation.program == "brew" || invocation.program == "sudo"
}

fn status_error(invocation: &Invocation, code: i32) -> RunError {
    RunError::Status {
        program: invocation.program.clone(),
        code: Some(code),
    }
}

fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_string()
}

/// Create a temporary directory containing `resume.md`.
pub fn create_workspace() -> (TempDir, ConverterConfig) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("resume.md"), SAMPLE_RESUME).unwrap();
    let config = ConverterConfig::rooted_at(temp_dir.path());
    (temp_dir, config)
}

/// Create a temporary directory with no source document.
pub fn create_empty_workspace() -> (TempDir, ConverterConfig) {
    let temp_dir = TempDir::new().unwrap();
    let config = ConverterConfig::rooted_at(temp_dir.path());
    (temp_dir, config)
}

/// Sorted file names inside `dir`.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Path of `name` inside the configured output directory.
pub fn output_file(config: &ConverterConfig, name: &str) -> PathBuf {
    config.output_dir.join(name)
}
