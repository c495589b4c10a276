//! Precondition checks: source document and conversion tool
//!
//! The tool is probed with `<tool> --version`. When the probe fails the
//! platform package manager is used to install pandoc, after which the tool
//! is probed once more before the run is allowed to continue.

use std::fmt;
use std::path::Path;

use anyhow::Result;
use console::style;

use super::config::{ConverterConfig, InstallPolicy};
use super::error::ConvertError;
use super::runner::{Invocation, OutputMode, ToolRunner};
use crate::utils::{
    create_spinner, finish_and_clear, print_command, print_hint, print_success, PACKAGE,
};

/// Package name handed to package managers.
pub const PANDOC_PACKAGE: &str = "pandoc";

/// Host operating system, as far as installation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Other(&'static str),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &'static str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            other => Platform::Other(other),
        }
    }

    /// Commands that install `package`, run in order. `None` means manual install.
    pub fn install_plan(self, package: &str) -> Option<Vec<Invocation>> {
        match self {
            Platform::MacOs => Some(vec![Invocation::new("brew").args(["install", package])]),
            Platform::Linux => Some(vec![
                Invocation::new("sudo").args(["apt-get", "update"]),
                Invocation::new("sudo").args(["apt-get", "install", "-y", package]),
            ]),
            Platform::Windows | Platform::Other(_) => None,
        }
    }

    fn package_manager(self) -> &'static str {
        match self {
            Platform::MacOs => "Homebrew",
            Platform::Linux => "apt",
            Platform::Windows | Platform::Other(_) => "",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => f.write_str("macOS"),
            Platform::Linux => f.write_str("Linux"),
            Platform::Windows => f.write_str("Windows"),
            Platform::Other(os) => f.write_str(os),
        }
    }
}

/// How the tool came to be available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    AlreadyInstalled,
    Installed,
}

/// Fail with [`ConvertError::SourceMissing`] unless the source document exists.
pub fn check_source(path: &Path) -> Result<(), ConvertError> {
    if path.is_file() {
        print_success(&format!("Found: {}", path.display()));
        Ok(())
    } else {
        Err(ConvertError::SourceMissing {
            path: path.to_path_buf(),
        })
    }
}

/// True if `<tool> --version` starts and exits successfully.
pub fn tool_available(config: &ConverterConfig, runner: &dyn ToolRunner) -> bool {
    let probe = Invocation::new(&config.tool).arg("--version");
    runner.run(&probe, OutputMode::Silent).is_ok()
}

/// Make sure the conversion tool can be invoked, installing it if allowed.
///
/// `confirm` receives the tool name and is consulted only under
/// [`InstallPolicy::Confirm`].
pub fn ensure_tool<F>(
    config: &ConverterConfig,
    runner: &dyn ToolRunner,
    platform: Platform,
    confirm: F,
) -> Result<ToolStatus, ConvertError>
where
    F: FnOnce(&str) -> Result<bool>,
{
    let spinner = create_spinner(&format!("Checking for {}...", config.tool));
    let available = tool_available(config, runner);
    finish_and_clear(&spinner);
    if available {
        print_success(&format!("{} is installed", config.tool));
        return Ok(ToolStatus::AlreadyInstalled);
    }

    let missing = || ConvertError::ToolMissing {
        program: config.tool.clone(),
    };

    match config.install_policy {
        InstallPolicy::Never => return Err(missing()),
        InstallPolicy::Confirm => {
            let approved =
                confirm(&config.tool).map_err(|e| ConvertError::Prompt(e.to_string()))?;
            if !approved {
                return Err(missing());
            }
        }
        InstallPolicy::Auto => {}
    }

    install_tool(config, runner, platform)?;

    if !tool_available(config, runner) {
        return Err(missing());
    }
    Ok(ToolStatus::Installed)
}

/// Run the platform's install commands for pandoc.
pub fn install_tool(
    config: &ConverterConfig,
    runner: &dyn ToolRunner,
    platform: Platform,
) -> Result<(), ConvertError> {
    println!();
    println!(
        "{}{}",
        PACKAGE,
        style(format!("{} is not installed. Installing...", config.tool)).yellow()
    );

    let Some(plan) = platform.install_plan(PANDOC_PACKAGE) else {
        return Err(ConvertError::UnsupportedPlatform {
            platform: platform.to_string(),
        });
    };

    print_hint("This may take a minute...");
    println!(
        "{}",
        style(format!(
            "Detected {}. Installing via {}...",
            platform,
            platform.package_manager()
        ))
        .cyan()
    );

    for step in &plan {
        if config.verbose {
            print_command(step);
        }
        runner
            .run(step, OutputMode::Inherit)
            .map_err(|source| ConvertError::InstallFailed {
                program: PANDOC_PACKAGE.to_string(),
                source,
            })?;
    }

    print_success(&format!("{} installed successfully!", PANDOC_PACKAGE));
    Ok(())
}
