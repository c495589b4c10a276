//! External process execution
//!
//! Every call to pandoc or a package manager goes through [`ToolRunner`] so
//! the pipeline can be exercised without the real tools installed.

use std::fmt;
use std::process::{Command, Stdio};

use super::error::RunError;

/// How the child's stdout/stderr are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream to this process's terminal.
    Inherit,
    /// Discard; only the exit status matters.
    Silent,
}

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Value following `-o`, if present.
    pub fn output_arg(&self) -> Option<&str> {
        self.args
            .windows(2)
            .find(|pair| pair[0] == "-o")
            .map(|pair| pair[1].as_str())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs external commands to completion.
pub trait ToolRunner {
    fn run(&self, invocation: &Invocation, mode: OutputMode) -> Result<(), RunError>;
}

/// [`ToolRunner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, mode: OutputMode) -> Result<(), RunError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if mode == OutputMode::Silent {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = command.status().map_err(|source| RunError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(RunError::Status {
                program: invocation.program.clone(),
                code: status.code(),
            })
        }
    }
}
