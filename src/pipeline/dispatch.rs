//! Format dispatch and the end-to-end conversion run
//!
//! `run` is the whole pipeline: source check, tool check, output directory,
//! one conversion per requested format, in that order. Only the first three
//! steps can fail the run; individual conversions are reported, not raised.

use anyhow::Result;
use console::style;

use super::config::ConverterConfig;
use super::converter::{convert, ConversionOutcome};
use super::error::ConvertError;
use super::formats::{normalize_tokens, parse_tokens, FormatRequest, SUPPORTED_TOKENS};
use super::output_dir::ensure_output_dir;
use super::preconditions::{check_source, ensure_tool, Platform, ToolStatus};
use super::runner::ToolRunner;
use crate::utils::{print_hint, print_warning, TARGET};

/// Everything the summary needs to know about a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub tool_status: ToolStatus,
    pub created_output_dir: bool,
    /// One entry per attempted conversion, in request order.
    pub outcomes: Vec<ConversionOutcome>,
    /// Tokens that named no format.
    pub skipped: Vec<String>,
}

impl RunReport {
    pub fn produced(&self) -> impl Iterator<Item = &ConversionOutcome> {
        self.outcomes.iter().filter(|o| o.is_produced())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ConversionOutcome> {
        self.outcomes.iter().filter(|o| !o.is_produced())
    }
}

/// Run each request in order. Unknown tokens are warned about and skipped.
pub fn dispatch(
    requests: &[FormatRequest],
    config: &ConverterConfig,
    runner: &dyn ToolRunner,
) -> (Vec<ConversionOutcome>, Vec<String>) {
    let mut outcomes = Vec::new();
    let mut skipped = Vec::new();

    for request in requests {
        match request {
            FormatRequest::Convert(format) => outcomes.push(convert(*format, config, runner)),
            FormatRequest::Unknown(token) => {
                println!();
                print_warning(&format!("Unknown format: {}", token));
                print_hint(&format!("Supported formats: {}", SUPPORTED_TOKENS.join(", ")));
                skipped.push(token.clone());
            }
        }
    }

    (outcomes, skipped)
}

/// Execute the full pipeline for the raw format-list argument.
pub fn run<F>(
    config: &ConverterConfig,
    formats: Option<&str>,
    runner: &dyn ToolRunner,
    platform: Platform,
    confirm_install: F,
) -> Result<RunReport, ConvertError>
where
    F: FnOnce(&str) -> Result<bool>,
{
    check_source(&config.source)?;
    let tool_status = ensure_tool(config, runner, platform, confirm_install)?;
    let created_output_dir = ensure_output_dir(&config.output_dir)?;

    let tokens = normalize_tokens(formats);
    println!();
    println!(
        "{}{}",
        TARGET,
        style(format!("Converting to format(s): {}", tokens.join(", "))).bold()
    );

    let requests = parse_tokens(&tokens);
    let (outcomes, skipped) = dispatch(&requests, config, runner);

    Ok(RunReport {
        tool_status,
        created_output_dir,
        outcomes,
        skipped,
    })
}
