//! Resume Convert: Markdown Resume Conversion CLI
//!
//! Converts `resume.md` to DOCX, PDF and/or HTML by invoking pandoc.

use std::process::ExitCode;

use clap::Parser;

use resume_convert::cli::{confirm_install, Cli};
use resume_convert::pipeline::{run, Platform, SystemRunner};
use resume_convert::report::display_summary;
use resume_convert::utils::{print_banner, print_error, print_hint};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    print_banner(env!("CARGO_PKG_VERSION"));

    match run(
        &config,
        cli.formats(),
        &SystemRunner,
        Platform::current(),
        confirm_install,
    ) {
        Ok(report) => {
            display_summary(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_error(&format!("Error: {}", err));
            if let Some(hint) = err.hint() {
                print_hint(&hint);
            }
            ExitCode::FAILURE
        }
    }
}
