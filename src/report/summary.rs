//! Conversion summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{ConversionOutcome, RunReport, ToolStatus};
use crate::utils::{format_kb, print_section, BULB, CROSS, FOLDER, PACKAGE};

/// Follow-up instructions shown once at least one file was produced.
pub const NEXT_STEPS: &[&str] = &[
    "1. Open the .docx file",
    "2. Upload to Google Drive",
    "3. Right-click → Open with → Google Docs",
    "Or: File → Upload → Select the .docx file",
];

/// Build the table of produced files. `None` when nothing was produced.
pub fn output_table(report: &RunReport) -> Option<Table> {
    let mut produced = report.produced().peekable();
    produced.peek()?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Format").add_attribute(Attribute::Bold),
        Cell::new("File").add_attribute(Attribute::Bold),
        Cell::new("Size").add_attribute(Attribute::Bold),
    ]);

    for outcome in produced {
        if let ConversionOutcome::Produced {
            format,
            path,
            bytes,
        } = outcome
        {
            table.add_row(vec![
                Cell::new(format.label()).fg(Color::Cyan),
                Cell::new(path.display()),
                Cell::new(format_kb(*bytes)).fg(Color::Green),
            ]);
        }
    }
    Some(table)
}

/// Print the end-of-run summary
pub fn display_summary(report: &RunReport) {
    print_section("CONVERSION COMPLETE!");

    if report.tool_status == ToolStatus::Installed {
        println!();
        println!("{}{}", PACKAGE, style("pandoc was installed during this run").dim());
    }
    if report.created_output_dir {
        println!("{}{}", FOLDER, style("Output directory was created").dim());
    }

    if let Some(table) = output_table(report) {
        println!();
        println!("{}{}", FOLDER, style("Output files:").cyan());
        for line in table.to_string().lines() {
            println!("   {}", line);
        }
    }

    let failed: Vec<_> = report.failed().collect();
    if !failed.is_empty() {
        println!();
        println!("{}{}", CROSS, style("Failed formats:").red());
        for outcome in failed {
            if let ConversionOutcome::Failed {
                format,
                error,
                hint,
            } = outcome
            {
                println!("   {} {}: {}", style("•").dim(), format.label(), error);
                if let Some(hint) = hint {
                    println!("     {}", style(hint).yellow());
                }
            }
        }
    }

    if !report.skipped.is_empty() {
        println!();
        println!(
            "   {} {}",
            style("Skipped unknown format(s):").yellow(),
            report.skipped.join(", ")
        );
    }

    if report.produced().next().is_some() {
        println!();
        println!("{}{}", BULB, style("Next steps:").yellow());
        for step in NEXT_STEPS {
            println!("   {}", step);
        }
    }

    println!();
}
