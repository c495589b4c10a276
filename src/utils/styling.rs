//! Terminal styling utilities for coloured progress and summary output

use console::{style, Emoji};

use crate::pipeline::Invocation;

// Emoji icons with fallbacks for terminals that don't support them
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
pub static MEMO: Emoji<'_, '_> = Emoji("📝 ", "");
pub static GLOBE: Emoji<'_, '_> = Emoji("🌐 ", "");
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "[*] ");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
pub static BULB: Emoji<'_, '_> = Emoji("💡 ", "");
pub static SPARKLES: Emoji<'_, '_> = Emoji("✨ ", "");
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[x] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

const RULE_WIDTH: usize = 60;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!("{}", style("=".repeat(RULE_WIDTH)).bold());
    println!(
        "          {}{}",
        DOCUMENT,
        style("RESUME CONVERTER").cyan().bold()
    );
    println!("          {}", style(format!("v{}", version)).dim());
    println!("{}", style("=".repeat(RULE_WIDTH)).bold());
    println!();
}

/// Print a section heading framed by rules
pub fn print_section(title: &str) {
    println!();
    println!("{}", style("=".repeat(RULE_WIDTH)).bold());
    println!("{}{}", SPARKLES, style(title).green().bold());
    println!("{}", style("=".repeat(RULE_WIDTH)).bold());
}

/// Print a step heading such as "Converting to PDF format..."
pub fn print_step(icon: &Emoji<'_, '_>, message: &str) {
    println!();
    println!("{}{}", icon, style(message).cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}{}", CHECK, style(message).green());
}

/// Print an error message
pub fn print_error(message: &str) {
    println!("{}{}", CROSS, style(message).red());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{}{}", WARN, style(message).yellow());
}

/// Print an indented follow-up line in yellow
pub fn print_hint(message: &str) {
    println!("   {}", style(message).yellow());
}

/// Print an indented plain detail line
pub fn print_detail(message: &str) {
    println!("   {}", message);
}

/// Echo an external command before it runs
pub fn print_command(invocation: &Invocation) {
    println!("   {} {}", style("$").dim(), style(invocation).dim());
}

/// Format a byte count as kilobytes with two decimals
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
