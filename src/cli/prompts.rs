//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm installing a missing tool
pub fn confirm_install(program: &str) -> Result<bool> {
    let message = format!(
        "{} is not installed. Install it with the system package manager?",
        program
    );
    confirm_step(&message)
}
