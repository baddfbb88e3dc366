//! Environment conversion command.

use std::fs;
use std::path::Path;

use colored::Colorize;
use postbru_convert::postman_env_to_bruno_env;
use serde_json::Value;

use crate::error::{CliError, Result};
use crate::writer::write_environment;

/// Converts one Postman environment file into `environments/<name>.bru`
/// under `output_dir`.
///
/// # Errors
///
/// Returns an error when the input is missing or unreadable, is not an
/// environment export, or the output cannot be written.
pub fn execute_env(input: &Path, output_dir: &Path, verbose: bool) -> Result<()> {
    if !input.exists() {
        return Err(CliError::InputNotFound(input.display().to_string()));
    }

    let source: Value = serde_json::from_str(&fs::read_to_string(input)?)?;
    let environment = postman_env_to_bruno_env(&source)?;
    let path = write_environment(&environment, output_dir, verbose)?;

    println!(
        "{} Created environment: {}",
        "✓".green(),
        path.display()
    );
    println!("   Variables: {}", environment.variables.len());
    Ok(())
}
