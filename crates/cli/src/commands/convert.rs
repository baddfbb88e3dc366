//! Single-collection conversion command.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use postbru_convert::postman_to_bruno;
use postbru_model::UuidIds;
use serde_json::Value;

use crate::error::{CliError, Result};
use crate::writer::{sanitize_directory_name, write_collection};

/// Converts one Postman collection file and writes the Bruno tree.
///
/// Without an explicit output directory the tree lands in
/// `./<collection-name>` with the name made filesystem safe.
///
/// # Errors
///
/// Returns an error when the input is missing or unreadable, is not a
/// Postman collection, fails conversion, or the output cannot be written.
pub fn execute_convert(input: &Path, output_dir: Option<&Path>, verbose: bool) -> Result<()> {
    if !input.exists() {
        return Err(CliError::InputNotFound(input.display().to_string()));
    }

    let source: Value = serde_json::from_str(&fs::read_to_string(input)?)?;
    let Some(name) = source
        .pointer("/info/name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
    else {
        return Err(CliError::MissingName);
    };

    println!("\n{} {name}", "Converting:".bright_blue());
    let schema = source
        .pointer("/info/schema")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    println!("   Schema: {schema}");

    let collection = postman_to_bruno(&source, &UuidIds)?;
    println!(
        "   Found: {} requests, {} folders\n",
        collection.request_count(),
        collection.folder_count()
    );

    let output_dir = output_dir.map_or_else(
        || PathBuf::from(sanitize_directory_name(name)),
        Path::to_path_buf,
    );

    println!("{} {}\n", "Writing to:".bright_blue(), output_dir.display());
    write_collection(&collection, &output_dir, verbose)?;

    println!("\n{}", "✓ Conversion complete!".green().bold());
    println!("   Output: {}", output_dir.display());
    Ok(())
}
