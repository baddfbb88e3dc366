//! Batch conversion command.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use postbru_convert::postman_to_bruno;
use postbru_model::UuidIds;
use serde_json::Value;

use crate::error::{CliError, Result};
use crate::writer::{sanitize_directory_name, write_collection};

/// Converts every Postman collection JSON found under `input_dir`.
///
/// Files without a schema marker are skipped (logged at debug level). A
/// failed conversion aborts the batch unless `continue_on_error` is set, in
/// which case it is reported in the summary.
///
/// # Errors
///
/// Returns an error when the input directory is missing, the scan fails, or
/// a conversion fails while `continue_on_error` is off.
pub fn execute_batch(
    input_dir: &Path,
    output_dir: &Path,
    continue_on_error: bool,
    verbose: bool,
) -> Result<()> {
    if !input_dir.is_dir() {
        return Err(CliError::InputNotFound(input_dir.display().to_string()));
    }

    println!("\n{} {}", "Scanning:".bright_blue(), input_dir.display());
    let files = find_json_files(input_dir)?;
    println!("   Found {} JSON files\n", files.len());
    if files.is_empty() {
        println!("No JSON files found.");
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let mut successful = 0usize;
    let mut failures: Vec<(String, String)> = Vec::new();

    for file in &files {
        let relative = file
            .strip_prefix(input_dir)
            .unwrap_or(file)
            .display()
            .to_string();

        match convert_file(file, output_dir, verbose) {
            Ok(Some(_)) => successful += 1,
            Ok(None) => {
                tracing::debug!(file = %relative, "skipping file without a collection schema");
            }
            Err(err) => {
                println!("   {} {err}\n", "✗ Error:".red());
                failures.push((relative, err.to_string()));
                if !continue_on_error {
                    return Err(CliError::BatchAborted);
                }
            }
        }
    }

    println!("\n========== Summary ==========");
    println!("{} Successful: {successful}", "✓".green());
    println!("{} Failed: {}", "✗".red(), failures.len());
    if !failures.is_empty() {
        println!("\nFailed files:");
        for (file, error) in &failures {
            println!("  - {file}: {error}");
        }
    }
    Ok(())
}

/// Converts one file; returns `Ok(None)` for JSON without a schema marker.
fn convert_file(file: &Path, output_dir: &Path, verbose: bool) -> Result<Option<String>> {
    let source: Value = serde_json::from_str(&fs::read_to_string(file)?)?;
    if source
        .pointer("/info/schema")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .is_empty()
    {
        return Ok(None);
    }

    let name = source
        .pointer("/info/name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or("Untitled");
    let dir_name = sanitize_directory_name(name);
    println!("{} {dir_name}", "Converting:".bright_blue());

    let collection = postman_to_bruno(&source, &UuidIds)?;
    let collection_dir = output_dir.join(&dir_name);
    write_collection(&collection, &collection_dir, verbose)?;

    println!("   {} {}\n", "✓ Success:".green(), collection_dir.display());
    Ok(Some(dir_name))
}

/// Recursively collects `*.json` files, sorted for stable processing order.
fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(find_json_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
