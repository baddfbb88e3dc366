//! Lays converted collections and environments out on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use colored::Colorize;
use postbru_lang::{collection_to_bru, environment_to_bru, folder_to_bru, request_to_bru};
use postbru_model::{Collection, Environment, Item};
use regex::Regex;
use serde_json::json;

use crate::error::Result;

#[allow(clippy::expect_used)]
static INVALID_PATH_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).expect("valid regex"));
#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
#[allow(clippy::expect_used)]
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));
#[allow(clippy::expect_used)]
static ENV_INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid regex"));

/// Makes a name safe to use as a file name. Invalid characters become `-`,
/// whitespace runs collapse to a single space.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }
    let name = INVALID_PATH_CHARS.replace_all(name, "-");
    WHITESPACE_RUN.replace_all(&name, " ").trim().to_string()
}

/// Makes a name safe to use as a directory name. Whitespace becomes `-` and
/// dash runs collapse, so "My API v2" turns into "My-API-v2".
#[must_use]
pub fn sanitize_directory_name(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }
    let name = INVALID_PATH_CHARS.replace_all(name, "-");
    let name = WHITESPACE_RUN.replace_all(&name, "-");
    DASH_RUN.replace_all(&name, "-").trim().to_string()
}

/// Writes the `bruno.json` manifest, `collection.bru`, the item tree and any
/// attached environments under `output_dir`, creating directories as needed.
///
/// # Errors
///
/// Returns an error when a directory or file cannot be written.
pub fn write_collection(collection: &Collection, output_dir: &Path, verbose: bool) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let manifest = json!({
        "version": "1",
        "name": collection.name,
        "type": "collection",
        "ignore": ["node_modules", ".git"],
    });
    fs::write(
        output_dir.join("bruno.json"),
        format!("{}\n", serde_json::to_string_pretty(&manifest)?),
    )?;
    if verbose {
        println!("  {} Created bruno.json", "✓".green());
    }

    fs::write(
        output_dir.join("collection.bru"),
        collection_to_bru(&collection.root),
    )?;
    if verbose {
        println!("  {} Created collection.bru", "✓".green());
    }

    write_items(&collection.items, output_dir, verbose)?;

    for environment in &collection.environments {
        write_environment(environment, output_dir, verbose)?;
    }
    Ok(())
}

fn write_items(items: &[Item], dir: &Path, verbose: bool) -> Result<()> {
    for item in items {
        match item {
            Item::Request(request) => {
                let filename = sanitize_name(&format!("{}.bru", request.name));
                fs::write(dir.join(&filename), request_to_bru(request))?;
                if verbose {
                    println!("  {} Created request: {filename}", "✓".green());
                }
            }
            Item::Folder(folder) => {
                let folder_name = sanitize_directory_name(&folder.name);
                let folder_path = dir.join(&folder_name);
                fs::create_dir_all(&folder_path)?;
                if verbose {
                    println!("  {} Created folder: {folder_name}/", "✓".green());
                }
                fs::write(folder_path.join("folder.bru"), folder_to_bru(&folder.root))?;
                write_items(&folder.items, &folder_path, verbose)?;
            }
        }
    }
    Ok(())
}

/// Writes one environment file under `output_dir/environments/` and returns
/// the path it was written to.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be written.
pub fn write_environment(
    environment: &Environment,
    output_dir: &Path,
    verbose: bool,
) -> Result<PathBuf> {
    let envs_dir = output_dir.join("environments");
    fs::create_dir_all(&envs_dir)?;

    let filename = format!(
        "{}.bru",
        ENV_INVALID_CHARS.replace_all(&environment.name, "-")
    );
    let path = envs_dir.join(filename);
    fs::write(&path, environment_to_bru(environment))?;
    if verbose {
        println!("  {} Created environment: {}", "✓".green(), path.display());
    }
    Ok(path)
}
