//! Prints the JSON schema of `config.toml`, or writes it to the given path.

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let schema = hairsketch::Config::json_schema();
    let rendered = serde_json::to_string_pretty(&schema).context("Failed to render schema")?;

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::write(&path, rendered + "\n")
            .with_context(|| format!("Failed to write schema to {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
