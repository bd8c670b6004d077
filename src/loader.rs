//! Input boundary — declaration units arrive as JSON documents produced by
//! the upstream source parser. Parsing raw source is not this tool's job.

use crate::model::DeclarationUnit;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A units file holds either a single declaration or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum UnitsFile {
    One(Box<DeclarationUnit>),
    Many(Vec<DeclarationUnit>),
}

/// Load all declaration units from one file. Any read or parse failure is
/// fatal for the whole run — there are no partial-graph semantics.
pub fn load_units(path: &Path) -> Result<Vec<DeclarationUnit>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: UnitsFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(match parsed {
        UnitsFile::One(unit) => vec![*unit],
        UnitsFile::Many(units) => units,
    })
}

/// File extension recognized as declaration input.
const SUPPORTED_EXTENSION: &str = "json";

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for declaration files.
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for declaration files (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file()
                    && p.extension().and_then(|e| e.to_str()) == Some(SUPPORTED_EXTENSION)
                {
                    files.push(p);
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
