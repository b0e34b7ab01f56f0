// src/discovery.rs
//! Migration file discovery.
//!
//! Only top-level files in the migrations directory are considered; there is
//! no recursive descent. Results are sorted by filename so rule evaluation
//! order is reproducible.

use crate::error::{MigralintError, Result};
use crate::types::MigrationFile;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Parses the version from a migration filename: the leading run of digits
/// before the first separator. A non-numeric prefix parses as 0 and sorts
/// first, mirroring the lenient filename convention.
#[must_use]
pub fn parse_version(filename: &str) -> u64 {
    let digits: String = filename.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Lists migration files (matching `extension`) directly inside `dir`,
/// sorted by filename.
///
/// # Errors
/// Returns error if a matching file cannot be read.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<MigrationFile>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(&path).map_err(|e| MigralintError::io(e, &path))?;
        let version = path
            .file_name()
            .and_then(|f| f.to_str())
            .map_or(0, parse_version);
        files.push(MigrationFile {
            path,
            version,
            content,
        });
    }
    Ok(files)
}
