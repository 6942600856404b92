//! File and directory ignore pattern handling for skeletons.
//! This module processes .skelignore files to exclude specific paths from
//! materialization, similar to .gitignore functionality.

use crate::config::CONFIG_FILES;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// skelgen's ignore file name
pub const IGNORE_FILE: &str = ".skelignore";

/// Patterns that are always excluded: the descriptor and ignore files drive
/// the run and are not part of the generated tree.
const DEFAULT_PATTERNS: [&str; 4] = [".skelignore", ".git", ".git/**", "**/.DS_Store"];

/// Reads and processes the .skelignore file to create a set of glob patterns.
///
/// # Arguments
/// * `skelignore_path` - Path to the .skelignore file
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - If the .skelignore file doesn't exist, only the default patterns apply
/// - Each line in the file is treated as a separate glob pattern
/// - Invalid patterns will result in an IgnoreError
pub fn parse_skelignore_file<P: AsRef<Path>>(skelignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_PATTERNS.iter().copied().chain(CONFIG_FILES) {
        builder.add(
            Glob::new(pattern)
                .map_err(|e| Error::IgnoreError(format!("default pattern failed: {}", e)))?,
        );
    }

    if let Ok(contents) = read_to_string(skelignore_path.as_ref()) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!(".skelignore loading failed: {}", e))
            })?);
        }
    } else {
        debug!(".skelignore does not exist")
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!(".skelignore loading failed: {}", e)))
}
