//! Archive ingestion for packed skeletons.
//! Expands a zip archive into a freshly created scratch directory so the
//! materializer can walk it like any loose skeleton directory.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

/// Extracts a zip archive into a new scratch directory.
///
/// Entries are written in the order the archive lists them, preserving the
/// archive's relative directory structure; file bytes are copied verbatim.
/// The archive itself is opened read-only and never modified.
///
/// The returned `TempDir` owns the scratch directory: dropping it removes the
/// directory again, which also covers the cleanup after a failed extraction,
/// since the handle goes out of scope when an entry error is returned.
///
/// # Arguments
/// * `archive_path` - Path to the zip archive
///
/// # Returns
/// * `Result<TempDir>` - Handle to the scratch directory holding the tree
///
/// # Errors
/// * `Error::ArchiveOpenError` if the path is not a readable zip archive
/// * `Error::ArchiveExtractError` if any single entry fails to extract
pub fn extract_archive<P: AsRef<Path>>(archive_path: P) -> Result<TempDir> {
    let archive_path = archive_path.as_ref();

    let file = fs::File::open(archive_path).map_err(Error::IoError)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| Error::ArchiveOpenError {
        path: archive_path.display().to_string(),
        source: e,
    })?;

    let scratch = tempfile::Builder::new().prefix("skel").tempdir().map_err(Error::IoError)?;
    debug!("Using temporary directory '{}'", scratch.path().display());

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| Error::ArchiveExtractError {
            entry: format!("#{}", index),
            detail: e.to_string(),
        })?;

        let entry_name = entry.name().to_string();

        // Entries with absolute or parent-escaping paths must not land
        // outside the scratch directory.
        let relative = entry.enclosed_name().ok_or_else(|| Error::ArchiveExtractError {
            entry: entry_name.clone(),
            detail: "entry path escapes the extraction root".to_string(),
        })?;
        let target = scratch.path().join(relative);

        if entry.is_dir() {
            debug!("Creating directory '{}'", entry_name);
            fs::create_dir_all(&target).map_err(|e| Error::ArchiveExtractError {
                entry: entry_name.clone(),
                detail: e.to_string(),
            })?;
        } else {
            debug!("Unzipping file '{}'", entry_name);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::ArchiveExtractError {
                    entry: entry_name.clone(),
                    detail: e.to_string(),
                })?;
            }
            let mut outfile = fs::File::create(&target).map_err(|e| Error::ArchiveExtractError {
                entry: entry_name.clone(),
                detail: e.to_string(),
            })?;
            io::copy(&mut entry, &mut outfile).map_err(|e| Error::ArchiveExtractError {
                entry: entry_name,
                detail: e.to_string(),
            })?;
        }
    }

    Ok(scratch)
}
