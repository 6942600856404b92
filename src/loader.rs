//! Skeleton input resolution for skelgen.
//! Decides whether the input path is a loose skeleton directory or a packed
//! archive, and produces a walkable skeleton root either way.

use crate::archive::extract_archive;
use crate::error::{Error, Result};
use log::warn;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Represents the source location of a skeleton.
#[derive(Debug)]
pub enum SkeletonSource {
    /// Loose skeleton directory on the filesystem
    Directory(PathBuf),
    /// Packed zip archive holding the skeleton tree
    Archive(PathBuf),
}

impl std::fmt::Display for SkeletonSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkeletonSource::Directory(path) => {
                write!(f, "directory '{}'", path.display())
            }
            SkeletonSource::Archive(path) => write!(f, "archive '{}'", path.display()),
        }
    }
}

impl SkeletonSource {
    /// Classifies an input path as a directory or an archive.
    ///
    /// # Arguments
    /// * `path` - Input path given on the command line
    ///
    /// # Returns
    /// * `Result<Self>` - Directory for directories, Archive for files
    ///
    /// # Errors
    /// * `Error::SkeletonDoesNotExistError` if the path cannot be stat'd
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|_| Error::SkeletonDoesNotExistError {
            path: path.display().to_string(),
        })?;

        if metadata.is_dir() {
            Ok(SkeletonSource::Directory(path.to_path_buf()))
        } else {
            Ok(SkeletonSource::Archive(path.to_path_buf()))
        }
    }

    /// Turns the source into a walkable skeleton root.
    ///
    /// Directories are used in place; archives are expanded into a scratch
    /// directory whose handle travels with the returned value so it lives
    /// for the whole run.
    pub fn load(self) -> Result<LoadedSkeleton> {
        match self {
            SkeletonSource::Directory(path) => {
                Ok(LoadedSkeleton { root: path, scratch: None })
            }
            SkeletonSource::Archive(path) => {
                let scratch = extract_archive(&path)?;
                let root = scratch.path().to_path_buf();
                Ok(LoadedSkeleton { root, scratch: Some(scratch) })
            }
        }
    }
}

/// A resolved skeleton root plus the scratch directory backing it, if any.
///
/// The scratch directory must outlive the materialization walk; it is removed
/// on `cleanup`, or by drop on any early-exit path.
#[derive(Debug)]
pub struct LoadedSkeleton {
    root: PathBuf,
    scratch: Option<TempDir>,
}

impl LoadedSkeleton {
    /// Path of the skeleton root to walk.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Removes the scratch directory, if this skeleton was extracted from an
    /// archive. A removal failure is reported as a warning; the generated
    /// output is already complete at that point.
    pub fn cleanup(self) {
        if let Some(scratch) = self.scratch {
            let path = scratch.path().to_path_buf();
            log::debug!("Removing scratch directory '{}'", path.display());
            if let Err(e) = scratch.close() {
                warn!("Unable to remove scratch directory '{}': {}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_source_display() {
        let dir_source = SkeletonSource::Directory(PathBuf::from("/path/to/skeleton"));
        assert_eq!(format!("{}", dir_source), "directory '/path/to/skeleton'");

        let archive_source = SkeletonSource::Archive(PathBuf::from("skeleton.zip"));
        assert_eq!(format!("{}", archive_source), "archive 'skeleton.zip'");
    }

    #[test]
    fn test_from_path_classifies_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        match SkeletonSource::from_path(temp_dir.path()) {
            Ok(SkeletonSource::Directory(path)) => assert_eq!(path, temp_dir.path()),
            other => panic!("Expected Directory source, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_classifies_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file_path = temp_dir.path().join("skeleton.zip");
        std::fs::write(&file_path, b"not really a zip").unwrap();

        match SkeletonSource::from_path(&file_path) {
            Ok(SkeletonSource::Archive(path)) => assert_eq!(path, file_path),
            other => panic!("Expected Archive source, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_missing_input() {
        let result = SkeletonSource::from_path("/definitely/not/here");
        assert!(matches!(result, Err(Error::SkeletonDoesNotExistError { .. })));
    }
}
