//! Core materialization logic for skelgen.
//! Walks the skeleton root and mirrors its tree under the target root,
//! substituting variables in entry names and file contents.

use globset::GlobSet;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    skeleton::Skeleton,
    substitute::substitute,
};

/// Filesystem action planned for one skeleton entry.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    CreateDir { target: PathBuf },
    Write { target: PathBuf, content: String },
}

/// Walks a skeleton and materializes it entry by entry.
///
/// Per-entry failures (an unreadable source file, a failed write) are
/// reported as warnings and do not stop the walk; placeholders without a
/// value accumulate into the unresolved set for the post-run diagnostic.
pub struct Processor<'a> {
    skeleton: &'a Skeleton,
    ignored: &'a GlobSet,
    target_root: PathBuf,
    unresolved: BTreeSet<String>,
}

impl<'a> Processor<'a> {
    pub fn new(skeleton: &'a Skeleton, ignored: &'a GlobSet) -> Self {
        let target_root = skeleton.target_root();
        Self { skeleton, ignored, target_root, unresolved: BTreeSet::new() }
    }

    /// Computes the planned operation for one walked path.
    ///
    /// The path is taken relative to the skeleton root (the root itself
    /// contributes an empty relative path), anchored under the target root
    /// and passed through variable substitution, so placeholders in
    /// directory and file names are honored.
    ///
    /// # Returns
    /// * `Ok(Some(operation))` - What to create for this entry
    /// * `Ok(None)` - Entry is excluded by an ignore pattern
    /// * `Err` - The entry could not be planned (reported, then skipped)
    pub fn process(&mut self, source: &Path) -> Result<Option<FileOperation>> {
        let relative = source.strip_prefix(self.skeleton.root()).map_err(|e| {
            Error::ProcessError(format!(
                "entry '{}' is outside the skeleton root: {}",
                source.display(),
                e
            ))
        })?;

        if !relative.as_os_str().is_empty() {
            let relative_str = relative.to_str().ok_or_else(|| {
                Error::ProcessError(format!("non-unicode path: '{}'", relative.display()))
            })?;
            if self.ignored.is_match(relative_str) {
                debug!("Skipping '{}' (ignored)", relative_str);
                return Ok(None);
            }
        }

        let composed = self.target_root.join(relative);
        let composed_str = composed.to_str().ok_or_else(|| {
            Error::ProcessError(format!("non-unicode path: '{}'", composed.display()))
        })?;
        let target =
            PathBuf::from(substitute(composed_str, &self.skeleton.values, &mut self.unresolved));

        if source.is_dir() {
            Ok(Some(FileOperation::CreateDir { target }))
        } else {
            let content = fs::read_to_string(source).map_err(|e| {
                Error::ProcessError(format!("failed to open file '{}': {}", source.display(), e))
            })?;
            let content = substitute(&content, &self.skeleton.values, &mut self.unresolved);
            Ok(Some(FileOperation::Write { target, content }))
        }
    }

    /// Walks the skeleton root, visiting every entry exactly once, and
    /// applies (or, on a dry run, reports) each planned operation.
    pub fn materialize(&mut self) {
        for dir_entry in WalkDir::new(self.skeleton.root()) {
            let entry = match dir_entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            match self.process(entry.path()) {
                Ok(Some(operation)) => self.apply(operation),
                Ok(None) => {}
                Err(e) => warn!("{}", e),
            }
        }
    }

    /// Executes one planned operation; failures are non-fatal.
    fn apply(&self, operation: FileOperation) {
        match operation {
            FileOperation::CreateDir { target } => {
                if self.skeleton.dry_run {
                    println!("Would create dir:  {}", target.display());
                } else {
                    debug!("Creating dir:  {}", target.display());
                    if let Err(e) = fs::create_dir_all(&target) {
                        warn!("Unable to create directory '{}': {}", target.display(), e);
                    }
                }
            }
            FileOperation::Write { target, content } => {
                if self.skeleton.dry_run {
                    println!("Would create file: {}", target.display());
                } else {
                    debug!("Creating file: {}", target.display());
                    if let Err(e) = write_file(&target, &content) {
                        warn!("Unable to write file '{}': {}", target.display(), e);
                    }
                }
            }
        }
    }

    /// Placeholders observed during the walk with no matching value.
    pub fn into_unresolved(self) -> BTreeSet<String> {
        self.unresolved
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}
