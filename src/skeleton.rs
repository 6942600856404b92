//! In-memory representation of one skeleton run.

use crate::config::SkeletonConfig;
use chrono::Utc;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Everything one materialization run operates on: where the skeleton tree
/// lives, what its descriptor declared, where output goes and the values
/// collected for substitution. Owned by the run; never persisted.
#[derive(Debug)]
pub struct Skeleton {
    /// Skeleton source tree (possibly a temporary archive extraction)
    pub root: PathBuf,
    /// Parsed descriptor
    pub config: SkeletonConfig,
    /// Directory the generated tree is anchored under
    pub output_root: PathBuf,
    /// Per-run sub-directory below the output root; None for a flat layout
    pub run_dir: Option<String>,
    /// When set, no filesystem mutation occurs; planned actions are reported
    pub dry_run: bool,
    /// Collected parameter values, in declaration order
    pub values: IndexMap<String, String>,
}

impl Skeleton {
    /// Creates a skeleton run description.
    ///
    /// Unless `flat` is requested, output is nested one level under a
    /// uniquely named sub-directory derived from the skeleton name and a
    /// nanosecond timestamp, so repeated runs against the same output root
    /// cannot collide.
    pub fn new<P: Into<PathBuf>>(
        root: P,
        config: SkeletonConfig,
        output_root: P,
        flat: bool,
        dry_run: bool,
    ) -> Self {
        let run_dir = if flat { None } else { Some(run_dir_name(&config)) };
        Self {
            root: root.into(),
            config,
            output_root: output_root.into(),
            run_dir,
            dry_run,
            values: IndexMap::new(),
        }
    }

    /// Root the generated tree is written under, including the per-run
    /// sub-directory when one is used.
    pub fn target_root(&self) -> PathBuf {
        match &self.run_dir {
            Some(dir) => self.output_root.join(dir),
            None => self.output_root.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn run_dir_name(config: &SkeletonConfig) -> String {
    let base = if config.name.is_empty() { "skeleton" } else { config.name.as_str() };
    format!("{}-{}", base, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}
