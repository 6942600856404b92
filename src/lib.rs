//! skelgen materializes a parameterized directory/file skeleton into a
//! concrete output tree, substituting `${name}` variables in path names and
//! file contents. Skeletons are loose directories or zip archives carrying a
//! descriptor that declares the substitutable parameters.

/// Zip archive ingestion into a scratch directory
pub mod archive;

/// Command-line interface module for the skelgen application
pub mod cli;

/// Descriptor handling for skeletons
/// Supports XML, JSON and YAML formats (config.xml, config.json, config.yml,
/// config.yaml)
pub mod config;

/// Error types and handling for the skelgen application
pub mod error;

/// File and directory ignore patterns
/// Processes .skelignore files to exclude specific paths
pub mod ignore;

/// Skeleton input resolution (loose directory vs. packed archive)
pub mod loader;

/// Core materialization walk
/// Mirrors the skeleton tree under the output root with substitution applied
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// The per-run skeleton data model
pub mod skeleton;

/// `${name}` placeholder substitution
pub mod substitute;
