//! Error handling for the skelgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for skelgen operations.
///
/// This enum represents all possible errors that can occur while loading and
/// materializing a skeleton. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The input path does not point to an existing directory or archive
    #[error("Skeleton does not exist: '{path}'.")]
    SkeletonDoesNotExistError { path: String },

    /// The input file could not be opened as a zip archive
    #[error("Unable to open archive '{path}': {source}.")]
    ArchiveOpenError {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// A single archive entry could not be read or written out
    #[error("Failed to extract archive entry '{entry}': {detail}.")]
    ArchiveExtractError { entry: String, detail: String },

    /// No descriptor file was found at the skeleton root
    #[error("No skeleton descriptor found in '{skeleton_root}' (tried: {tried}).")]
    MissingDescriptorError { skeleton_root: String, tried: String },

    /// Represents failures while reading parameter values from the user
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors in processing .skelignore files
    #[error("SkelIgnore error: {0}.")]
    IgnoreError(String),

    /// Represents per-entry failures during the materialization walk
    #[error("Process error: {0}.")]
    ProcessError(String),
}

/// Convenience type alias for Results with skelgen's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
