//! Error handling for the devstart application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a project name can be rejected by the validator.
///
/// Each variant corresponds to exactly one validation rule, so callers
/// and tests can distinguish why a name was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("only letters, digits, and underscores are allowed (cannot start with a digit)")]
    InvalidIdentifier,

    #[error("Python keywords are not allowed")]
    Keyword,

    #[error("dunder names are reserved by Python")]
    Dunder,

    #[error("conflicts with a Python standard library module or reserved name")]
    ReservedModule,
}

/// Custom error types for devstart operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// The project name failed one of the validation rules
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: NameError },

    /// The Python version is not in X.Y form
    #[error("invalid Python version '{version}': expected format X.Y (e.g. 3.14)")]
    InvalidPythonVersion { version: String },

    /// The target directory already contains files
    #[error("directory '{path}' already exists and is not empty")]
    TargetConflict { path: PathBuf },

    /// A plan entry points outside the project root
    #[error("plan entry '{path}' escapes the project root")]
    UnsafePlanPath { path: PathBuf },

    /// No embedded template is registered under the requested identifier
    #[error("unknown template '{template}'")]
    UnknownTemplate { template: String },

    /// Template rendering failed for the named template
    #[error("failed to render template '{template}': {source}")]
    RenderError {
        template: String,
        source: minijinja::Error,
    },

    /// A file or directory could not be written
    #[error("failed to write '{path}': {source}")]
    WriteError { path: PathBuf, source: io::Error },

    /// An interactive prompt failed or was aborted
    #[error("prompt error: {0}")]
    PromptError(String),
}

/// Convenience type alias for Results with devstart's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
