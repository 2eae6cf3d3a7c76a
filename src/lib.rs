//! devstart scaffolds Python projects with dev tooling pre-configured.
//! It resolves a project configuration from CLI flags, interactive prompts,
//! and defaults, computes a file-write plan from it, and materializes the
//! plan as a ready-to-run project tree.

/// Command-line interface module for the devstart application
pub mod cli;

/// Project configuration handling
/// Merges CLI flags, prompt answers, and defaults into one record
pub mod config;

/// Default values offered by prompts and used in non-interactive mode
pub mod defaults;

/// Error types and handling for the devstart application
pub mod error;

/// Generation planning
/// Turns a resolved configuration into an ordered list of file writes
pub mod planner;

/// Plan execution against the filesystem
/// Creates directories, renders templates, and writes the project tree
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering over the embedded template payloads
pub mod renderer;

/// Project name and Python version validation
pub mod validation;
