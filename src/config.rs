//! Project configuration handling.
//! Merges explicit CLI flag values, interactive prompt answers, and the
//! defaults table into one immutable [`ProjectConfig`], applying per-field
//! precedence: flag, then prompt (interactive mode only), then default.

use crate::defaults::Defaults;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::validation::{derive_package_name, validate_name, validate_python_version};
use log::debug;
use std::path::{Path, PathBuf};

/// The resolved project configuration.
///
/// Constructed once per invocation by [`resolve_config`] and never mutated
/// afterwards. `description` and `author` are already TOML-escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub author: String,
    pub python_version: String,
    pub include_ci: bool,
    pub include_devcontainer: bool,
    pub include_precommit: bool,
    pub include_docker: bool,
    pub include_diagrams: bool,
    /// Directory the project tree is created in
    pub target_path: PathBuf,
    /// True when scaffolding into the current directory (`new .`)
    pub use_cwd: bool,
}

/// Explicit values supplied on the command line; `None` means unset.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub python: Option<String>,
    pub ci: Option<bool>,
    pub devcontainer: Option<bool>,
    pub precommit: Option<bool>,
    pub docker: Option<bool>,
    pub diagrams: Option<bool>,
    pub non_interactive: bool,
}

/// Escapes backslashes and double quotes for TOML basic strings.
///
/// Applied exactly once, at resolution time; the escaped value can be
/// embedded between double quotes in the generated manifest without
/// breaking its grammar.
pub fn escape_toml_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn resolve_text(
    value: Option<String>,
    label: &str,
    default: &str,
    interactive: bool,
    prompter: &dyn Prompter,
) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if interactive => prompter.ask_text(label, default),
        None => Ok(default.to_string()),
    }
}

fn resolve_flag(
    value: Option<bool>,
    label: &str,
    default: bool,
    interactive: bool,
    prompter: &dyn Prompter,
) -> Result<bool> {
    match value {
        Some(v) => Ok(v),
        None if interactive => prompter.ask_confirm(label, default),
        None => Ok(default),
    }
}

/// Resolves the complete project configuration from CLI overrides, the
/// prompter, and the defaults table.
///
/// Each field is resolved independently: an explicit flag always wins, a
/// prompt is issued only in interactive mode for fields still unset, and the
/// default applies otherwise. A name of `.` switches to current-directory
/// mode: the package name is derived from `current_dir`'s basename (with a
/// leading digit corrected to an identifier-safe form) and the tree is
/// created in place.
///
/// # Errors
/// * `Error::InvalidName` if the final name fails validation; this is fatal
///   and never falls back to a default
/// * `Error::InvalidPythonVersion` for a version not in X.Y form
/// * `Error::PromptError` if an interactive prompt fails
pub fn resolve_config(
    overrides: ConfigOverrides,
    prompter: &dyn Prompter,
    defaults: &Defaults,
    current_dir: &Path,
) -> Result<ProjectConfig> {
    let interactive = !overrides.non_interactive;
    let use_cwd = overrides.name.as_deref() == Some(".");

    let name = if use_cwd {
        let basename = current_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        derive_package_name(basename, defaults.project_name)
    } else {
        resolve_text(
            overrides.name,
            "Project name",
            defaults.project_name,
            interactive,
            prompter,
        )?
    };
    let name = validate_name(&name)?;

    let description = resolve_text(
        overrides.description,
        "Project description",
        defaults.description,
        interactive,
        prompter,
    )?;
    let author = resolve_text(
        overrides.author,
        "Author name",
        defaults.author,
        interactive,
        prompter,
    )?;
    let python_version = resolve_text(
        overrides.python,
        "Python version",
        defaults.python_version,
        interactive,
        prompter,
    )?;
    validate_python_version(&python_version)?;

    let include_ci = resolve_flag(
        overrides.ci,
        "Include GitHub Actions CI?",
        defaults.include_ci,
        interactive,
        prompter,
    )?;
    let include_devcontainer = resolve_flag(
        overrides.devcontainer,
        "Include devcontainer setup?",
        defaults.include_devcontainer,
        interactive,
        prompter,
    )?;
    let include_precommit = resolve_flag(
        overrides.precommit,
        "Include pre-commit hooks?",
        defaults.include_precommit,
        interactive,
        prompter,
    )?;
    let include_docker = resolve_flag(
        overrides.docker,
        "Include Docker setup?",
        defaults.include_docker,
        interactive,
        prompter,
    )?;
    let include_diagrams = resolve_flag(
        overrides.diagrams,
        "Include PlantUML diagram templates?",
        defaults.include_diagrams,
        interactive,
        prompter,
    )?;

    let target_path =
        if use_cwd { current_dir.to_path_buf() } else { current_dir.join(&name) };

    debug!("resolved configuration for project '{}'", name);

    Ok(ProjectConfig {
        name,
        description: escape_toml_string(&description),
        author: escape_toml_string(&author),
        python_version,
        include_ci,
        include_devcontainer,
        include_precommit,
        include_docker,
        include_diagrams,
        target_path,
        use_cwd,
    })
}
