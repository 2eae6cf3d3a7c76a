//! Generation planning.
//! Turns a resolved [`ProjectConfig`] into a [`GenerationPlan`]: the ordered
//! list of every file the project tree will contain, each paired with its
//! template and rendering context. The plan is a plain value computed before
//! any filesystem access, so it can be inspected and tested in isolation.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use log::debug;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Where a planned file's content comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    /// Render the embedded template with the given context
    Template { id: String, context: serde_json::Value },
    /// Write the payload verbatim
    Literal(String),
}

/// One planned file write: a path relative to the project root plus its
/// content source.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub path: PathBuf,
    pub source: ContentSource,
}

/// The complete, ordered file-write plan for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub entries: Vec<PlanEntry>,
}

impl GenerationPlan {
    /// All planned paths, in plan order.
    pub fn paths(&self) -> Vec<&Path> {
        self.entries.iter().map(|e| e.path.as_path()).collect()
    }
}

/// Context shared by every base template.
#[derive(Serialize)]
struct BaseContext<'a> {
    project_name: &'a str,
    description: &'a str,
    author: &'a str,
    python_version: &'a str,
}

/// Context for the CI workflow, which branches on the pre-commit toggle.
#[derive(Serialize)]
struct CiContext<'a> {
    #[serde(flatten)]
    base: BaseContext<'a>,
    precommit: bool,
}

fn base_context(config: &ProjectConfig) -> serde_json::Value {
    to_context(&BaseContext {
        project_name: &config.name,
        description: &config.description,
        author: &config.author,
        python_version: &config.python_version,
    })
}

fn ci_context(config: &ProjectConfig) -> serde_json::Value {
    to_context(&CiContext {
        base: BaseContext {
            project_name: &config.name,
            description: &config.description,
            author: &config.author,
            python_version: &config.python_version,
        },
        precommit: config.include_precommit,
    })
}

fn to_context<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

/// One optional feature: a toggle plus the files it contributes.
struct Feature {
    enabled: fn(&ProjectConfig) -> bool,
    /// (relative path, template id) pairs appended when the toggle is on
    files: &'static [(&'static str, &'static str)],
    context: fn(&ProjectConfig) -> serde_json::Value,
}

/// Toggle-to-subtree table. Adding an optional feature is a new row here,
/// not a new code path.
const FEATURES: &[Feature] = &[
    Feature {
        enabled: |c| c.include_ci,
        files: &[(".github/workflows/ci.yml", "ci/ci.yml.j2")],
        context: ci_context,
    },
    Feature {
        enabled: |c| c.include_devcontainer,
        files: &[(".devcontainer/devcontainer.json", "devcontainer/devcontainer.json.j2")],
        context: base_context,
    },
    Feature {
        enabled: |c| c.include_precommit,
        files: &[(".pre-commit-config.yaml", "precommit/pre-commit-config.yaml.j2")],
        context: base_context,
    },
    Feature {
        enabled: |c| c.include_docker,
        files: &[
            ("docker/Dockerfile", "docker/Dockerfile.j2"),
            ("docker/docker-compose.yml", "docker/docker-compose.yml.j2"),
            (".dockerignore", "docker/dockerignore.j2"),
        ],
        context: base_context,
    },
    Feature {
        enabled: |c| c.include_diagrams,
        files: &[("docs/diagrams/class_diagram.puml", "diagrams/class_diagram.puml.j2")],
        context: base_context,
    },
];

/// (relative path, template id) pairs generated for every project.
/// The source package path depends on the project name and is added
/// separately in [`build_plan`].
const BASE_FILES: &[(&str, &str)] = &[
    ("tests/conftest.py", "base/conftest.py.j2"),
    ("tests/test_main.py", "base/test_main.py.j2"),
    ("pyproject.toml", "base/pyproject.toml.j2"),
    ("README.md", "base/README.md.j2"),
    (".gitignore", "base/gitignore.j2"),
    ("Makefile", "base/Makefile.j2"),
    (".env", "base/env.j2"),
    (".vscode/launch.json", "base/vscode_launch.json.j2"),
    (".vscode/settings.json", "base/vscode_settings.json.j2"),
];

fn template_entry(path: PathBuf, id: &str, context: &serde_json::Value) -> PlanEntry {
    PlanEntry {
        path,
        source: ContentSource::Template { id: id.to_string(), context: context.clone() },
    }
}

/// Builds the generation plan for a resolved configuration.
///
/// The plan starts from the fixed base set (source package, tests, manifest,
/// editor and shell tooling) and appends the subtree of every enabled
/// feature from the toggle table. Toggles are independent: the resulting
/// path set depends only on which toggles are true.
///
/// # Errors
/// * `Error::UnsafePlanPath` if any entry is absolute or contains `..`
///   (an internal invariant; planned paths must stay inside the project root)
pub fn build_plan(config: &ProjectConfig) -> Result<GenerationPlan> {
    let ctx = base_context(config);
    let package = Path::new("src").join(&config.name);

    let mut entries = vec![
        template_entry(package.join("__init__.py"), "base/init.py.j2", &ctx),
        template_entry(package.join("__main__.py"), "base/__main__.py.j2", &ctx),
        template_entry(package.join("main.py"), "base/main.py.j2", &ctx),
        PlanEntry {
            path: PathBuf::from("tests/__init__.py"),
            source: ContentSource::Literal(String::new()),
        },
    ];

    for (path, id) in BASE_FILES {
        entries.push(template_entry(PathBuf::from(path), id, &ctx));
    }

    for feature in FEATURES {
        if !(feature.enabled)(config) {
            continue;
        }
        let feature_ctx = (feature.context)(config);
        for (path, id) in feature.files {
            entries.push(template_entry(PathBuf::from(path), id, &feature_ctx));
        }
    }

    for entry in &entries {
        if !is_within_root(&entry.path) {
            return Err(Error::UnsafePlanPath { path: entry.path.clone() });
        }
    }

    debug!("planned {} files for project '{}'", entries.len(), config.name);

    Ok(GenerationPlan { entries })
}

fn is_within_root(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path.is_relative()
        && path.components().all(|c| matches!(c, Component::Normal(_)))
}
