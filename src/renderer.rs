//! Template rendering for devstart.
//! The template payloads are compiled into the binary and rendered with
//! MiniJinja behind the [`TemplateRenderer`] trait, so planning and
//! materialization can be tested with a fake engine.

use crate::error::{Error, Result};
use minijinja::Environment;

/// Embedded template sources, keyed by template identifier.
const TEMPLATES: &[(&str, &str)] = &[
    ("base/init.py.j2", include_str!("../templates/base/init.py.j2")),
    ("base/__main__.py.j2", include_str!("../templates/base/__main__.py.j2")),
    ("base/main.py.j2", include_str!("../templates/base/main.py.j2")),
    ("base/conftest.py.j2", include_str!("../templates/base/conftest.py.j2")),
    ("base/test_main.py.j2", include_str!("../templates/base/test_main.py.j2")),
    ("base/pyproject.toml.j2", include_str!("../templates/base/pyproject.toml.j2")),
    ("base/README.md.j2", include_str!("../templates/base/README.md.j2")),
    ("base/gitignore.j2", include_str!("../templates/base/gitignore.j2")),
    ("base/Makefile.j2", include_str!("../templates/base/Makefile.j2")),
    ("base/env.j2", include_str!("../templates/base/env.j2")),
    (
        "base/vscode_launch.json.j2",
        include_str!("../templates/base/vscode_launch.json.j2"),
    ),
    (
        "base/vscode_settings.json.j2",
        include_str!("../templates/base/vscode_settings.json.j2"),
    ),
    ("ci/ci.yml.j2", include_str!("../templates/ci/ci.yml.j2")),
    (
        "devcontainer/devcontainer.json.j2",
        include_str!("../templates/devcontainer/devcontainer.json.j2"),
    ),
    (
        "precommit/pre-commit-config.yaml.j2",
        include_str!("../templates/precommit/pre-commit-config.yaml.j2"),
    ),
    ("docker/Dockerfile.j2", include_str!("../templates/docker/Dockerfile.j2")),
    (
        "docker/docker-compose.yml.j2",
        include_str!("../templates/docker/docker-compose.yml.j2"),
    ),
    ("docker/dockerignore.j2", include_str!("../templates/docker/dockerignore.j2")),
    (
        "diagrams/class_diagram.puml.j2",
        include_str!("../templates/diagrams/class_diagram.puml.j2"),
    ),
];

fn builtin_template(template_id: &str) -> Option<&'static str> {
    TEMPLATES.iter().find(|(id, _)| *id == template_id).map(|(_, source)| *source)
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template registered under `template_id` with the given
    /// context.
    ///
    /// # Arguments
    /// * `template_id` - Identifier of an embedded template
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template_id: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine over the embedded payloads.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with a default environment.
    pub fn new() -> Self {
        let env = Environment::new();
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders an embedded template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::UnknownTemplate` if no payload is registered under the id
    /// * `Error::RenderError` if template compilation or rendering fails
    fn render(&self, template_id: &str, context: &serde_json::Value) -> Result<String> {
        let source = builtin_template(template_id).ok_or_else(|| {
            Error::UnknownTemplate { template: template_id.to_string() }
        })?;

        let render_err = |source| Error::RenderError {
            template: template_id.to_string(),
            source,
        };

        let mut env = self.env.clone();
        env.add_template(template_id, source).map_err(render_err)?;

        let tmpl = env.get_template(template_id).map_err(render_err)?;

        tmpl.render(context).map_err(render_err)
    }
}
