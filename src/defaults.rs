//! Default values for project configuration.
//! The resolver receives this table explicitly so it stays a pure function
//! of its inputs rather than reading ambient global state.

/// Default values offered by interactive prompts and applied outright
/// in non-interactive mode.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub project_name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub python_version: &'static str,
    pub include_ci: bool,
    pub include_devcontainer: bool,
    pub include_precommit: bool,
    pub include_docker: bool,
    pub include_diagrams: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: "my_project",
            description: "A Python project",
            author: "Your Name",
            python_version: "3.14",
            include_ci: true,
            include_devcontainer: true,
            include_precommit: true,
            include_docker: true,
            include_diagrams: true,
        }
    }
}
