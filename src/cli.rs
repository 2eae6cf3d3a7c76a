//! Command-line interface implementation for devstart.
//! Provides argument parsing using clap, including the paired
//! `--feature/--no-feature` toggle flags of the `new` subcommand.

use crate::config::ConfigOverrides;
use clap::{Parser, Subcommand};

/// Command-line arguments structure for devstart.
#[derive(Parser, Debug)]
#[command(
    name = "devstart",
    version,
    about = "devstart: scaffold Python projects with dev tooling pre-configured",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Python project with dev tooling pre-configured
    New(NewArgs),
}

/// Arguments of the `new` subcommand. Each toggle is a `--x/--no-x` pair;
/// leaving both unset defers the decision to prompts or defaults.
#[derive(clap::Args, Debug, Default)]
pub struct NewArgs {
    /// Project name, or "." to scaffold into the current directory
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Author name
    #[arg(short, long)]
    pub author: Option<String>,

    /// Python version in X.Y form (default "3.14")
    #[arg(long)]
    pub python: Option<String>,

    /// Include GitHub Actions CI
    #[arg(long, overrides_with = "no_ci")]
    pub ci: bool,
    /// Skip GitHub Actions CI
    #[arg(long, overrides_with = "ci")]
    pub no_ci: bool,

    /// Include devcontainer setup
    #[arg(long, overrides_with = "no_devcontainer")]
    pub devcontainer: bool,
    /// Skip devcontainer setup
    #[arg(long, overrides_with = "devcontainer")]
    pub no_devcontainer: bool,

    /// Include pre-commit hooks config
    #[arg(long, overrides_with = "no_precommit")]
    pub precommit: bool,
    /// Skip pre-commit hooks config
    #[arg(long, overrides_with = "precommit")]
    pub no_precommit: bool,

    /// Include Docker setup
    #[arg(long, overrides_with = "no_docker")]
    pub docker: bool,
    /// Skip Docker setup
    #[arg(long, overrides_with = "docker")]
    pub no_docker: bool,

    /// Include PlantUML diagram templates
    #[arg(long, overrides_with = "no_diagrams")]
    pub diagrams: bool,
    /// Skip PlantUML diagram templates
    #[arg(long, overrides_with = "diagrams")]
    pub no_diagrams: bool,

    /// Use defaults, skip all prompts
    #[arg(short = 'y', long)]
    pub no_interactive: bool,
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl NewArgs {
    /// Converts the parsed flags into resolver overrides, collapsing each
    /// `--x/--no-x` pair into an optional boolean.
    pub fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            name: self.name,
            description: self.description,
            author: self.author,
            python: self.python,
            ci: toggle(self.ci, self.no_ci),
            devcontainer: toggle(self.devcontainer, self.no_devcontainer),
            precommit: toggle(self.precommit, self.no_precommit),
            docker: toggle(self.docker, self.no_docker),
            diagrams: toggle(self.diagrams, self.no_diagrams),
            non_interactive: self.no_interactive,
        }
    }
}

/// Parses command line arguments and returns the Cli structure.
pub fn get_args() -> Cli {
    Cli::parse()
}
