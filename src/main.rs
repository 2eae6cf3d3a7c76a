//! devstart's main application entry point and orchestration logic.
//! Parses arguments, resolves the project configuration, builds the
//! generation plan, and materializes it, coordinating the modules involved.

use devstart::{
    cli::{get_args, Cli, Command, NewArgs},
    config::{resolve_config, ProjectConfig},
    defaults::Defaults,
    error::{default_error_handler, Error, Result},
    planner::build_plan,
    processor::materialize,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Cli) -> Result<()> {
    match args.command {
        Command::New(new_args) => run_new(new_args),
    }
}

/// Executes the `new` subcommand.
///
/// # Flow
/// 1. Resolves the configuration from flags, prompts, and defaults
/// 2. Builds the file-write plan
/// 3. Materializes the plan under the target directory
/// 4. Prints the created files and next-steps hints
fn run_new(args: NewArgs) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();
    let defaults = Defaults::default();
    let current_dir = std::env::current_dir().map_err(Error::IoError)?;

    let config = resolve_config(args.into_overrides(), &prompter, &defaults, &current_dir)?;
    let plan = build_plan(&config)?;
    let created = materialize(&plan, &config.target_path, &engine)?;

    for path in &created {
        println!("created: '{}'", path.display());
    }
    print_next_steps(&config);

    Ok(())
}

fn print_next_steps(config: &ProjectConfig) {
    println!("Project '{}' created successfully in '{}'.", config.name, config.target_path.display());
    println!("Next steps:");
    if !config.use_cwd {
        println!("  cd {}", config.name);
    }
    println!("  make setup");
    println!("  uv run python -m {}", config.name);
}
