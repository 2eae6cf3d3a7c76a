use clap::Parser;
use devstart::cli::{Cli, Command};
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("devstart")];
    res.extend(args.iter().map(OsString::from));
    res
}

fn parse_new(args: &[&str]) -> devstart::config::ConfigOverrides {
    let cli = Cli::try_parse_from(make_args(args)).unwrap();
    match cli.command {
        Command::New(new_args) => new_args.into_overrides(),
    }
}

#[test]
fn test_basic_args() {
    let overrides = parse_new(&["new", "myproject"]);

    assert_eq!(overrides.name.as_deref(), Some("myproject"));
    assert_eq!(overrides.description, None);
    assert_eq!(overrides.author, None);
    assert_eq!(overrides.python, None);
    assert_eq!(overrides.ci, None);
    assert!(!overrides.non_interactive);
}

#[test]
fn test_name_is_optional() {
    let overrides = parse_new(&["new"]);
    assert_eq!(overrides.name, None);
}

#[test]
fn test_text_options() {
    let overrides = parse_new(&[
        "new",
        "myproject",
        "-d",
        "a demo project",
        "-a",
        "Jane Doe",
        "--python",
        "3.12",
    ]);

    assert_eq!(overrides.description.as_deref(), Some("a demo project"));
    assert_eq!(overrides.author.as_deref(), Some("Jane Doe"));
    assert_eq!(overrides.python.as_deref(), Some("3.12"));
}

#[test]
fn test_toggle_pairs() {
    let overrides = parse_new(&["new", "myproject", "--no-ci", "--docker", "--no-diagrams"]);

    assert_eq!(overrides.ci, Some(false));
    assert_eq!(overrides.docker, Some(true));
    assert_eq!(overrides.diagrams, Some(false));
    assert_eq!(overrides.devcontainer, None);
    assert_eq!(overrides.precommit, None);
}

#[test]
fn test_toggle_last_occurrence_wins() {
    let overrides = parse_new(&["new", "myproject", "--ci", "--no-ci"]);
    assert_eq!(overrides.ci, Some(false));

    let overrides = parse_new(&["new", "myproject", "--no-ci", "--ci"]);
    assert_eq!(overrides.ci, Some(true));
}

#[test]
fn test_non_interactive_short_flag() {
    let overrides = parse_new(&["new", "myproject", "-y"]);
    assert!(overrides.non_interactive);
}

#[test]
fn test_verbose_flag() {
    let cli = Cli::try_parse_from(make_args(&["new", "myproject", "--verbose"])).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_unknown_subcommand() {
    assert!(Cli::try_parse_from(make_args(&["build", "myproject"])).is_err());
}
