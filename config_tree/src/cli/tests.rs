//! Unit tests for CLI option facts and the `clap` adapter.

use clap::{Arg, ArgAction, Command};
use rstest::{fixture, rstest};

use serde_json::json;

use super::{ClapOptions, CliOptions, OptionDecorator, OptionMetadata};
use crate::{FormatParser, Node, OverrideComposer, SourceLocation};

#[fixture]
fn command() -> Command {
    Command::new("app")
        .arg(Arg::new("port").long("port").num_args(1))
        .arg(Arg::new("config").long("config").num_args(1))
        .arg(Arg::new("verbose").long("verbose").action(ArgAction::SetTrue))
        .arg(Arg::new("mode").long("mode").default_value("fast"))
}

#[rstest]
#[case(vec!["app", "--port", "6060", "--config", "a.yml"], vec!["port", "config"])]
#[case(vec!["app", "--config", "a.yml", "--port", "6060"], vec!["config", "port"])]
#[case(vec!["app", "--verbose"], vec!["verbose"])]
#[case(vec!["app"], vec![])]
fn detects_options_in_command_line_order(
    command: Command,
    #[case] args: Vec<&str>,
    #[case] expected: Vec<&str>,
) {
    let matches = command.clone().get_matches_from(args);
    let cli = ClapOptions::new(&command, &matches);
    assert_eq!(cli.detected_options(), expected);
}

#[rstest]
fn defaults_are_not_detected(command: Command) {
    let matches = command.clone().get_matches_from(["app"]);
    let cli = ClapOptions::new(&command, &matches);
    assert!(!cli.detected_options().contains(&"mode".to_owned()));
    assert_eq!(cli.option_value("mode").as_deref(), Some("fast"));
}

#[rstest]
fn reads_raw_option_values(command: Command) {
    let matches = command.clone().get_matches_from(["app", "--port", "6060"]);
    let cli = ClapOptions::new(&command, &matches);
    assert_eq!(cli.option_value("port").as_deref(), Some("6060"));
    assert_eq!(cli.option_value("config"), None);
    assert_eq!(cli.option_value("unknown"), None);
}

#[rstest]
fn flags_carry_no_value(command: Command) {
    let matches = command.clone().get_matches_from(["app", "--verbose"]);
    let cli = ClapOptions::new(&command, &matches);
    assert_eq!(cli.detected_options(), ["verbose"]);
    assert_eq!(cli.option_value("verbose"), None);
}

#[rstest]
fn flags_write_the_option_default(command: Command) {
    let matches = command.clone().get_matches_from(["app", "--verbose"]);
    let chain = OverrideComposer::new()
        .option(
            OptionMetadata::new("verbose")
                .with_config_path("log.level")
                .with_default_value("debug"),
        )
        .compose(&ClapOptions::new(&command, &matches));
    let out = chain
        .apply(Node::from(json!({"log": {"level": "info"}})), &FormatParser)
        .map_err(|err| err.to_string());
    assert_eq!(out, Ok(Node::from(json!({"log": {"level": "debug"}}))));
}

#[test]
fn metadata_builder_records_path_and_default() {
    let meta = OptionMetadata::new("port")
        .with_config_path("server.port")
        .with_default_value("80");
    assert_eq!(meta.name(), "port");
    assert_eq!(meta.config_path(), Some("server.port"));
    assert_eq!(meta.default_value(), Some("80"));
    assert_eq!(OptionMetadata::new("x").config_path(), None);
}

#[test]
fn decorator_exposes_option_and_location() {
    let decorator = OptionDecorator::new("prod", SourceLocation::file("prod.yml"));
    assert_eq!(decorator.option(), "prod");
    assert_eq!(decorator.location(), &SourceLocation::file("prod.yml"));
}

#[test]
fn unit_has_no_options() {
    assert!(().detected_options().is_empty());
    assert_eq!(().option_value("any"), None);
}
