use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

#[derive(Debug, Clone)]
pub struct OutputFlags {
    pub json: bool,
    pub markdown: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub output: OutputFlags,
    pub verbose: u8,
    pub quiet: bool,
    pub command: CommandKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Help { command: Option<String> },
    Check,
    Packages,
    Overrides(OverridesArgs),
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverridesArgs {
    pub package: Option<String>,
}

pub fn build_cli() -> Command {
    let mut cmd = Command::new("sqlgen")
        .about("Validate and inspect code generator configuration files")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .disable_help_subcommand(true)
        .subcommand_value_name("COMMAND");

    cmd = add_global_args(cmd);

    cmd = cmd.subcommand(command_help());
    cmd = cmd.subcommand(command_check());
    cmd = cmd.subcommand(command_packages());
    cmd = cmd.subcommand(command_overrides());
    cmd = cmd.subcommand(command_config());

    cmd
}

pub fn parse_args() -> CliArgs {
    let matches = build_cli().get_matches();
    parse_matches(&matches)
}

pub fn parse_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    Ok(parse_matches(&matches))
}

fn add_global_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("file")
            .short('f')
            .long("file")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .global(true)
            .help("Config file (default: SQLGEN_CONFIG, then sqlc.json/sqlc.yaml/sqlc.yml)"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Output as JSON"),
    )
    .arg(
        Arg::new("markdown")
            .long("markdown")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force markdown table output"),
    )
    .arg(
        Arg::new("pretty")
            .long("pretty")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force pretty-printed table output"),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true)
            .help("Enable debug logging"),
    )
    .arg(
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Suppress non-error output"),
    )
}

fn command_help() -> Command {
    Command::new("help")
        .about("Show help for commands")
        .arg(Arg::new("command").value_name("COMMAND"))
}

fn command_check() -> Command {
    Command::new("check").about("Validate the config file and summarize it")
}

fn command_packages() -> Command {
    Command::new("packages").about("List configured packages with defaults applied")
}

fn command_overrides() -> Command {
    Command::new("overrides")
        .about("Show type overrides, global first, then package-scoped")
        .arg(
            Arg::new("package")
                .long("package")
                .short('p')
                .value_name("NAME")
                .help("Combine global overrides with this package's overrides"),
        )
}

fn command_config() -> Command {
    Command::new("config").about("Print the normalized configuration as JSON")
}

fn parse_matches(matches: &ArgMatches) -> CliArgs {
    let config_path = matches.get_one::<String>("file").map(PathBuf::from);
    let output = OutputFlags {
        json: matches.get_flag("json"),
        markdown: matches.get_flag("markdown"),
        pretty: matches.get_flag("pretty"),
    };
    let verbose = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");

    let command = match matches.subcommand() {
        Some(("help", sub_m)) => CommandKind::Help {
            command: sub_m.get_one::<String>("command").cloned(),
        },
        Some(("check", _)) => CommandKind::Check,
        Some(("packages", _)) => CommandKind::Packages,
        Some(("overrides", sub_m)) => CommandKind::Overrides(OverridesArgs {
            package: sub_m.get_one::<String>("package").cloned(),
        }),
        Some(("config", _)) => CommandKind::Config,
        _ => CommandKind::Help { command: None },
    };

    CliArgs {
        config_path,
        output,
        verbose,
        quiet,
        command,
    }
}
