mod check;
mod common;
mod config;
mod help;
mod overrides;
mod packages;

use anyhow::Result;

use crate::cli::{CliArgs, CommandKind};

pub fn dispatch(args: &CliArgs) -> Result<()> {
    match &args.command {
        CommandKind::Help { command } => help::run(command.as_deref()),
        CommandKind::Check => check::run(args),
        CommandKind::Packages => packages::run(args),
        CommandKind::Overrides(cmd) => overrides::run(args, cmd),
        CommandKind::Config => config::run(args),
    }
}
