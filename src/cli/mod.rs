mod args;

pub use args::{CliArgs, CommandKind, OutputFlags, OverridesArgs, build_cli, parse_from};

pub fn parse() -> CliArgs {
    args::parse_args()
}
