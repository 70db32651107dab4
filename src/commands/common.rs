use anyhow::Result;

use crate::cli::CliArgs;
use crate::config::{self, LoadedConfig, TracingDiagnostics};
use crate::error::{AppError, ErrorKind};
use crate::output::{self, OutputFormat};

pub fn load_config(args: &CliArgs) -> Result<LoadedConfig> {
    let mut diagnostics = TracingDiagnostics;
    config::load_from_system(args.config_path.as_deref(), &mut diagnostics)
        .map_err(|err| AppError::new(ErrorKind::Config, format!("{:#}", err)).into())
}

pub fn output_format(args: &CliArgs) -> OutputFormat {
    output::select_format(&args.output)
}

pub fn yes_no(value: bool) -> String {
    let label = if value { "yes" } else { "no" };
    label.to_string()
}
