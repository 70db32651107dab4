use std::io::{self, Write};

use anyhow::Result;

use crate::cli::{CliArgs, OverridesArgs};
use crate::commands::common;
use crate::config::{self, Override};
use crate::error::{AppError, ErrorKind};
use crate::output::{OutputFormat, TableOptions, json, table};

const HEADERS: &[&str] = &["scope", "target", "goType", "package", "engine", "null"];

pub fn run(args: &CliArgs, cmd: &OverridesArgs) -> Result<()> {
    let loaded = common::load_config(args)?;
    let settings = &loaded.settings;

    // Without a package only the global overrides are shown.
    let (rows, payload) = match cmd.package.as_deref() {
        Some(name) => {
            let pkg = settings.package(name).ok_or_else(|| {
                AppError::new(ErrorKind::Usage, format!("Unknown package: {}", name))
            })?;
            let combined = config::combine(settings, pkg);
            let global_count = settings.overrides.len();
            let rows = combined
                .overrides
                .iter()
                .enumerate()
                .map(|(idx, oride)| {
                    let scope = if idx < global_count { "global" } else { name };
                    override_row(scope, oride)
                })
                .collect::<Vec<_>>();
            (rows, json::combined_to_json(&combined))
        }
        None => {
            let rows = settings
                .overrides
                .iter()
                .map(|oride| override_row("global", oride))
                .collect::<Vec<_>>();
            let payload = serde_json::Value::Array(
                settings.overrides.iter().map(json::override_to_json).collect(),
            );
            (rows, payload)
        }
    };

    if args.quiet {
        return Ok(());
    }

    match common::output_format(args) {
        OutputFormat::Json => {
            println!("{}", json::emit_json_value(&payload, true)?);
        }
        format => {
            let rendered = table::render_table(HEADERS, &rows, format, &TableOptions::default());
            writeln!(io::stdout(), "{}", rendered)?;
        }
    }

    Ok(())
}

fn override_row(scope: &str, oride: &Override) -> Vec<String> {
    vec![
        scope.to_string(),
        oride.target_label().to_string(),
        oride.go_type.qualified_name().to_string(),
        oride.go_package().to_string(),
        oride
            .engine
            .map(|engine| engine.as_str().to_string())
            .unwrap_or_default(),
        common::yes_no(oride.nullable),
    ]
}
