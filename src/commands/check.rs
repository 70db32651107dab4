use std::io::{self, Write};

use anyhow::Result;

use crate::cli::CliArgs;
use crate::commands::common;
use crate::output::{OutputFormat, TableOptions, json, table};

pub fn run(args: &CliArgs) -> Result<()> {
    let loaded = common::load_config(args)?;
    let settings = &loaded.settings;
    let package_overrides: usize = settings.packages.iter().map(|p| p.overrides.len()).sum();

    if args.quiet {
        return Ok(());
    }

    match common::output_format(args) {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "ok": true,
                "configPath": loaded.path.display().to_string(),
                "version": settings.version,
                "packages": settings.packages.len(),
                "globalOverrides": settings.overrides.len(),
                "packageOverrides": package_overrides,
            });
            println!("{}", json::emit_json_value(&payload, true)?);
        }
        format => {
            let rows = vec![
                ("configPath".to_string(), loaded.path.display().to_string()),
                ("version".to_string(), settings.version.clone()),
                ("packages".to_string(), settings.packages.len().to_string()),
                (
                    "globalOverrides".to_string(),
                    settings.overrides.len().to_string(),
                ),
                ("packageOverrides".to_string(), package_overrides.to_string()),
                ("renames".to_string(), settings.rename.len().to_string()),
            ];
            let rendered =
                table::render_key_value_table("Config", &rows, format, &TableOptions::default());
            writeln!(io::stdout(), "{}", rendered)?;
        }
    }

    Ok(())
}
