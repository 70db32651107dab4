use std::io::{self, Write};

use anyhow::Result;

use crate::cli::CliArgs;
use crate::commands::common;
use crate::output::{OutputFormat, TableOptions, json, table};

const HEADERS: &[&str] = &[
    "name",
    "engine",
    "path",
    "schema",
    "queries",
    "interface",
    "jsonTags",
    "prepared",
    "overrides",
];

pub fn run(args: &CliArgs) -> Result<()> {
    let loaded = common::load_config(args)?;
    let packages = &loaded.settings.packages;

    if args.quiet {
        return Ok(());
    }

    match common::output_format(args) {
        OutputFormat::Json => {
            let payload =
                serde_json::Value::Array(packages.iter().map(json::package_to_json).collect());
            println!("{}", json::emit_json_value(&payload, true)?);
        }
        format => {
            let rows = packages
                .iter()
                .map(|pkg| {
                    vec![
                        pkg.name.clone(),
                        pkg.engine.as_str().to_string(),
                        pkg.path.clone(),
                        pkg.schema.clone(),
                        pkg.queries.clone(),
                        common::yes_no(pkg.emit_interface),
                        common::yes_no(pkg.emit_json_tags),
                        common::yes_no(pkg.emit_prepared_queries),
                        pkg.overrides.len().to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            let rendered = table::render_table(HEADERS, &rows, format, &TableOptions::default());
            writeln!(io::stdout(), "{}", rendered)?;
        }
    }

    Ok(())
}
