use anyhow::Result;

use crate::cli::CliArgs;
use crate::commands::common;
use crate::output::json;

pub fn run(args: &CliArgs) -> Result<()> {
    let loaded = common::load_config(args)?;

    if args.quiet {
        return Ok(());
    }

    let payload = json::settings_to_json(&loaded.settings);
    println!("{}", json::emit_json_value(&payload, true)?);
    Ok(())
}
