use tracing::warn;

use super::column::ColumnSpec;
use super::error::{ConfigError, Result};
use super::schema::OverrideConfig;
use super::settings::{Override, OverrideTarget};
use super::type_ref::GoType;

pub const DEPRECATED_POSTGRES_TYPE: &str =
    "\"postgres_type\" is deprecated. Instead, use \"db_type\" to specify a type override.";

/// Receives non-fatal findings raised while normalizing a document.
pub trait Diagnostics {
    fn warn(&mut self, message: &str);
}

/// Forwards warnings to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&mut self, message: &str) {
        warn!("{}", message);
    }
}

impl Diagnostics for Vec<String> {
    fn warn(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

pub fn normalize_override(
    raw: OverrideConfig,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Override> {
    let OverrideConfig {
        go_type,
        mut db_type,
        postgres_type,
        engine,
        null,
        column,
    } = raw;

    if !postgres_type.is_empty() {
        diagnostics.warn(DEPRECATED_POSTGRES_TYPE);
        if !db_type.is_empty() {
            return Err(ConfigError::ConflictingOverrideFields {
                first: "db_type",
                first_value: db_type,
                second: "postgres_type",
                second_value: postgres_type,
            });
        }
        db_type = postgres_type;
    }

    let target = match (column.is_empty(), db_type.is_empty()) {
        (false, false) => {
            return Err(ConfigError::ConflictingOverrideFields {
                first: "column",
                first_value: column,
                second: "db_type",
                second_value: db_type,
            });
        }
        (true, true) => return Err(ConfigError::IncompleteOverride),
        (false, true) => {
            let spec = ColumnSpec::parse(&column)?;
            OverrideTarget::Column { raw: column, spec }
        }
        (true, false) => OverrideTarget::DbType(db_type),
    };

    let go_type = GoType::parse(&go_type)?;

    Ok(Override {
        go_type,
        target,
        engine,
        nullable: null,
    })
}
