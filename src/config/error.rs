use std::path::PathBuf;

use thiserror::Error;

use super::column::ColumnSpecError;
use super::loader::Format;
use super::type_ref::TypeRefError;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Decoding
    #[error("unrecognized field `{field}` in configuration")]
    UnrecognizedField { field: String },

    #[error("failed to parse {format} config: {message}")]
    Malformed { format: Format, message: String },

    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Document
    #[error(
        "the configuration file must have a version number; set \"version\": \"1\" at the top of the file"
    )]
    MissingVersion,

    #[error("invalid version number {version:?}; the only supported version is \"1\"")]
    UnknownVersion { version: String },

    #[error("no packages are configured")]
    NoPackages,

    #[error("package #{index} is missing a path")]
    NoPackagePath { index: usize },

    // Overrides
    #[error("override cannot set both `{first}` ({first_value:?}) and `{second}` ({second_value:?})")]
    ConflictingOverrideFields {
        first: &'static str,
        first_value: String,
        second: &'static str,
        second_value: String,
    },

    #[error("override must specify one of either `column` or `db_type`")]
    IncompleteOverride,

    #[error(transparent)]
    InvalidColumnSpecifier(#[from] ColumnSpecError),

    #[error(transparent)]
    InvalidTypeReference(#[from] TypeRefError),

    #[error(
        "the \"engine\" field is required for global type override #{index} because the configuration uses multiple database engines"
    )]
    EngineRequiredForGlobalOverride { index: usize },
}
