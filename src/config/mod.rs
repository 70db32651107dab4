mod column;
mod combine;
mod env;
mod error;
mod loader;
mod overrides;
mod schema;
mod settings;
mod type_ref;
mod validate;

pub use column::{ColumnSpec, ColumnSpecError, DEFAULT_SCHEMA, TableRef};
pub use combine::{CombinedSettings, combine};
pub use env::Env;
pub use error::ConfigError;
pub use loader::{
    Format, LoadOptions, LoadedConfig, decode, load_config, load_config_file, parse_config,
    resolve_config_path,
};
pub use overrides::{DEPRECATED_POSTGRES_TYPE, Diagnostics, TracingDiagnostics, normalize_override};
pub use schema::{ConfigFile, Engine, OverrideConfig, PackageConfig};
pub use settings::{Override, OverrideTarget, PackageSettings, Settings};
pub use type_ref::{BUILTIN_TYPES, GoType, TypeRefError};
pub use validate::{SUPPORTED_VERSION, engines_in_use, validate};

pub fn load_from_system(
    config_path: Option<&std::path::Path>,
    diagnostics: &mut dyn Diagnostics,
) -> anyhow::Result<LoadedConfig> {
    let options = LoadOptions {
        config_path: config_path.map(|path| path.to_path_buf()),
        cwd: std::env::current_dir()?,
    };
    let env = Env::from_system();
    load_config(&options, &env, diagnostics)
}
