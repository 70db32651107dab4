use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::debug;

use super::env::Env;
use super::error::{self, ConfigError};
use super::overrides::Diagnostics;
use super::schema::ConfigFile;
use super::settings::Settings;
use super::validate::validate;

const CONFIG_ENV_VAR: &str = "SQLGEN_CONFIG";
const LOCAL_CANDIDATES: &[&str] = &["sqlc.json", "sqlc.yaml", "sqlc.yml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Format::Json),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub cwd: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub settings: Settings,
}

/// Strict decode: any field the schema does not know fails the document.
pub fn decode(bytes: &[u8], format: Format) -> error::Result<ConfigFile> {
    let decoded: std::result::Result<ConfigFile, String> = match format {
        Format::Json => serde_json::from_slice(bytes).map_err(|err| err.to_string()),
        Format::Yaml => serde_yaml::from_slice(bytes).map_err(|err| err.to_string()),
    };
    decoded.map_err(|message| classify_decode_error(format, message))
}

pub fn parse_config(
    bytes: &[u8],
    format: Format,
    diagnostics: &mut dyn Diagnostics,
) -> error::Result<Settings> {
    let config = decode(bytes, format)?;
    validate(config, diagnostics)
}

pub fn load_config_file(path: &Path, diagnostics: &mut dyn Diagnostics) -> Result<Settings> {
    let format = Format::from_path(path)
        .ok_or_else(|| anyhow!("Unsupported config file extension: {}", path.display()))?;
    let bytes = fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), format = %format, "parsing config");
    Ok(parse_config(&bytes, format, diagnostics)?)
}

pub fn load_config(
    options: &LoadOptions,
    env: &Env,
    diagnostics: &mut dyn Diagnostics,
) -> Result<LoadedConfig> {
    let path = resolve_config_path(options, env)?;
    let settings = load_config_file(&path, diagnostics)?;
    Ok(LoadedConfig { path, settings })
}

pub fn resolve_config_path(options: &LoadOptions, env: &Env) -> Result<PathBuf> {
    if let Some(path) = &options.config_path {
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
        return Ok(path.clone());
    }

    if let Some(path) = env.non_empty(CONFIG_ENV_VAR) {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
        return Ok(path);
    }

    find_local_config(&options.cwd).ok_or_else(|| {
        anyhow!(
            "No config file found in {} (looked for {})",
            options.cwd.display(),
            LOCAL_CANDIDATES.join(", ")
        )
    })
}

fn find_local_config(dir: &Path) -> Option<PathBuf> {
    LOCAL_CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.is_file())
}

// serde reports unknown fields as "unknown field `name`, expected ...".
// serde_yaml prefixes the message with the field path ("packages[0]: ...").
// Anything else that merely echoes the marker (a mistyped string value,
// say) stays a syntax-level failure.
fn classify_decode_error(format: Format, message: String) -> ConfigError {
    const MARKER: &str = "unknown field `";
    let rest = message.strip_prefix(MARKER).or_else(|| {
        let (path, rest) = message.split_once(": ")?;
        if path.is_empty() || path.contains(char::is_whitespace) {
            return None;
        }
        rest.strip_prefix(MARKER)
    });
    if let Some(field) = rest.and_then(|rest| rest.split_once('`')).map(|(field, _)| field) {
        return ConfigError::UnrecognizedField {
            field: field.to_string(),
        };
    }
    ConfigError::Malformed { format, message }
}
