use std::collections::BTreeSet;

use tracing::debug;

use super::error::{ConfigError, Result};
use super::overrides::{Diagnostics, normalize_override};
use super::schema::{ConfigFile, Engine, OverrideConfig, PackageConfig};
use super::settings::{Override, PackageSettings, Settings};

pub const SUPPORTED_VERSION: &str = "1";

/// Checks document invariants and normalizes every override.
///
/// The first failing check wins; a partially validated document is never
/// returned.
pub fn validate(config: ConfigFile, diagnostics: &mut dyn Diagnostics) -> Result<Settings> {
    let ConfigFile {
        version,
        packages,
        overrides,
        rename,
    } = config;

    if version.is_empty() {
        return Err(ConfigError::MissingVersion);
    }
    if version != SUPPORTED_VERSION {
        return Err(ConfigError::UnknownVersion { version });
    }
    if packages.is_empty() {
        return Err(ConfigError::NoPackages);
    }

    check_global_override_engines(&packages, &overrides)?;

    debug!(count = overrides.len(), "normalizing global overrides");
    let overrides = normalize_all(overrides, diagnostics)?;

    let packages = packages
        .into_iter()
        .enumerate()
        .map(|(index, pkg)| validate_package(index, pkg, diagnostics))
        .collect::<Result<Vec<_>>>()?;

    Ok(Settings {
        version,
        packages,
        overrides,
        rename,
    })
}

/// Engines in use, counting a package without one as the default engine.
pub fn engines_in_use(packages: &[PackageConfig]) -> BTreeSet<Engine> {
    packages
        .iter()
        .map(|pkg| pkg.engine.unwrap_or_default())
        .collect()
}

fn check_global_override_engines(
    packages: &[PackageConfig],
    overrides: &[OverrideConfig],
) -> Result<()> {
    let engines = engines_in_use(packages);
    if engines.len() <= 1 {
        return Ok(());
    }
    match overrides.iter().position(|oride| oride.engine.is_none()) {
        Some(index) => Err(ConfigError::EngineRequiredForGlobalOverride { index }),
        None => Ok(()),
    }
}

fn validate_package(
    index: usize,
    pkg: PackageConfig,
    diagnostics: &mut dyn Diagnostics,
) -> Result<PackageSettings> {
    if pkg.path.is_empty() {
        return Err(ConfigError::NoPackagePath { index });
    }

    debug!(path = %pkg.path, count = pkg.overrides.len(), "normalizing package overrides");
    let overrides = normalize_all(pkg.overrides, diagnostics)?;

    let name = if pkg.name.is_empty() {
        base_name(&pkg.path)
    } else {
        pkg.name
    };

    Ok(PackageSettings {
        name,
        engine: pkg.engine.unwrap_or_default(),
        path: pkg.path,
        schema: pkg.schema,
        queries: pkg.queries,
        emit_interface: pkg.emit_interface,
        emit_json_tags: pkg.emit_json_tags,
        emit_prepared_queries: pkg.emit_prepared_queries,
        overrides,
    })
}

fn normalize_all(
    overrides: Vec<OverrideConfig>,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<Override>> {
    overrides
        .into_iter()
        .map(|oride| normalize_override(oride, diagnostics))
        .collect()
}

// Last path element, ignoring trailing separators. `.` and `..` are kept as
// written rather than resolved, and a path made only of separators is `/`.
fn base_name(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    trimmed
        .rsplit('/')
        .next()
        .unwrap_or(trimmed)
        .to_string()
}
