use serde::{Deserialize, Deserializer, Serialize, de};
use std::collections::BTreeMap;

/// The document as written. Missing fields decode to their empty value;
/// defaults are applied during validation.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub packages: Vec<PackageConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub overrides: Vec<OverrideConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub rename: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "engine_or_unset")]
    pub engine: Option<Engine>,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub schema: String,
    #[serde(deserialize_with = "null_as_default")]
    pub queries: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emit_interface: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub emit_json_tags: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub emit_prepared_queries: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub overrides: Vec<OverrideConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct OverrideConfig {
    /// Go type to generate, e.g. `github.com/segmentio/ksuid.KSUID`.
    #[serde(deserialize_with = "null_as_default")]
    pub go_type: String,
    /// Database type the override applies to.
    #[serde(deserialize_with = "null_as_default")]
    pub db_type: String,
    /// Deprecated spelling of `db_type`.
    #[serde(deserialize_with = "null_as_default")]
    pub postgres_type: String,
    /// Required on global overrides when packages use different engines.
    #[serde(deserialize_with = "engine_or_unset")]
    pub engine: Option<Engine>,
    /// Apply when the matching column is nullable.
    #[serde(deserialize_with = "null_as_default")]
    pub null: bool,
    /// `[catalog.][schema.]table.column`
    #[serde(deserialize_with = "null_as_default")]
    pub column: String,
}

/// Packages without an engine are treated as PostgreSQL.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub enum Engine {
    #[default]
    #[serde(rename = "postgresql")]
    PostgreSql,
    #[serde(rename = "mysql")]
    MySql,
}

impl Engine {
    const NAMES: &'static [&'static str] = &["postgresql", "mysql"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "postgresql" => Some(Engine::PostgreSql),
            "mysql" => Some(Engine::MySql),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::PostgreSql => "postgresql",
            Engine::MySql => "mysql",
        }
    }
}

// An explicit `null` reads as the field's empty value, the same as leaving
// the field out.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// `""` and `null` both mean "no engine".
fn engine_or_unset<'de, D>(deserializer: D) -> Result<Option<Engine>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(name) => Engine::from_name(name)
            .map(Some)
            .ok_or_else(|| de::Error::unknown_variant(name, Engine::NAMES)),
    }
}
