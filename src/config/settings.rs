use std::collections::BTreeMap;

use super::column::{ColumnSpec, TableRef};
use super::schema::Engine;
use super::type_ref::GoType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub version: String,
    pub packages: Vec<PackageSettings>,
    pub overrides: Vec<Override>,
    pub rename: BTreeMap<String, String>,
}

impl Settings {
    pub fn package(&self, name: &str) -> Option<&PackageSettings> {
        self.packages.iter().find(|pkg| pkg.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    pub name: String,
    pub engine: Engine,
    pub path: String,
    pub schema: String,
    pub queries: String,
    pub emit_interface: bool,
    pub emit_json_tags: bool,
    pub emit_prepared_queries: bool,
    pub overrides: Vec<Override>,
}

/// What an override matches on: one column, or every column of a database type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideTarget {
    Column { raw: String, spec: ColumnSpec },
    DbType(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub go_type: GoType,
    pub target: OverrideTarget,
    pub engine: Option<Engine>,
    pub nullable: bool,
}

impl Override {
    pub fn column(&self) -> Option<&ColumnSpec> {
        match &self.target {
            OverrideTarget::Column { spec, .. } => Some(spec),
            OverrideTarget::DbType(_) => None,
        }
    }

    pub fn column_name(&self) -> Option<&str> {
        self.column().map(|spec| spec.column.as_str())
    }

    pub fn table(&self) -> Option<&TableRef> {
        self.column().map(|spec| &spec.table)
    }

    pub fn db_type(&self) -> Option<&str> {
        match &self.target {
            OverrideTarget::DbType(db_type) => Some(db_type),
            OverrideTarget::Column { .. } => None,
        }
    }

    pub fn go_type_name(&self) -> &str {
        self.go_type.type_name()
    }

    pub fn go_package(&self) -> &str {
        self.go_type.package()
    }

    pub fn is_builtin(&self) -> bool {
        self.go_type.is_builtin()
    }

    /// The raw `column` or `db_type` string the override was declared with.
    pub fn target_label(&self) -> &str {
        match &self.target {
            OverrideTarget::Column { raw, .. } => raw,
            OverrideTarget::DbType(db_type) => db_type,
        }
    }
}
