use serde_json::json;

use crate::config::{CombinedSettings, Override, OverrideTarget, PackageSettings, Settings};

pub fn emit_json_value(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn error_json(message: &str, kind: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "kind": kind,
        }
    })
}

pub fn settings_to_json(settings: &Settings) -> serde_json::Value {
    json!({
        "version": settings.version,
        "packages": settings.packages.iter().map(package_to_json).collect::<Vec<_>>(),
        "overrides": settings.overrides.iter().map(override_to_json).collect::<Vec<_>>(),
        "rename": settings.rename,
    })
}

pub fn package_to_json(pkg: &PackageSettings) -> serde_json::Value {
    json!({
        "name": pkg.name,
        "engine": pkg.engine.as_str(),
        "path": pkg.path,
        "schema": pkg.schema,
        "queries": pkg.queries,
        "emitInterface": pkg.emit_interface,
        "emitJsonTags": pkg.emit_json_tags,
        "emitPreparedQueries": pkg.emit_prepared_queries,
        "overrides": pkg.overrides.iter().map(override_to_json).collect::<Vec<_>>(),
    })
}

pub fn override_to_json(oride: &Override) -> serde_json::Value {
    let target = match &oride.target {
        OverrideTarget::Column { raw, spec } => json!({
            "column": raw,
            "catalog": spec.table.catalog,
            "schema": spec.table.schema,
            "table": spec.table.name,
            "columnName": spec.column,
        }),
        OverrideTarget::DbType(db_type) => json!({ "dbType": db_type }),
    };
    json!({
        "goType": oride.go_type.raw(),
        "goTypeName": oride.go_type.type_name(),
        "goQualifiedName": oride.go_type.qualified_name(),
        "goPackage": oride.go_type.package(),
        "goBasicType": oride.go_type.is_builtin(),
        "pointer": oride.go_type.is_pointer(),
        "engine": oride.engine.map(|engine| engine.as_str()),
        "nullable": oride.nullable,
        "target": target,
    })
}

pub fn combined_to_json(combined: &CombinedSettings<'_>) -> serde_json::Value {
    json!({
        "package": combined.package.name,
        "engine": combined.package.engine.as_str(),
        "overrides": combined
            .overrides
            .iter()
            .map(|oride| override_to_json(oride))
            .collect::<Vec<_>>(),
    })
}
