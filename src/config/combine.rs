use super::column::TableRef;
use super::settings::{Override, PackageSettings, Settings};

/// Settings seen from one package: global overrides first, then the
/// package's own, each group in document order.
#[derive(Debug, Clone)]
pub struct CombinedSettings<'a> {
    pub global: &'a Settings,
    pub package: &'a PackageSettings,
    pub overrides: Vec<&'a Override>,
}

pub fn combine<'a>(global: &'a Settings, package: &'a PackageSettings) -> CombinedSettings<'a> {
    let overrides = global
        .overrides
        .iter()
        .chain(package.overrides.iter())
        .collect();
    CombinedSettings {
        global,
        package,
        overrides,
    }
}

impl<'a> CombinedSettings<'a> {
    /// Overrides that apply to this package's engine. Global overrides scoped
    /// to a different engine are skipped.
    pub fn applicable_overrides(&self) -> impl Iterator<Item = &'a Override> + '_ {
        let engine = self.package.engine;
        self.overrides
            .iter()
            .copied()
            .filter(move |oride| oride.engine.is_none_or(|scoped| scoped == engine))
    }

    /// Later matches win, so a package override shadows a global one.
    pub fn column_override(&self, table: &TableRef, column: &str) -> Option<&'a Override> {
        self.applicable_overrides()
            .filter(|oride| oride.table() == Some(table) && oride.column_name() == Some(column))
            .last()
    }

    pub fn db_type_override(&self, db_type: &str, nullable: bool) -> Option<&'a Override> {
        self.applicable_overrides()
            .filter(|oride| oride.db_type() == Some(db_type) && oride.nullable == nullable)
            .last()
    }

    /// Identifier renames declared at the top level of the document.
    pub fn rename(&self, name: &str) -> Option<&'a str> {
        self.global.rename.get(name).map(String::as_str)
    }
}
