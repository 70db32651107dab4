use std::fmt;

use thiserror::Error;

pub const DEFAULT_SCHEMA: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnSpecError {
    #[error(
        "override `column` specifier {0:?} is not the proper format, expected '[catalog.][schema.]table.column'"
    )]
    WrongSegmentCount(String),
}

/// Fully qualified relation name. No existence check is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub catalog: Option<String>,
    pub schema: String,
    pub name: String,
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(catalog) = &self.catalog {
            write!(f, "{}.", catalog)?;
        }
        write!(f, "{}.{}", self.schema, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub table: TableRef,
    pub column: String,
}

impl ColumnSpec {
    pub fn parse(input: &str) -> Result<Self, ColumnSpecError> {
        let parts: Vec<&str> = input.split('.').collect();
        let (catalog, schema, table, column) = match parts.as_slice() {
            [table, column] => (None, DEFAULT_SCHEMA, *table, *column),
            [schema, table, column] => (None, *schema, *table, *column),
            [catalog, schema, table, column] => (Some(*catalog), *schema, *table, *column),
            _ => return Err(ColumnSpecError::WrongSegmentCount(input.to_string())),
        };
        Ok(Self {
            table: TableRef {
                catalog: catalog.map(str::to_string),
                schema: schema.to_string(),
                name: table.to_string(),
            },
            column: column.to_string(),
        })
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}
