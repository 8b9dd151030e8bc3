//! Rendering of a table's columns as a class definition.
//!
//! Declared SQLite types are mapped onto the primitives of the output class
//! through [`FieldType::from_declared`]. Default values from the catalog are
//! appended as initializers exactly as stored.

use std::fmt::Write;
use tracing::{debug, info};

use crate::config::{ExclusionSet, ModelConfig};
use crate::error::Result;
use crate::sqlite::{self, ColumnInfo};

/// Engine bookkeeping columns that are never emitted.
pub const BUILTIN_EXCLUDED_COLUMNS: &[&str] = &["OptimisticLockField", "GCRecord"];

const INDENT: &str = "    ";

/// How a catalog default is written as an initializer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultLiteral {
    /// Emitted verbatim
    Raw,
    /// Wrapped in double quotes without escaping
    Quoted,
    /// Never emitted
    Omitted,
}

/// Output type of a generated field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    String,
    Float,
    Bytes,
    Boolean,
    /// Unrecognized declared type, passed through unchanged
    Other(String),
}

/// Exact matches on the upper-cased declared type.
const EXACT_TYPES: &[(&str, FieldType)] = &[
    ("INTEGER", FieldType::Integer),
    ("INT", FieldType::Integer),
    ("TEXT", FieldType::String),
    ("REAL", FieldType::Float),
    ("BLOB", FieldType::Bytes),
    ("BIT", FieldType::Boolean),
];

impl FieldType {
    /// Map a declared column type, ignoring case.
    pub fn from_declared(declared_type: &str) -> Self {
        let normalized = declared_type.to_uppercase();
        if let Some((_, ty)) = EXACT_TYPES.iter().find(|(name, _)| *name == normalized) {
            return ty.clone();
        }
        if normalized.contains("VARCHAR") {
            return FieldType::String;
        }
        FieldType::Other(declared_type.to_string())
    }

    pub fn type_name(&self) -> &str {
        match self {
            FieldType::Integer => "int",
            FieldType::String => "string",
            FieldType::Float => "double",
            FieldType::Bytes => "byte[]",
            FieldType::Boolean => "bool",
            FieldType::Other(name) => name,
        }
    }

    pub fn default_literal(&self) -> DefaultLiteral {
        match self {
            FieldType::String => DefaultLiteral::Quoted,
            FieldType::Bytes => DefaultLiteral::Omitted,
            _ => DefaultLiteral::Raw,
        }
    }
}

/// Generates class definitions from table metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelGenerator;

impl ModelGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the definition for `table_name` and store it in
    /// `config.generated_definition`.
    ///
    /// A table that does not exist produces a class with an empty body.
    pub fn generate<'a>(
        &self,
        config: &'a mut ModelConfig,
        table_name: &str,
    ) -> Result<&'a ModelConfig> {
        let excluded = ExclusionSet::parse(&config.excluded_columns, BUILTIN_EXCLUDED_COLUMNS);

        let columns = {
            let conn = sqlite::open(&config.database_path)?;
            sqlite::table_columns(&conn, &config.database_path, table_name)?
        };

        let definition = self.render(&config.name, &columns, &excluded);
        info!(
            table = table_name,
            class = %config.name,
            columns = columns.len(),
            "generated model definition"
        );
        config.generated_definition = definition;
        Ok(config)
    }

    /// Render the class body for `columns`, skipping excluded names.
    pub fn render(
        &self,
        class_name: &str,
        columns: &[ColumnInfo],
        excluded: &ExclusionSet,
    ) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "public class {class_name}");
        let _ = writeln!(out, "{{");
        for column in columns {
            if excluded.contains(&column.name) {
                debug!(column = %column.name, "skipping excluded column");
                continue;
            }
            let _ = writeln!(out, "{}", field_line(column));
        }
        let _ = writeln!(out, "}}");
        out
    }
}

/// Single property declaration for `column`.
fn field_line(column: &ColumnInfo) -> String {
    let ty = FieldType::from_declared(&column.declared_type);
    let mut line = format!(
        "{INDENT}public {} {} {{ get; set; }}",
        ty.type_name(),
        column.name
    );

    let default = column.default_value.as_deref().filter(|v| !v.is_empty());
    match (ty.default_literal(), default) {
        (DefaultLiteral::Raw, Some(value)) => {
            let _ = write!(line, " = {value};");
        }
        (DefaultLiteral::Quoted, Some(value)) => {
            let _ = write!(line, " = \"{value}\";");
        }
        _ => {}
    }
    line
}
