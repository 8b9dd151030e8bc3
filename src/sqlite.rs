use rusqlite::{types::Value, Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

use crate::error::{ModelBuilderError, Result};

const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name";

const TABLE_INFO: &str =
    "SELECT name, type, dflt_value FROM pragma_table_info(?1) ORDER BY cid";

/// Column metadata as reported by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub declared_type: String,
    pub default_value: Option<String>,
}

impl ColumnInfo {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        default_value: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            default_value,
        }
    }
}

/// Open the database at `path` read-only.
///
/// Fails with a connection error when the path is empty, does not exist, or
/// does not hold a SQLite database.
pub fn open(path: &str) -> Result<Connection> {
    if path.is_empty() {
        return Err(ModelBuilderError::connection("DatabasePath is empty", path));
    }
    if !Path::new(path).is_file() {
        return Err(ModelBuilderError::connection(
            "DatabasePath does not exist",
            path,
        ));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| ModelBuilderError::connection(e.to_string(), path))?;

    // sqlite defers reading the header until the first statement
    conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
        .map_err(|e| ModelBuilderError::connection(e.to_string(), path))?;

    debug!(path, "opened sqlite database");
    Ok(conn)
}

/// Names of all tables in the catalog, in name order.
///
/// Rows with a NULL or empty name are skipped.
pub fn table_names(conn: &Connection, path: &str) -> Result<Vec<String>> {
    let query = || -> rusqlite::Result<Vec<Option<String>>> {
        let mut stmt = conn.prepare(LIST_TABLES)?;
        let names = stmt.query_map([], |row| row.get(0))?.collect();
        names
    };
    let names = query().map_err(|e| ModelBuilderError::from_sqlite(e, path, "sqlite_master"))?;

    Ok(names
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty())
        .collect())
}

/// Columns of `table` in declaration order. A missing table has no columns.
pub fn table_columns(conn: &Connection, path: &str, table: &str) -> Result<Vec<ColumnInfo>> {
    let query = || -> rusqlite::Result<Vec<ColumnInfo>> {
        let mut stmt = conn.prepare(TABLE_INFO)?;
        let rows = stmt.query_map([table], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                declared_type: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                default_value: default_text(row.get(2)?),
            })
        })?;
        let columns = rows.collect();
        columns
    };
    query().map_err(|e| ModelBuilderError::from_sqlite(e, path, table))
}

/// Text form of a catalog default, `None` when absent or empty.
fn default_text(value: Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s,
        Value::Blob(b) => String::from_utf8_lossy(&b).into_owned(),
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_text() {
        assert_eq!(default_text(Value::Null), None);
        assert_eq!(default_text(Value::Text(String::new())), None);
        assert_eq!(default_text(Value::Text("'x'".into())), Some("'x'".into()));
        assert_eq!(default_text(Value::Integer(7)), Some("7".into()));
        assert_eq!(default_text(Value::Real(9.99)), Some("9.99".into()));
    }

    #[test]
    fn test_open_rejects_empty_path() {
        let err = open("").unwrap_err();
        assert!(err.is_connection());
        assert!(err.to_string().contains("DatabasePath is empty"));
    }

    #[test]
    fn test_open_rejects_missing_file() {
        let err = open("/definitely/not/here.db").unwrap_err();
        assert!(err.to_string().contains("DatabasePath does not exist"));
    }

    #[test]
    fn test_columns_of_in_memory_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE items (id INTEGER PRIMARY KEY, label TEXT DEFAULT 'none', data BLOB);",
        )
        .unwrap();

        let columns = table_columns(&conn, ":memory:", "items").unwrap();
        assert_eq!(
            columns,
            vec![
                ColumnInfo::new("id", "INTEGER", None),
                ColumnInfo::new("label", "TEXT", Some("'none'".into())),
                ColumnInfo::new("data", "BLOB", None),
            ]
        );
        assert!(table_columns(&conn, ":memory:", "missing").unwrap().is_empty());
        assert_eq!(table_names(&conn, ":memory:").unwrap(), vec!["items"]);
    }
}
