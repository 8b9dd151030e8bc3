use tracing::{debug, info, warn};

use crate::config::{ExclusionSet, ModelConfig};
use crate::error::Result;
use crate::sqlite;

/// Bookkeeping tables that are never listed.
pub const BUILTIN_EXCLUDED_TABLES: &[&str] = &[
    "XPObjectType",
    "XPWeakReference",
    "XPWeakReferenceType",
    "XPWeakReferenceValue",
];

/// Prefix reserved by SQLite for its internal tables
const SQLITE_INTERNAL_PREFIX: &str = "sqlite_";

/// Result of the last connectivity check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    NotInitialized,
    Connected,
    Failed,
}

/// Lists tables and tracks connectivity for a database file.
#[derive(Debug, Default)]
pub struct SchemaInspector {
    state: ConnectionState,
}

impl SchemaInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// List the tables of `config.database_path` that are not excluded.
    pub fn list_tables(&self, config: &ModelConfig) -> Result<Vec<String>> {
        let excluded = ExclusionSet::parse(&config.excluded_tables, BUILTIN_EXCLUDED_TABLES);

        let names = {
            let conn = sqlite::open(&config.database_path)?;
            sqlite::table_names(&conn, &config.database_path)?
        };

        let tables: Vec<String> = names
            .into_iter()
            .filter(|name| {
                let skip = is_internal(name) || excluded.contains(name);
                if skip {
                    debug!(table = %name, "skipping excluded table");
                }
                !skip
            })
            .collect();

        info!(
            path = %config.database_path,
            count = tables.len(),
            "listed tables"
        );
        Ok(tables)
    }

    /// Open the database and list its tables, recording the outcome.
    ///
    /// Never fails; any error is reported as `false` and
    /// [`ConnectionState::Failed`].
    pub fn check_connection(&mut self, config: &ModelConfig) -> bool {
        match self.list_tables(config) {
            Ok(_) => {
                self.state = ConnectionState::Connected;
                true
            }
            Err(e) => {
                warn!(path = %config.database_path, error = %e, "connection check failed");
                self.state = ConnectionState::Failed;
                false
            }
        }
    }
}

fn is_internal(name: &str) -> bool {
    name.get(..SQLITE_INTERNAL_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SQLITE_INTERNAL_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_tables() {
        assert!(is_internal("sqlite_sequence"));
        assert!(is_internal("SQLITE_stat1"));
        assert!(!is_internal("sqlite"));
        assert!(!is_internal("users"));
        assert!(!is_internal("ééééé"));
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(SchemaInspector::new().state(), ConnectionState::NotInitialized);
    }

    #[test]
    fn test_check_connection_with_empty_path_fails() {
        let mut inspector = SchemaInspector::new();
        assert!(!inspector.check_connection(&ModelConfig::default()));
        assert_eq!(inspector.state(), ConnectionState::Failed);
    }
}
