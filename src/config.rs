use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Model generation configuration.
///
/// The exclusion lists are kept in their external comma-separated form and
/// expanded into an [`ExclusionSet`] at the start of each operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelConfig {
    /// Name of the generated class
    pub name: String,
    /// Path to the SQLite database file
    pub database_path: String,
    /// Destination of the generated definition, written by the caller
    pub output_path: String,
    /// Comma-separated column names to leave out of the generated class
    pub excluded_columns: String,
    /// Comma-separated table names to leave out of table listings
    pub excluded_tables: String,
    /// Output of the last successful generation
    pub generated_definition: String,
}

impl ModelConfig {
    /// Create a config for the class `name` backed by the database at `database_path`
    pub fn new(name: impl Into<String>, database_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database_path: database_path.into(),
            ..Self::default()
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_excluded_columns(mut self, excluded_columns: impl Into<String>) -> Self {
        self.excluded_columns = excluded_columns.into();
        self
    }

    pub fn with_excluded_tables(mut self, excluded_tables: impl Into<String>) -> Self {
        self.excluded_tables = excluded_tables.into();
        self
    }
}

/// Union of caller-supplied and built-in names, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Parse a comma-separated list and merge it with `builtins`.
    ///
    /// Entries are trimmed and empty entries are dropped.
    pub fn parse(csv: &str, builtins: &[&str]) -> Self {
        let names = csv
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .chain(builtins.iter().copied())
            .map(str::to_lowercase)
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[], 0)]
    #[case("Foo", &[], 1)]
    #[case("Foo, Bar ,,", &[], 2)]
    #[case("Foo", &["Foo", "Baz"], 2)]
    #[case(" , ", &["GCRecord"], 1)]
    fn test_parse_exclusions(#[case] csv: &str, #[case] builtins: &[&str], #[case] len: usize) {
        assert_eq!(ExclusionSet::parse(csv, builtins).len(), len);
    }

    #[test]
    fn test_contains_ignores_case() {
        let set = ExclusionSet::parse("createdAt", &["GCRecord"]);
        assert!(set.contains("CreatedAt"));
        assert!(set.contains("CREATEDAT"));
        assert!(set.contains("gcrecord"));
        assert!(!set.contains("Id"));
    }

    #[test]
    fn test_empty_name_never_listed() {
        let set = ExclusionSet::parse(",,", &[]);
        assert!(set.is_empty());
        assert!(!set.contains(""));
    }

    #[test]
    fn test_config_builder() {
        let config = ModelConfig::new("User", "/tmp/app.db")
            .with_output_path("User.cs")
            .with_excluded_columns("Password")
            .with_excluded_tables("Audit");
        assert_eq!(config.name, "User");
        assert_eq!(config.database_path, "/tmp/app.db");
        assert_eq!(config.output_path, "User.cs");
        assert_eq!(config.excluded_columns, "Password");
        assert_eq!(config.excluded_tables, "Audit");
        assert!(config.generated_definition.is_empty());
    }

    #[test]
    fn test_config_deserializes_camel_case_with_defaults() {
        let config: ModelConfig = serde_json::from_str(
            r#"{ "name": "User", "databasePath": "app.db", "excludedColumns": "Password,Salt" }"#,
        )
        .unwrap();
        assert_eq!(config.name, "User");
        assert_eq!(config.database_path, "app.db");
        assert_eq!(config.excluded_columns, "Password,Salt");
        assert_eq!(config.excluded_tables, "");
        assert_eq!(config.output_path, "");
    }
}
