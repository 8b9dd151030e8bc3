//! Class skeleton generation from SQLite schemas.
//!
//! # Intention
//!
//! - Inspect the catalog of a single SQLite database file.
//! - Render one table's columns as a flat class definition with field types
//!   and default values.
//!
//! # Architectural Boundaries
//!
//! - Only SQLite catalog access and text rendering belong here.
//! - Writing the generated definition to `output_path` is left to the caller.
//! - No ORM, migration or multi-database support.

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod inspector;
pub mod sqlite;

pub use builder::{ModelBuilder, ModelBuilderService};
pub use config::{ExclusionSet, ModelConfig};
pub use error::{ModelBuilderError, Result};
pub use generator::{FieldType, ModelGenerator, BUILTIN_EXCLUDED_COLUMNS};
pub use inspector::{ConnectionState, SchemaInspector, BUILTIN_EXCLUDED_TABLES};
pub use sqlite::ColumnInfo;
