use crate::config::ModelConfig;
use crate::error::Result;
use crate::generator::ModelGenerator;
use crate::inspector::{ConnectionState, SchemaInspector};

/// Operations available on a configured model builder.
pub trait ModelBuilder {
    fn model(&self) -> &ModelConfig;

    fn model_mut(&mut self) -> &mut ModelConfig;

    /// Generate the class for `table_name` into the model's `generated_definition`.
    fn generate_model(&mut self, table_name: &str) -> Result<&ModelConfig>;

    /// Tables available for generation.
    fn tables(&self) -> Result<Vec<String>>;

    /// Check that the database can be opened and listed.
    fn check_connection(&mut self) -> bool;

    fn connection_state(&self) -> ConnectionState;
}

/// Model builder backed by a SQLite database file
#[derive(Debug, Default)]
pub struct ModelBuilderService {
    model: ModelConfig,
    inspector: SchemaInspector,
    generator: ModelGenerator,
}

impl ModelBuilderService {
    /// Create a new builder for the given config
    pub fn new(model: ModelConfig) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn into_model(self) -> ModelConfig {
        self.model
    }
}

impl ModelBuilder for ModelBuilderService {
    fn model(&self) -> &ModelConfig {
        &self.model
    }

    fn model_mut(&mut self) -> &mut ModelConfig {
        &mut self.model
    }

    fn generate_model(&mut self, table_name: &str) -> Result<&ModelConfig> {
        self.generator.generate(&mut self.model, table_name)
    }

    fn tables(&self) -> Result<Vec<String>> {
        self.inspector.list_tables(&self.model)
    }

    fn check_connection(&mut self) -> bool {
        self.inspector.check_connection(&self.model)
    }

    fn connection_state(&self) -> ConnectionState {
        self.inspector.state()
    }
}
