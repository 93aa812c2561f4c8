//! Command handlers: bridge CLI args -> data source reads -> output formatting.

pub mod config_cmd;
pub mod schema_cmd;
pub mod sources;
