// Data sources exposed by this crate.

pub mod protection_sources;

use serde_json::{Map, Value};

/// Exported schemas of every data source, keyed by type name.
///
/// Shaped like the `data_source_schemas` object of `providers schema -json`.
pub fn export_schemas() -> Value {
    let mut schemas = Map::new();
    schemas.insert(
        protection_sources::TYPE_NAME.into(),
        protection_sources::schema().export(),
    );
    Value::Object(schemas)
}
