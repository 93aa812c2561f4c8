use serde::{Deserialize, Serialize};

use super::enums::Environment;
use super::physical::PhysicalProtectionSource;
use super::sql::SqlProtectionSource;

/// The source entity a node stands for.
///
/// Only the payload matching `environment` is populated by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ProtectionSource {
    pub connection_id: Option<i64>,
    pub connector_group_id: Option<i64>,
    pub custom_name: Option<String>,
    pub environment: Option<Environment>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub parent_id: Option<i64>,
    pub physical_protection_source: Option<PhysicalProtectionSource>,
    pub sql_protection_source: Option<SqlProtectionSource>,
}
