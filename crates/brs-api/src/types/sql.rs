use serde::{Deserialize, Serialize};

use super::enums::{DbFileType, RecoveryModel, SqlServerDbState, SqlSourceType};

/// Payload of a `kSQL` source: an instance, a database, or an AAG.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SqlProtectionSource {
    #[serde(rename(deserialize = "IsAvailableForVssBackup"))]
    pub is_available_for_vss_backup: Option<bool>,
    pub created_timestamp: Option<String>,
    pub database_name: Option<String>,
    pub db_aag_entity_id: Option<i64>,
    pub db_aag_name: Option<String>,
    pub db_compatibility_level: Option<i64>,
    pub db_file_groups: Option<Vec<String>>,
    pub db_files: Option<Vec<DatabaseFileInformation>>,
    pub db_owner_username: Option<String>,
    pub default_database_location: Option<String>,
    pub default_log_location: Option<String>,
    pub id: Option<SqlSourceId>,
    pub is_encrypted: Option<bool>,
    pub name: Option<String>,
    pub owner_id: Option<i64>,
    pub recovery_model: Option<RecoveryModel>,
    pub sql_server_db_state: Option<SqlServerDbState>,
    pub sql_server_instance_version: Option<SqlServerInstanceVersion>,
    #[serde(rename = "type")]
    pub source_type: Option<SqlSourceType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DatabaseFileInformation {
    pub file_type: Option<DbFileType>,
    pub full_path: Option<String>,
    pub size_bytes: Option<i64>,
}

/// Identity of a SQL instance or database across renames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SqlSourceId {
    pub created_date_msecs: Option<i64>,
    pub database_id: Option<i64>,
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SqlServerInstanceVersion {
    pub build: Option<f64>,
    pub major_version: Option<f64>,
    pub minor_version: Option<f64>,
    pub revision: Option<f64>,
    pub version_string: Option<String>,
}
