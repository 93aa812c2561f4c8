//! The recursive protection source tree returned by `GET /protectionSources`.

use serde::{Deserialize, Serialize};

use super::enums::Environment;
use super::registration::RegistrationInfo;
use super::source::ProtectionSource;

/// One node of a protection source hierarchy.
///
/// A vCenter node holds datacenter nodes which hold host nodes which hold
/// VM nodes; a physical host's databases hang off `application_nodes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ProtectionSourceNode {
    /// Child subtree holding application-level objects (SQL instances, ...).
    pub application_nodes: Option<Vec<ProtectionSourceNode>>,
    pub entity_pagination_parameters: Option<PaginationParameters>,
    pub entity_permission_info: Option<EntityPermissionInfo>,
    pub logical_size: Option<i64>,
    pub nodes: Option<Vec<ProtectionSourceNode>>,
    pub object_protection_info: Option<ObjectProtectionInfo>,
    pub protected_sources_summary: Option<Vec<AggregatedSubtreeInfo>>,
    pub protection_source: Option<ProtectionSource>,
    pub registration_info: Option<RegistrationInfo>,
    pub total_downtiered_size_in_bytes: Option<i64>,
    pub total_uptiered_size_in_bytes: Option<i64>,
    pub unprotected_sources_summary: Option<Vec<AggregatedSubtreeInfo>>,
}

/// Cursor-based paging descriptor for large source hierarchies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PaginationParameters {
    pub after_cursor_entity_id: Option<i64>,
    pub before_cursor_entity_id: Option<i64>,
    pub node_id: Option<i64>,
    pub page_size: Option<i64>,
}

/// Protected or unprotected leaf counts for one environment of a subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AggregatedSubtreeInfo {
    pub environment: Option<Environment>,
    pub leaves_count: Option<i64>,
    pub total_logical_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ObjectProtectionInfo {
    pub auto_protect_parent_id: Option<i64>,
    pub entity_id: Option<i64>,
    pub has_active_object_protection_spec: Option<bool>,
}

/// Which users, groups, and tenant may see an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct EntityPermissionInfo {
    pub entity_id: Option<i64>,
    pub groups: Option<Vec<GroupInfo>>,
    pub is_inferred: Option<bool>,
    pub is_registered_by_sp: Option<bool>,
    pub registering_tenant_id: Option<String>,
    pub tenant: Option<TenantInfo>,
    pub users: Option<Vec<UserInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct GroupInfo {
    pub domain: Option<String>,
    pub group_name: Option<String>,
    pub sid: Option<String>,
    pub tenant_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TenantInfo {
    pub bifrost_enabled: Option<bool>,
    pub is_managed_on_helios: Option<bool>,
    pub name: Option<String>,
    pub tenant_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct UserInfo {
    pub domain: Option<String>,
    pub sid: Option<String>,
    pub tenant_id: Option<String>,
    pub user_name: Option<String>,
}
