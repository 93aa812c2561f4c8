use serde::{Deserialize, Serialize};

use super::enums::{AgentStatus, HostType, PhysicalSourceType, Upgradability, UpgradeStatus};

/// Payload of a `kPhysical` source: a host, a cluster, or a group of hosts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PhysicalProtectionSource {
    pub agents: Option<Vec<AgentInformation>>,
    pub cluster_source_type: Option<String>,
    pub host_name: Option<String>,
    pub host_type: Option<HostType>,
    pub id: Option<UniqueGlobalId>,
    pub is_proxy_host: Option<bool>,
    pub memory_size_bytes: Option<i64>,
    pub name: Option<String>,
    pub networking_info: Option<NetworkingInformation>,
    pub num_processors: Option<i64>,
    pub os_name: Option<String>,
    #[serde(rename = "type")]
    pub source_type: Option<PhysicalSourceType>,
    pub vcs_version: Option<String>,
    pub volumes: Option<Vec<PhysicalVolume>>,
    #[serde(rename(deserialize = "vssWriters"))]
    pub vsswriters: Option<Vec<VssWriter>>,
}

/// An agent installed on a physical host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AgentInformation {
    pub cbmr_version: Option<String>,
    pub file_cbt_info: Option<CbtInfo>,
    pub host_type: Option<HostType>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub source_side_dedup_enabled: Option<bool>,
    pub status: Option<AgentStatus>,
    pub status_message: Option<String>,
    pub upgradability: Option<Upgradability>,
    pub upgrade_status: Option<UpgradeStatus>,
    pub upgrade_status_message: Option<String>,
    pub version: Option<String>,
    pub vol_cbt_info: Option<CbtInfo>,
}

/// Changed-block-tracking driver state on a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CbtInfo {
    pub file_version: Option<CbtFileVersion>,
    pub is_installed: Option<bool>,
    pub reboot_status: Option<String>,
    pub service_state: Option<CbtServiceState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CbtFileVersion {
    pub build_ver: Option<f64>,
    pub major_ver: Option<f64>,
    pub minor_ver: Option<f64>,
    pub revision_num: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CbtServiceState {
    pub name: Option<String>,
    pub state: Option<String>,
}

/// Cluster-wide unique identifier of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct UniqueGlobalId {
    pub cluster_id: Option<i64>,
    pub cluster_incarnation_id: Option<i64>,
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct NetworkingInformation {
    pub resource_vec: Option<Vec<ClusterNetworkResource>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ClusterNetworkResource {
    pub endpoints: Option<Vec<Endpoint>>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Endpoint {
    pub fqdn: Option<String>,
    pub ipv4_addr: Option<String>,
    pub ipv6_addr: Option<String>,
}

/// A volume attached to a physical host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PhysicalVolume {
    pub device_path: Option<String>,
    pub guid: Option<String>,
    pub is_boot_volume: Option<bool>,
    pub is_extended_attributes_supported: Option<bool>,
    pub is_protected: Option<bool>,
    pub is_shared_volume: Option<bool>,
    pub label: Option<String>,
    pub logical_size_bytes: Option<i64>,
    pub mount_points: Option<Vec<String>>,
    pub mount_type: Option<String>,
    pub network_path: Option<String>,
    pub used_size_bytes: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct VssWriter {
    pub is_writer_excluded: Option<bool>,
    pub writer_name: Option<String>,
}
