use serde::{Deserialize, Serialize};

use super::enums::{
    AuthenticationStatus, Environment, HostSettingsResultType, SubnetAccess, SubnetComponent,
};
use super::throttling::{ThrottlingConfig, ThrottlingPolicy, ThrottlingPolicyOverride};

/// How a root source was registered with the service.
///
/// Credentials are only returned when the request asked for them
/// (`includeSourceCredentials` + `encryptionKey`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RegistrationInfo {
    pub access_info: Option<ConnectorParameters>,
    pub allowed_ip_addresses: Option<Vec<String>>,
    pub authentication_error_message: Option<String>,
    pub authentication_status: Option<AuthenticationStatus>,
    pub blacklisted_ip_addresses: Option<Vec<String>>,
    pub denied_ip_addresses: Option<Vec<String>>,
    pub environments: Option<Vec<Environment>>,
    pub is_db_authenticated: Option<bool>,
    pub is_storage_array_snapshot_enabled: Option<bool>,
    pub link_vms_across_vcenter: Option<bool>,
    #[serde(rename(deserialize = "minimumFreeSpaceGB"))]
    pub minimum_free_space_gb: Option<i64>,
    pub minimum_free_space_percent: Option<i64>,
    pub password: Option<String>,
    pub physical_params: Option<PhysicalParams>,
    pub progress_monitor_path: Option<String>,
    pub refresh_error_message: Option<String>,
    pub refresh_time_usecs: Option<i64>,
    pub registered_apps_info: Option<Vec<RegisteredAppInfo>>,
    pub registration_time_usecs: Option<i64>,
    pub subnets: Option<Vec<Subnet>>,
    pub throttling_policy: Option<ThrottlingPolicy>,
    pub throttling_policy_overrides: Option<Vec<ThrottlingPolicyOverride>>,
    pub use_o_auth_for_exchange_online: Option<bool>,
    pub use_vm_bios_uuid: Option<bool>,
    pub user_messages: Option<Vec<String>>,
    pub username: Option<String>,
    pub vlan_params: Option<VlanParameters>,
    pub warning_messages: Option<Vec<String>>,
}

/// Endpoint and connector used to reach a registered source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ConnectorParameters {
    pub connection_id: Option<i64>,
    pub connector_group_id: Option<i64>,
    pub endpoint: Option<String>,
    pub environment: Option<Environment>,
    pub id: Option<i64>,
    pub version: Option<i64>,
}

/// Registration parameters specific to physical hosts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PhysicalParams {
    pub applications: Option<Vec<Environment>>,
    pub password: Option<String>,
    pub throttling_config: Option<ThrottlingConfig>,
    pub username: Option<String>,
}

/// Registration state of one application (SQL, Oracle, ...) on a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RegisteredAppInfo {
    pub authentication_error_message: Option<String>,
    pub authentication_status: Option<AuthenticationStatus>,
    pub environment: Option<Environment>,
    pub host_settings_check_results: Option<Vec<HostSettingsCheckResult>>,
    pub refresh_error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct HostSettingsCheckResult {
    pub check_type: Option<String>,
    pub result_type: Option<HostSettingsResultType>,
    pub user_message: Option<String>,
}

/// A subnet whitelisted for data access to the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Subnet {
    pub component: Option<SubnetComponent>,
    pub description: Option<String>,
    pub id: Option<f64>,
    pub ip: Option<String>,
    pub netmask_bits: Option<f64>,
    pub netmask_ip4: Option<String>,
    pub nfs_access: Option<SubnetAccess>,
    pub nfs_all_squash: Option<bool>,
    pub nfs_root_squash: Option<bool>,
    pub s3_access: Option<SubnetAccess>,
    pub smb_access: Option<SubnetAccess>,
    pub tenant_id: Option<String>,
}

/// VLAN the cluster uses to talk to the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct VlanParameters {
    pub disable_vlan: Option<bool>,
    pub interface_name: Option<String>,
    pub vlan: Option<f64>,
}
