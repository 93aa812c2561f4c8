//! Response types for the protection sources API.
//!
//! Wire JSON is camelCase and is read via
//! `#[serde(rename_all(deserialize = "camelCase"))]`; serialization keeps
//! the snake_case field names, which are also the data-source attribute
//! names. Every field is optional so "absent" never collapses into a
//! zero value.

pub mod enums;
pub mod node;
pub mod physical;
pub mod registration;
pub mod source;
pub mod sql;
pub mod throttling;

pub use enums::{
    AgentStatus, AuthenticationStatus, DayOfWeek, DbFileType, Environment, HostSettingsResultType,
    HostType, PatternType, PhysicalSourceType, RecoveryModel, RequestInitiatorType,
    SqlServerDbState, SqlSourceType, SubnetAccess, SubnetComponent, Upgradability, UpgradeStatus,
};
pub use node::{
    AggregatedSubtreeInfo, EntityPermissionInfo, GroupInfo, ObjectProtectionInfo,
    PaginationParameters, ProtectionSourceNode, TenantInfo, UserInfo,
};
pub use physical::{
    AgentInformation, CbtFileVersion, CbtInfo, CbtServiceState, ClusterNetworkResource, Endpoint,
    NetworkingInformation, PhysicalProtectionSource, PhysicalVolume, UniqueGlobalId, VssWriter,
};
pub use registration::{
    ConnectorParameters, HostSettingsCheckResult, PhysicalParams, RegisteredAppInfo,
    RegistrationInfo, Subnet, VlanParameters,
};
pub use source::ProtectionSource;
pub use sql::{DatabaseFileInformation, SqlProtectionSource, SqlServerInstanceVersion, SqlSourceId};
pub use throttling::{
    DayTime, DayTimeWindow, LatencyThresholds, MaxSnapshotConfig, MaxSpaceConfig,
    NasSourceThrottlingParams, StorageArraySnapshotConfig, StorageArraySnapshotThrottlingPolicy,
    ThrottlingConfig, ThrottlingConfiguration, ThrottlingPolicy, ThrottlingPolicyOverride,
    ThrottlingWindow, TimeOfDay,
};
