//! Rate-limit configuration attached to a registration.
//!
//! These are plain values; enforcement happens inside the service.

use serde::{Deserialize, Serialize};

use super::enums::{DayOfWeek, PatternType};

/// Limits on how aggressively the service reads from a registered source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ThrottlingPolicy {
    pub enforce_max_streams: Option<bool>,
    pub enforce_registered_source_max_backups: Option<bool>,
    pub is_enabled: Option<bool>,
    pub latency_thresholds: Option<LatencyThresholds>,
    pub max_concurrent_streams: Option<f64>,
    pub nas_source_params: Option<NasSourceThrottlingParams>,
    pub registered_source_max_concurrent_backups: Option<f64>,
    pub storage_array_snapshot_config: Option<StorageArraySnapshotConfig>,
}

/// Datastore latency above which new or running tasks are held back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct LatencyThresholds {
    pub active_task_msecs: Option<i64>,
    pub new_task_msecs: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct NasSourceThrottlingParams {
    pub max_parallel_metadata_fetch_full_percentage: Option<f64>,
    pub max_parallel_metadata_fetch_incremental_percentage: Option<f64>,
    pub max_parallel_read_write_full_percentage: Option<f64>,
    pub max_parallel_read_write_incremental_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct StorageArraySnapshotConfig {
    pub is_max_snapshots_config_enabled: Option<bool>,
    pub is_max_space_config_enabled: Option<bool>,
    pub max_snapshot_config: Option<MaxSnapshotConfig>,
    pub max_space_config: Option<MaxSpaceConfig>,
    pub throttling_policies: Option<Vec<StorageArraySnapshotThrottlingPolicy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MaxSnapshotConfig {
    pub max_snapshots: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MaxSpaceConfig {
    pub max_space_pct: Option<f64>,
}

/// Per-volume override of the storage-array snapshot limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct StorageArraySnapshotThrottlingPolicy {
    pub id: Option<i64>,
    pub is_max_snapshots_config_enabled: Option<bool>,
    pub is_max_space_config_enabled: Option<bool>,
    pub max_snapshot_config: Option<MaxSnapshotConfig>,
    pub max_space_config: Option<MaxSpaceConfig>,
}

/// Throttling policy replacing the source-level one for a single datastore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ThrottlingPolicyOverride {
    pub datastore_id: Option<i64>,
    pub datastore_name: Option<String>,
    pub throttling_policy: Option<ThrottlingPolicy>,
}

/// Agent-side CPU and network throttling for physical hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ThrottlingConfig {
    pub cpu_throttling_config: Option<ThrottlingConfiguration>,
    pub network_throttling_config: Option<ThrottlingConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ThrottlingConfiguration {
    pub fixed_threshold: Option<i64>,
    pub pattern_type: Option<PatternType>,
    pub throttling_windows: Option<Vec<ThrottlingWindow>>,
}

/// A threshold that applies inside one weekly time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ThrottlingWindow {
    pub day_time_window: Option<DayTimeWindow>,
    pub threshold: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DayTimeWindow {
    pub end_time: Option<DayTime>,
    pub start_time: Option<DayTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DayTime {
    pub day: Option<DayOfWeek>,
    pub time: Option<TimeOfDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TimeOfDay {
    pub hour: Option<i64>,
    pub minute: Option<i64>,
}
