// ── ibm_backup_recovery_protection_sources ──
//
// Read-only data source listing protection source trees. A read copies
// the arguments into a request, makes one list call, and flattens every
// returned root node into the `protection_sources` attribute.

mod schema;

use std::sync::LazyLock;

use brs_api::ListProtectionSourcesOptions;
use serde_json::Value;
use tracing::debug;

pub use self::schema::{NODE_BLOCK, schema};
use crate::error::{CoreError, ReadError};
use crate::flatten::flatten;
use crate::resource_data::{ResourceConfig, ResourceState};
use crate::schema::Schema;
use crate::session::{ClientSession, ProtectionSourcesApi};

pub const TYPE_NAME: &str = "ibm_backup_recovery_protection_sources";

const RESOURCE: &str = "(Data) ibm_backup_recovery_protection_sources";
const OPERATION: &str = "read";
const OUTPUT: &str = "protection_sources";

static SCHEMA: LazyLock<Schema> = LazyLock::new(schema);

fn fail(step: Option<&'static str>, summary: String, source: CoreError) -> ReadError {
    let err = ReadError::new(RESOURCE, OPERATION, step, summary, source);
    debug!("\n{}", err.debug_message());
    err
}

/// Run one read against the session's client.
///
/// On success the state holds a timestamp id, the echoed arguments, and
/// `protection_sources`. On failure nothing is returned.
pub async fn read<S: ClientSession>(
    session: &S,
    config: &ResourceConfig,
) -> Result<ResourceState, ReadError> {
    let client = session
        .backup_recovery_client()
        .map_err(|e| fail(Some("initialize-client"), e.to_string(), e))?;

    let options = build_options(config).map_err(|e| fail(Some("build-request"), e.to_string(), e))?;

    let nodes = client.list_protection_sources(&options).await.map_err(|e| {
        let e = CoreError::from(e);
        fail(None, format!("ListProtectionSources failed: {e}"), e)
    })?;
    debug!(roots = nodes.len(), "listed protection sources");

    let flattened = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            flatten(&SCHEMA, NODE_BLOCK, node, &format!("{OUTPUT}.{i}")).map(Value::Object)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            let e = CoreError::Flatten(e);
            fail(Some("protection_sources-to-map"), e.to_string(), e)
        })?;

    let mut state = ResourceState::new();
    state.set_id(chrono::Utc::now().to_string());

    for (key, value) in config.iter() {
        state.set(&SCHEMA, key, value.clone()).map_err(|e| {
            let e = CoreError::Schema(e);
            fail(Some("set-arguments"), format!("Error setting {key}: {e}"), e)
        })?;
    }

    state
        .set(&SCHEMA, OUTPUT, Value::Array(flattened))
        .map_err(|e| {
            let e = CoreError::Schema(e);
            fail(
                Some("set-protection_sources"),
                format!("Error setting {OUTPUT}: {e}"),
                e,
            )
        })?;

    Ok(state)
}

/// Copy the present arguments into a request. Absent arguments stay `None`.
pub fn build_options(config: &ResourceConfig) -> Result<ListProtectionSourcesOptions, CoreError> {
    let tenant = config
        .get_str("x_ibm_tenant_id")?
        .ok_or_else(|| CoreError::InvalidArgument {
            name: "x_ibm_tenant_id".into(),
            message: "is required".into(),
        })?;

    Ok(ListProtectionSourcesOptions {
        x_ibm_tenant_id: tenant.to_owned(),
        exclude_office365_types: config.get_string_list("exclude_office365_types")?,
        get_teams_channels: config.get_bool("get_teams_channels")?,
        after_cursor_entity_id: config.get_i64("after_cursor_entity_id")?,
        before_cursor_entity_id: config.get_i64("before_cursor_entity_id")?,
        node_id: config.get_i64("node_id")?,
        page_size: config.get_i64("page_size")?,
        has_valid_mailbox: config.get_bool("has_valid_mailbox")?,
        has_valid_onedrive: config.get_bool("has_valid_onedrive")?,
        is_security_group: config.get_bool("is_security_group")?,
        id: config.get_i64("protection_source_id")?,
        num_levels: config.get_f64("num_levels")?,
        exclude_types: config.get_string_list("exclude_types")?,
        exclude_aws_types: config.get_string_list("exclude_aws_types")?,
        exclude_kubernetes_types: config.get_string_list("exclude_kubernetes_types")?,
        include_datastores: config.get_bool("include_datastores")?,
        include_networks: config.get_bool("include_networks")?,
        include_vm_folders: config.get_bool("include_vm_folders")?,
        include_sfdc_fields: config.get_bool("include_sfdc_fields")?,
        include_system_v_apps: config.get_bool("include_system_v_apps")?,
        environments: config.get_parsed_list("environments")?,
        environment: config.get_parsed("environment")?,
        include_entity_permission_info: config.get_bool("include_entity_permission_info")?,
        sids: config.get_string_list("sids")?,
        include_source_credentials: config.get_bool("include_source_credentials")?,
        encryption_key: config.get_str("encryption_key")?.map(str::to_owned),
        include_object_protection_info: config.get_bool("include_object_protection_info")?,
        prune_non_critical_info: config.get_bool("prune_non_critical_info")?,
        prune_aggregation_info: config.get_bool("prune_aggregation_info")?,
        request_initiator_type: config.get_parsed("request_initiator_type")?,
        use_cached_data: config.get_bool("use_cached_data")?,
        all_under_hierarchy: config.get_bool("all_under_hierarchy")?,
    })
}
