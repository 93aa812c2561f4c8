// Request options for `GET /protectionSources`.
//
// Every filter is optional and is sent only when set. List-valued
// filters are sent as a single comma-joined query parameter.

use crate::types::{Environment, RequestInitiatorType};

/// Filters for [`BackupRecoveryClient::list_protection_sources`](crate::BackupRecoveryClient::list_protection_sources).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProtectionSourcesOptions {
    /// Tenant the request runs as; sent as the `X-IBM-Tenant-Id` header.
    pub x_ibm_tenant_id: String,
    pub exclude_office365_types: Option<Vec<String>>,
    pub get_teams_channels: Option<bool>,
    pub after_cursor_entity_id: Option<i64>,
    pub before_cursor_entity_id: Option<i64>,
    pub node_id: Option<i64>,
    pub page_size: Option<i64>,
    pub has_valid_mailbox: Option<bool>,
    pub has_valid_onedrive: Option<bool>,
    pub is_security_group: Option<bool>,
    /// Root of the returned subtree (`id` query parameter).
    pub id: Option<i64>,
    pub num_levels: Option<f64>,
    pub exclude_types: Option<Vec<String>>,
    pub exclude_aws_types: Option<Vec<String>>,
    pub exclude_kubernetes_types: Option<Vec<String>>,
    pub include_datastores: Option<bool>,
    pub include_networks: Option<bool>,
    pub include_vm_folders: Option<bool>,
    pub include_sfdc_fields: Option<bool>,
    pub include_system_v_apps: Option<bool>,
    pub environments: Option<Vec<Environment>>,
    pub environment: Option<Environment>,
    pub include_entity_permission_info: Option<bool>,
    pub sids: Option<Vec<String>>,
    pub include_source_credentials: Option<bool>,
    pub encryption_key: Option<String>,
    pub include_object_protection_info: Option<bool>,
    pub prune_non_critical_info: Option<bool>,
    pub prune_aggregation_info: Option<bool>,
    pub request_initiator_type: Option<RequestInitiatorType>,
    pub use_cached_data: Option<bool>,
    pub all_under_hierarchy: Option<bool>,
}

fn push<T: ToString>(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&T>) {
    if let Some(v) = value {
        params.push((key, v.to_string()));
    }
}

fn push_list<T: ToString>(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    values: Option<&Vec<T>>,
) {
    if let Some(values) = values {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        params.push((key, joined));
    }
}

impl ListProtectionSourcesOptions {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            x_ibm_tenant_id: tenant_id.into(),
            ..Self::default()
        }
    }

    /// Query parameters for the set filters, in a stable order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_list(&mut params, "excludeOffice365Types", self.exclude_office365_types.as_ref());
        push(&mut params, "getTeamsChannels", self.get_teams_channels.as_ref());
        push(&mut params, "afterCursorEntityId", self.after_cursor_entity_id.as_ref());
        push(&mut params, "beforeCursorEntityId", self.before_cursor_entity_id.as_ref());
        push(&mut params, "nodeId", self.node_id.as_ref());
        push(&mut params, "pageSize", self.page_size.as_ref());
        push(&mut params, "hasValidMailbox", self.has_valid_mailbox.as_ref());
        push(&mut params, "hasValidOnedrive", self.has_valid_onedrive.as_ref());
        push(&mut params, "isSecurityGroup", self.is_security_group.as_ref());
        push(&mut params, "id", self.id.as_ref());
        push(&mut params, "numLevels", self.num_levels.as_ref());
        push_list(&mut params, "excludeTypes", self.exclude_types.as_ref());
        push_list(&mut params, "excludeAwsTypes", self.exclude_aws_types.as_ref());
        push_list(&mut params, "excludeKubernetesTypes", self.exclude_kubernetes_types.as_ref());
        push(&mut params, "includeDatastores", self.include_datastores.as_ref());
        push(&mut params, "includeNetworks", self.include_networks.as_ref());
        push(&mut params, "includeVMFolders", self.include_vm_folders.as_ref());
        push(&mut params, "includeSfdcFields", self.include_sfdc_fields.as_ref());
        push(&mut params, "includeSystemVApps", self.include_system_v_apps.as_ref());
        push_list(&mut params, "environments", self.environments.as_ref());
        push(&mut params, "environment", self.environment.as_ref());
        push(
            &mut params,
            "includeEntityPermissionInfo",
            self.include_entity_permission_info.as_ref(),
        );
        push_list(&mut params, "sids", self.sids.as_ref());
        push(&mut params, "includeSourceCredentials", self.include_source_credentials.as_ref());
        push(&mut params, "encryptionKey", self.encryption_key.as_ref());
        push(
            &mut params,
            "includeObjectProtectionInfo",
            self.include_object_protection_info.as_ref(),
        );
        push(&mut params, "pruneNonCriticalInfo", self.prune_non_critical_info.as_ref());
        push(&mut params, "pruneAggregationInfo", self.prune_aggregation_info.as_ref());
        push(&mut params, "requestInitiatorType", self.request_initiator_type.as_ref());
        push(&mut params, "useCachedData", self.use_cached_data.as_ref());
        push(&mut params, "allUnderHierarchy", self.all_under_hierarchy.as_ref());
        params
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tenant_only_sends_no_query_params() {
        let opts = ListProtectionSourcesOptions::new("t1");
        assert_eq!(opts.x_ibm_tenant_id, "t1");
        assert!(opts.query_params().is_empty());
    }

    #[test]
    fn lists_are_comma_joined() {
        let opts = ListProtectionSourcesOptions {
            environments: Some(vec![Environment::Physical, Environment::Sql]),
            exclude_types: Some(vec!["kVCenter".into(), "kFolder".into()]),
            ..ListProtectionSourcesOptions::new("t1")
        };
        assert_eq!(
            opts.query_params(),
            vec![
                ("excludeTypes", "kVCenter,kFolder".to_string()),
                ("environments", "kPhysical,kSQL".to_string()),
            ]
        );
    }

    #[test]
    fn explicit_false_is_sent() {
        let opts = ListProtectionSourcesOptions {
            include_networks: Some(false),
            num_levels: Some(2.5),
            request_initiator_type: Some(RequestInitiatorType::UiAuto),
            ..ListProtectionSourcesOptions::new("t1")
        };
        assert_eq!(
            opts.query_params(),
            vec![
                ("numLevels", "2.5".to_string()),
                ("includeNetworks", "false".to_string()),
                ("requestInitiatorType", "UIAuto".to_string()),
            ]
        );
    }
}
