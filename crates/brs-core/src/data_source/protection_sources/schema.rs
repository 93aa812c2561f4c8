// Schema for `ibm_backup_recovery_protection_sources`.
//
// Every nested record of the response has its own named definition; the
// node definition refers to itself through `nodes` and `application_nodes`.

use crate::schema::{Attribute, AttributeType, Block, NestingMode, Primitive, Schema};

/// Definition name of the recursive tree node block.
pub const NODE_BLOCK: &str = "protection_source_node";

// ── Attribute shorthands ─────────────────────────────────────────────

fn string(description: &'static str) -> Attribute {
    Attribute::computed(AttributeType::Primitive(Primitive::String)).description(description)
}

fn int(description: &'static str) -> Attribute {
    Attribute::computed(AttributeType::Primitive(Primitive::Int)).description(description)
}

fn float(description: &'static str) -> Attribute {
    Attribute::computed(AttributeType::Primitive(Primitive::Float)).description(description)
}

fn flag(description: &'static str) -> Attribute {
    Attribute::computed(AttributeType::Primitive(Primitive::Bool)).description(description)
}

fn strings(description: &'static str) -> Attribute {
    Attribute::computed(AttributeType::List(Primitive::String)).description(description)
}

fn object(block: &'static str, description: &'static str) -> Attribute {
    Attribute::computed(AttributeType::Nested {
        block,
        nesting: NestingMode::Single,
    })
    .description(description)
}

fn objects(block: &'static str, description: &'static str) -> Attribute {
    Attribute::computed(AttributeType::Nested {
        block,
        nesting: NestingMode::List,
    })
    .description(description)
}

fn arg(ty: Primitive, description: &'static str) -> Attribute {
    Attribute::optional(AttributeType::Primitive(ty)).description(description)
}

fn arg_list(description: &'static str) -> Attribute {
    Attribute::optional(AttributeType::List(Primitive::String)).description(description)
}

// ── Declarator ───────────────────────────────────────────────────────

/// The full schema: arguments, the computed `protection_sources` list, and
/// every nested definition it reaches.
pub fn schema() -> Schema {
    Schema::new(arguments())
        .define(NODE_BLOCK, node())
        .define("pagination_parameters", pagination_parameters())
        .define("entity_permission_info", entity_permission_info())
        .define("group_info", group_info())
        .define("tenant_info", tenant_info())
        .define("user_info", user_info())
        .define("object_protection_info", object_protection_info())
        .define("aggregated_subtree_info", aggregated_subtree_info())
        .define("protection_source", protection_source())
        .define("physical_protection_source", physical_protection_source())
        .define("agent_information", agent_information())
        .define("cbt_info", cbt_info())
        .define("cbt_file_version", cbt_file_version())
        .define("cbt_service_state", cbt_service_state())
        .define("unique_global_id", unique_global_id())
        .define("networking_information", networking_information())
        .define("cluster_network_resource", cluster_network_resource())
        .define("endpoint", endpoint())
        .define("physical_volume", physical_volume())
        .define("vss_writer", vss_writer())
        .define("sql_protection_source", sql_protection_source())
        .define("database_file_information", database_file_information())
        .define("sql_source_id", sql_source_id())
        .define("sql_server_instance_version", sql_server_instance_version())
        .define("registration_info", registration_info())
        .define("connector_parameters", connector_parameters())
        .define("physical_params", physical_params())
        .define("registered_app_info", registered_app_info())
        .define("host_settings_check_result", host_settings_check_result())
        .define("subnet", subnet())
        .define("vlan_parameters", vlan_parameters())
        .define("throttling_policy", throttling_policy())
        .define("latency_thresholds", latency_thresholds())
        .define("nas_source_throttling_params", nas_source_throttling_params())
        .define("storage_array_snapshot_config", storage_array_snapshot_config())
        .define("max_snapshot_config", max_snapshot_config())
        .define("max_space_config", max_space_config())
        .define(
            "storage_array_snapshot_throttling_policy",
            storage_array_snapshot_throttling_policy(),
        )
        .define("throttling_policy_override", throttling_policy_override())
        .define("throttling_config", throttling_config())
        .define("throttling_configuration", throttling_configuration())
        .define("throttling_window", throttling_window())
        .define("day_time_window", day_time_window())
        .define("day_time", day_time())
        .define("time_of_day", time_of_day())
}

fn arguments() -> Block {
    Block::new()
        .attribute(
            "x_ibm_tenant_id",
            Attribute::required(AttributeType::Primitive(Primitive::String))
                .description("Id of the tenant accessing the cluster."),
        )
        .attribute(
            "exclude_office365_types",
            arg_list("Office 365 entity types to exclude from the returned tree."),
        )
        .attribute(
            "get_teams_channels",
            arg(Primitive::Bool, "Whether to return the channels of Microsoft Teams."),
        )
        .attribute(
            "after_cursor_entity_id",
            arg(Primitive::Int, "Entity id to start the next page after."),
        )
        .attribute(
            "before_cursor_entity_id",
            arg(Primitive::Int, "Entity id to end the previous page before."),
        )
        .attribute(
            "node_id",
            arg(Primitive::Int, "Id of the node whose children are paginated."),
        )
        .attribute(
            "page_size",
            arg(Primitive::Int, "Maximum number of entities returned per page."),
        )
        .attribute(
            "has_valid_mailbox",
            arg(Primitive::Bool, "Only return Office 365 users with a valid mailbox."),
        )
        .attribute(
            "has_valid_onedrive",
            arg(Primitive::Bool, "Only return Office 365 users with a valid OneDrive."),
        )
        .attribute(
            "is_security_group",
            arg(Primitive::Bool, "Only return groups that are security groups."),
        )
        .attribute(
            "protection_source_id",
            arg(Primitive::Int, "Id of the source node the returned tree is rooted at."),
        )
        .attribute(
            "num_levels",
            arg(Primitive::Float, "Number of levels of the tree to return below the root."),
        )
        .attribute(
            "exclude_types",
            arg_list("Entity types whose nodes (and subtrees) are excluded."),
        )
        .attribute(
            "exclude_aws_types",
            arg_list("AWS entity types to exclude from the returned tree."),
        )
        .attribute(
            "exclude_kubernetes_types",
            arg_list("Kubernetes entity types to exclude from the returned tree."),
        )
        .attribute(
            "include_datastores",
            arg(Primitive::Bool, "Whether to include VMware datastores."),
        )
        .attribute(
            "include_networks",
            arg(Primitive::Bool, "Whether to include VMware networks."),
        )
        .attribute(
            "include_vm_folders",
            arg(Primitive::Bool, "Whether to include VMware VM folders."),
        )
        .attribute(
            "include_sfdc_fields",
            arg(Primitive::Bool, "Whether to include Salesforce object fields."),
        )
        .attribute(
            "include_system_v_apps",
            arg(Primitive::Bool, "Whether to include vCloud system vApps."),
        )
        .attribute(
            "environments",
            arg_list("Only return sources of these environments."),
        )
        .attribute(
            "environment",
            arg(Primitive::String, "Only return sources of this environment."),
        )
        .attribute(
            "include_entity_permission_info",
            arg(Primitive::Bool, "Whether to include users, groups and tenant with access to each entity."),
        )
        .attribute(
            "sids",
            arg_list("Only return sources visible to these user or group SIDs."),
        )
        .attribute(
            "include_source_credentials",
            arg(Primitive::Bool, "Whether to return source credentials, encrypted with `encryption_key`."),
        )
        .attribute(
            "encryption_key",
            arg(Primitive::String, "Key used to encrypt returned source credentials.").sensitive(),
        )
        .attribute(
            "include_object_protection_info",
            arg(Primitive::Bool, "Whether to include object protection details."),
        )
        .attribute(
            "prune_non_critical_info",
            arg(Primitive::Bool, "Whether to drop non-critical fields from the response."),
        )
        .attribute(
            "prune_aggregation_info",
            arg(Primitive::Bool, "Whether to drop protected/unprotected aggregation summaries."),
        )
        .attribute(
            "request_initiator_type",
            arg(Primitive::String, "Who issued the request: UIUser, UIAuto or Helios."),
        )
        .attribute(
            "use_cached_data",
            arg(Primitive::Bool, "Whether the service may answer from its metadata cache."),
        )
        .attribute(
            "all_under_hierarchy",
            arg(Primitive::Bool, "Whether to return every source under the tenant's hierarchy."),
        )
        .attribute(
            "protection_sources",
            objects(NODE_BLOCK, "Protection source trees returned by the service."),
        )
}

// ── Tree node ────────────────────────────────────────────────────────

fn node() -> Block {
    Block::new()
        .attribute(
            "application_nodes",
            objects(NODE_BLOCK, "Application-level child nodes (SQL instances, databases, ...)."),
        )
        .attribute(
            "entity_pagination_parameters",
            object("pagination_parameters", "Cursor for fetching further children of this node."),
        )
        .attribute(
            "entity_permission_info",
            object("entity_permission_info", "Users, groups and tenant with access to this entity."),
        )
        .attribute("logical_size", int("Logical size of the subtree in bytes."))
        .attribute("nodes", objects(NODE_BLOCK, "Child nodes."))
        .attribute(
            "object_protection_info",
            object("object_protection_info", "Object protection details."),
        )
        .attribute(
            "protected_sources_summary",
            objects("aggregated_subtree_info", "Protected leaf counts per environment."),
        )
        .attribute(
            "protection_source",
            object("protection_source", "The source this node represents."),
        )
        .attribute(
            "registration_info",
            object("registration_info", "Registration details, set on registered roots."),
        )
        .attribute(
            "total_downtiered_size_in_bytes",
            int("Bytes down-tiered from this subtree."),
        )
        .attribute(
            "total_uptiered_size_in_bytes",
            int("Bytes up-tiered to this subtree."),
        )
        .attribute(
            "unprotected_sources_summary",
            objects("aggregated_subtree_info", "Unprotected leaf counts per environment."),
        )
}

fn pagination_parameters() -> Block {
    Block::new()
        .attribute(
            "after_cursor_entity_id",
            int("Entity id to start the next page after."),
        )
        .attribute(
            "before_cursor_entity_id",
            int("Entity id to end the previous page before."),
        )
        .attribute("node_id", int("Id of the node whose children are paginated."))
        .attribute("page_size", int("Maximum number of entities per page."))
}

fn entity_permission_info() -> Block {
    Block::new()
        .attribute("entity_id", int("Entity id."))
        .attribute("groups", objects("group_info", "Groups with access."))
        .attribute(
            "is_inferred",
            flag("Whether access is inherited from a parent entity."),
        )
        .attribute(
            "is_registered_by_sp",
            flag("Whether a service provider registered the entity."),
        )
        .attribute(
            "registering_tenant_id",
            string("Tenant that registered the entity."),
        )
        .attribute("tenant", object("tenant_info", "Owning tenant."))
        .attribute("users", objects("user_info", "Users with access."))
}

fn group_info() -> Block {
    Block::new()
        .attribute("domain", string("Domain of the group."))
        .attribute("group_name", string("Name of the group."))
        .attribute("sid", string("SID of the group."))
        .attribute("tenant_ids", strings("Tenants the group belongs to."))
}

fn tenant_info() -> Block {
    Block::new()
        .attribute("bifrost_enabled", flag("Whether the tenant uses Bifrost connectivity."))
        .attribute("is_managed_on_helios", flag("Whether the tenant is managed on Helios."))
        .attribute("name", string("Tenant name."))
        .attribute("tenant_id", string("Tenant id."))
}

fn user_info() -> Block {
    Block::new()
        .attribute("domain", string("Domain of the user."))
        .attribute("sid", string("SID of the user."))
        .attribute("tenant_id", string("Tenant of the user."))
        .attribute("user_name", string("Name of the user."))
}

fn object_protection_info() -> Block {
    Block::new()
        .attribute(
            "auto_protect_parent_id",
            int("Id of the auto-protected parent, if any."),
        )
        .attribute("entity_id", int("Entity id."))
        .attribute(
            "has_active_object_protection_spec",
            flag("Whether an object protection spec is active."),
        )
}

fn aggregated_subtree_info() -> Block {
    Block::new()
        .attribute("environment", string("Environment of the counted leaves."))
        .attribute("leaves_count", int("Number of leaf nodes."))
        .attribute("total_logical_size", int("Logical size of the leaves in bytes."))
}

// ── Source ───────────────────────────────────────────────────────────

fn protection_source() -> Block {
    Block::new()
        .attribute("connection_id", int("Id of the connection used to reach the source."))
        .attribute("connector_group_id", int("Id of the connector group."))
        .attribute("custom_name", string("User-assigned name."))
        .attribute("environment", string("Environment (adapter) of the source."))
        .attribute("id", int("Source id."))
        .attribute("name", string("Source name."))
        .attribute("parent_id", int("Id of the parent source."))
        .attribute(
            "physical_protection_source",
            object("physical_protection_source", "Set when the environment is kPhysical."),
        )
        .attribute(
            "sql_protection_source",
            object("sql_protection_source", "Set when the environment is kSQL."),
        )
}

fn physical_protection_source() -> Block {
    Block::new()
        .attribute("agents", objects("agent_information", "Agents installed on the host."))
        .attribute("cluster_source_type", string("Type of cluster the host belongs to."))
        .attribute("host_name", string("Host name or IP address."))
        .attribute("host_type", string("Operating system family."))
        .attribute("id", object("unique_global_id", "Globally unique id."))
        .attribute("is_proxy_host", flag("Whether the host is a proxy."))
        .attribute("memory_size_bytes", int("Installed memory in bytes."))
        .attribute("name", string("Source name."))
        .attribute(
            "networking_info",
            object("networking_information", "Network resources of a cluster source."),
        )
        .attribute("num_processors", int("Number of processors."))
        .attribute("os_name", string("Operating system name."))
        .attribute("type", string("Kind of physical source (kHost, kGroup, ...)."))
        .attribute("vcs_version", string("Veritas Cluster Server version."))
        .attribute("volumes", objects("physical_volume", "Volumes on the host."))
        .attribute("vsswriters", objects("vss_writer", "VSS writers on the host."))
}

fn agent_information() -> Block {
    Block::new()
        .attribute("cbmr_version", string("Bare-metal recovery agent version."))
        .attribute("file_cbt_info", object("cbt_info", "File-level change tracking driver."))
        .attribute("host_type", string("Operating system family."))
        .attribute("id", int("Agent id."))
        .attribute("name", string("Agent name."))
        .attribute(
            "source_side_dedup_enabled",
            flag("Whether source-side deduplication is enabled."),
        )
        .attribute("status", string("Agent health."))
        .attribute("status_message", string("Detail for the agent health."))
        .attribute("upgradability", string("Whether the agent can be upgraded."))
        .attribute("upgrade_status", string("State of the last upgrade."))
        .attribute("upgrade_status_message", string("Detail for the upgrade state."))
        .attribute("version", string("Agent version."))
        .attribute("vol_cbt_info", object("cbt_info", "Volume-level change tracking driver."))
}

fn cbt_info() -> Block {
    Block::new()
        .attribute("file_version", object("cbt_file_version", "Driver version."))
        .attribute("is_installed", flag("Whether the driver is installed."))
        .attribute("reboot_status", string("Whether a reboot is pending."))
        .attribute("service_state", object("cbt_service_state", "Driver service state."))
}

fn cbt_file_version() -> Block {
    Block::new()
        .attribute("build_ver", float("Build number."))
        .attribute("major_ver", float("Major version."))
        .attribute("minor_ver", float("Minor version."))
        .attribute("revision_num", float("Revision number."))
}

fn cbt_service_state() -> Block {
    Block::new()
        .attribute("name", string("Service name."))
        .attribute("state", string("Service state."))
}

fn unique_global_id() -> Block {
    Block::new()
        .attribute("cluster_id", int("Cluster id."))
        .attribute("cluster_incarnation_id", int("Cluster incarnation id."))
        .attribute("id", int("Entity id within the cluster."))
}

fn networking_information() -> Block {
    Block::new().attribute(
        "resource_vec",
        objects("cluster_network_resource", "Network resources."),
    )
}

fn cluster_network_resource() -> Block {
    Block::new()
        .attribute("endpoints", objects("endpoint", "Endpoints of the resource."))
        .attribute("type", string("Resource type."))
}

fn endpoint() -> Block {
    Block::new()
        .attribute("fqdn", string("Fully qualified domain name."))
        .attribute("ipv4_addr", string("IPv4 address."))
        .attribute("ipv6_addr", string("IPv6 address."))
}

fn physical_volume() -> Block {
    Block::new()
        .attribute("device_path", string("Device path."))
        .attribute("guid", string("Volume GUID."))
        .attribute("is_boot_volume", flag("Whether this is the boot volume."))
        .attribute(
            "is_extended_attributes_supported",
            flag("Whether extended attributes are supported."),
        )
        .attribute("is_protected", flag("Whether the volume is protected."))
        .attribute("is_shared_volume", flag("Whether the volume is a cluster shared volume."))
        .attribute("label", string("Volume label."))
        .attribute("logical_size_bytes", int("Volume size in bytes."))
        .attribute("mount_points", strings("Mount points."))
        .attribute("mount_type", string("Mount type."))
        .attribute("network_path", string("Network path for network volumes."))
        .attribute("used_size_bytes", int("Used space in bytes."))
}

fn vss_writer() -> Block {
    Block::new()
        .attribute("is_writer_excluded", flag("Whether the writer is excluded from backups."))
        .attribute("writer_name", string("Writer name."))
}

fn sql_protection_source() -> Block {
    Block::new()
        .attribute(
            "is_available_for_vss_backup",
            flag("Whether the database can be backed up through VSS."),
        )
        .attribute("created_timestamp", string("When the database was created."))
        .attribute("database_name", string("Database name."))
        .attribute("db_aag_entity_id", int("Id of the availability group, if any."))
        .attribute("db_aag_name", string("Name of the availability group, if any."))
        .attribute("db_compatibility_level", int("Compatibility level."))
        .attribute("db_file_groups", strings("File groups."))
        .attribute("db_files", objects("database_file_information", "Database files."))
        .attribute("db_owner_username", string("Owner of the database."))
        .attribute(
            "default_database_location",
            string("Default data file location of the instance."),
        )
        .attribute(
            "default_log_location",
            string("Default log file location of the instance."),
        )
        .attribute("id", object("sql_source_id", "SQL-specific identity."))
        .attribute("is_encrypted", flag("Whether TDE is enabled."))
        .attribute("name", string("Instance or database name."))
        .attribute("owner_id", int("Id of the owning instance."))
        .attribute("recovery_model", string("Recovery model."))
        .attribute("sql_server_db_state", string("Database state."))
        .attribute(
            "sql_server_instance_version",
            object("sql_server_instance_version", "SQL Server version."),
        )
        .attribute("type", string("Kind of SQL source (kInstance, kDatabase, ...)."))
}

fn database_file_information() -> Block {
    Block::new()
        .attribute("file_type", string("File type."))
        .attribute("full_path", string("Full path of the file."))
        .attribute("size_bytes", int("File size in bytes."))
}

fn sql_source_id() -> Block {
    Block::new()
        .attribute("created_date_msecs", int("Creation time in milliseconds."))
        .attribute("database_id", int("Database id within the instance."))
        .attribute("instance_id", string("Instance UUID."))
}

fn sql_server_instance_version() -> Block {
    Block::new()
        .attribute("build", float("Build number."))
        .attribute("major_version", float("Major version."))
        .attribute("minor_version", float("Minor version."))
        .attribute("revision", float("Revision."))
        .attribute("version_string", string("Full version string."))
}

// ── Registration ─────────────────────────────────────────────────────

fn registration_info() -> Block {
    Block::new()
        .attribute(
            "access_info",
            object("connector_parameters", "How the cluster reaches the source."),
        )
        .attribute("allowed_ip_addresses", strings("IP addresses allowed to connect."))
        .attribute(
            "authentication_error_message",
            string("Last authentication error."),
        )
        .attribute("authentication_status", string("Registration progress."))
        .attribute("blacklisted_ip_addresses", strings("Blacklisted IP addresses."))
        .attribute("denied_ip_addresses", strings("IP addresses denied access."))
        .attribute("environments", strings("Environments registered on the source."))
        .attribute("is_db_authenticated", flag("Whether the database is authenticated."))
        .attribute(
            "is_storage_array_snapshot_enabled",
            flag("Whether storage array snapshots are enabled."),
        )
        .attribute(
            "link_vms_across_vcenter",
            flag("Whether VMs are linked across vCenters."),
        )
        .attribute(
            "minimum_free_space_gb",
            int("Minimum free space in GiB below which backups stop."),
        )
        .attribute(
            "minimum_free_space_percent",
            int("Minimum free space percentage below which backups stop."),
        )
        .attribute("password", string("Registration password.").sensitive())
        .attribute("physical_params", object("physical_params", "Physical host parameters."))
        .attribute("progress_monitor_path", string("Path of the registration progress monitor."))
        .attribute("refresh_error_message", string("Last refresh error."))
        .attribute("refresh_time_usecs", int("Last refresh time in microseconds."))
        .attribute(
            "registered_apps_info",
            objects("registered_app_info", "Applications registered on the source."),
        )
        .attribute(
            "registration_time_usecs",
            int("Registration time in microseconds."),
        )
        .attribute("subnets", objects("subnet", "Subnets whitelisted for the source."))
        .attribute(
            "throttling_policy",
            object("throttling_policy", "Source-level throttling policy."),
        )
        .attribute(
            "throttling_policy_overrides",
            objects("throttling_policy_override", "Per-datastore throttling overrides."),
        )
        .attribute(
            "use_o_auth_for_exchange_online",
            flag("Whether OAuth is used for Exchange Online."),
        )
        .attribute("use_vm_bios_uuid", flag("Whether VMs are identified by BIOS UUID."))
        .attribute("user_messages", strings("Messages for the user."))
        .attribute("username", string("Registration username."))
        .attribute("vlan_params", object("vlan_parameters", "VLAN used to reach the source."))
        .attribute("warning_messages", strings("Registration warnings."))
}

fn connector_parameters() -> Block {
    Block::new()
        .attribute("connection_id", int("Connection id."))
        .attribute("connector_group_id", int("Connector group id."))
        .attribute("endpoint", string("Endpoint of the source."))
        .attribute("environment", string("Environment of the source."))
        .attribute("id", int("Source id."))
        .attribute("version", int("Version of the connection parameters."))
}

fn physical_params() -> Block {
    Block::new()
        .attribute("applications", strings("Applications registered on the host."))
        .attribute("password", string("Host password.").sensitive())
        .attribute(
            "throttling_config",
            object("throttling_config", "Agent CPU and network throttling."),
        )
        .attribute("username", string("Host username."))
}

fn registered_app_info() -> Block {
    Block::new()
        .attribute(
            "authentication_error_message",
            string("Last authentication error of the application."),
        )
        .attribute("authentication_status", string("Registration progress of the application."))
        .attribute("environment", string("Environment of the application."))
        .attribute(
            "host_settings_check_results",
            objects("host_settings_check_result", "Results of host settings checks."),
        )
        .attribute("refresh_error_message", string("Last refresh error of the application."))
}

fn host_settings_check_result() -> Block {
    Block::new()
        .attribute("check_type", string("Kind of check."))
        .attribute("result_type", string("Outcome of the check."))
        .attribute("user_message", string("Detail for the outcome."))
}

fn subnet() -> Block {
    Block::new()
        .attribute("component", string("Component the entry applies to."))
        .attribute("description", string("Description."))
        .attribute("id", float("Entry id."))
        .attribute("ip", string("Subnet address."))
        .attribute("netmask_bits", float("Netmask length."))
        .attribute("netmask_ip4", string("IPv4 netmask."))
        .attribute("nfs_access", string("NFS access."))
        .attribute("nfs_all_squash", flag("Whether all NFS clients are squashed."))
        .attribute("nfs_root_squash", flag("Whether NFS root is squashed."))
        .attribute("s3_access", string("S3 access."))
        .attribute("smb_access", string("SMB access."))
        .attribute("tenant_id", string("Tenant the entry belongs to."))
}

fn vlan_parameters() -> Block {
    Block::new()
        .attribute("disable_vlan", flag("Whether the VLAN is disabled."))
        .attribute("interface_name", string("Interface name."))
        .attribute("vlan", float("VLAN id."))
}

// ── Throttling ───────────────────────────────────────────────────────

fn throttling_policy() -> Block {
    Block::new()
        .attribute("enforce_max_streams", flag("Whether the stream limit is enforced."))
        .attribute(
            "enforce_registered_source_max_backups",
            flag("Whether the concurrent backup limit is enforced."),
        )
        .attribute("is_enabled", flag("Whether throttling is enabled."))
        .attribute(
            "latency_thresholds",
            object("latency_thresholds", "Datastore latency thresholds."),
        )
        .attribute("max_concurrent_streams", float("Maximum concurrent streams."))
        .attribute(
            "nas_source_params",
            object("nas_source_throttling_params", "NAS-specific limits."),
        )
        .attribute(
            "registered_source_max_concurrent_backups",
            float("Maximum concurrent backups for the source."),
        )
        .attribute(
            "storage_array_snapshot_config",
            object("storage_array_snapshot_config", "Storage array snapshot limits."),
        )
}

fn latency_thresholds() -> Block {
    Block::new()
        .attribute(
            "active_task_msecs",
            int("Latency above which running tasks are throttled."),
        )
        .attribute(
            "new_task_msecs",
            int("Latency above which new tasks are not started."),
        )
}

fn nas_source_throttling_params() -> Block {
    Block::new()
        .attribute(
            "max_parallel_metadata_fetch_full_percentage",
            float("Parallel metadata fetch limit for full backups."),
        )
        .attribute(
            "max_parallel_metadata_fetch_incremental_percentage",
            float("Parallel metadata fetch limit for incremental backups."),
        )
        .attribute(
            "max_parallel_read_write_full_percentage",
            float("Parallel read/write limit for full backups."),
        )
        .attribute(
            "max_parallel_read_write_incremental_percentage",
            float("Parallel read/write limit for incremental backups."),
        )
}

fn storage_array_snapshot_config() -> Block {
    Block::new()
        .attribute(
            "is_max_snapshots_config_enabled",
            flag("Whether the snapshot count limit is enabled."),
        )
        .attribute(
            "is_max_space_config_enabled",
            flag("Whether the space limit is enabled."),
        )
        .attribute(
            "max_snapshot_config",
            object("max_snapshot_config", "Snapshot count limit."),
        )
        .attribute("max_space_config", object("max_space_config", "Space limit."))
        .attribute(
            "throttling_policies",
            objects("storage_array_snapshot_throttling_policy", "Per-volume overrides."),
        )
}

fn max_snapshot_config() -> Block {
    Block::new().attribute("max_snapshots", float("Maximum snapshots per volume."))
}

fn max_space_config() -> Block {
    Block::new().attribute("max_space_pct", float("Maximum space used by snapshots, in percent."))
}

fn storage_array_snapshot_throttling_policy() -> Block {
    Block::new()
        .attribute("id", int("Volume id."))
        .attribute(
            "is_max_snapshots_config_enabled",
            flag("Whether the snapshot count limit is enabled."),
        )
        .attribute(
            "is_max_space_config_enabled",
            flag("Whether the space limit is enabled."),
        )
        .attribute(
            "max_snapshot_config",
            object("max_snapshot_config", "Snapshot count limit."),
        )
        .attribute("max_space_config", object("max_space_config", "Space limit."))
}

fn throttling_policy_override() -> Block {
    Block::new()
        .attribute("datastore_id", int("Datastore id."))
        .attribute("datastore_name", string("Datastore name."))
        .attribute(
            "throttling_policy",
            object("throttling_policy", "Policy applied to the datastore."),
        )
}

fn throttling_config() -> Block {
    Block::new()
        .attribute(
            "cpu_throttling_config",
            object("throttling_configuration", "CPU throttling."),
        )
        .attribute(
            "network_throttling_config",
            object("throttling_configuration", "Network throttling."),
        )
}

fn throttling_configuration() -> Block {
    Block::new()
        .attribute("fixed_threshold", int("Threshold used with the kFixed pattern."))
        .attribute("pattern_type", string("How the threshold is applied."))
        .attribute(
            "throttling_windows",
            objects("throttling_window", "Thresholds for weekly time windows."),
        )
}

fn throttling_window() -> Block {
    Block::new()
        .attribute("day_time_window", object("day_time_window", "When the threshold applies."))
        .attribute("threshold", int("Threshold inside the window."))
}

fn day_time_window() -> Block {
    Block::new()
        .attribute("end_time", object("day_time", "Window end."))
        .attribute("start_time", object("day_time", "Window start."))
}

fn day_time() -> Block {
    Block::new()
        .attribute("day", string("Day of the week."))
        .attribute("time", object("time_of_day", "Time of day."))
}

fn time_of_day() -> Block {
    Block::new()
        .attribute("hour", int("Hour (0-23)."))
        .attribute("minute", int("Minute (0-59)."))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::Mode;

    #[test]
    fn every_reference_resolves() {
        assert_eq!(schema().check_references(), Ok(()));
    }

    #[test]
    fn tenant_is_the_only_required_argument() {
        let schema = schema();
        let required: Vec<_> = schema
            .root()
            .iter()
            .filter(|(_, attr)| attr.mode == Mode::Required)
            .map(|(name, _)| name)
            .collect();
        assert_eq!(required, vec!["x_ibm_tenant_id"]);
    }

    #[test]
    fn output_is_a_computed_node_list() {
        let schema = schema();
        let attr = schema.root().get("protection_sources").unwrap();
        assert_eq!(attr.mode, Mode::Computed);
        assert_eq!(
            attr.ty,
            AttributeType::Nested {
                block: NODE_BLOCK,
                nesting: NestingMode::List,
            }
        );
    }

    #[test]
    fn credentials_are_sensitive() {
        let schema = schema();
        assert!(schema.root().get("encryption_key").unwrap().sensitive);
        assert!(
            schema
                .definition("registration_info")
                .unwrap()
                .get("password")
                .unwrap()
                .sensitive
        );
    }

    #[test]
    fn node_block_is_recursive() {
        let schema = schema();
        let node = schema.definition(NODE_BLOCK).unwrap();
        for child in ["nodes", "application_nodes"] {
            assert!(matches!(
                node.get(child).unwrap().ty,
                AttributeType::Nested { block: NODE_BLOCK, .. }
            ));
        }
    }
}
