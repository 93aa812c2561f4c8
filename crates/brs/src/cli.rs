//! Clap derive structures for the `brs` CLI.
//!
//! Defines the command tree, global flags, and the `sources` filter
//! arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// brs -- list backup/recovery protection sources from the command line
#[derive(Debug, Parser)]
#[command(
    name = "brs",
    version,
    about = "Inspect backup/recovery protection sources",
    long_about = "Reads the protection source trees registered on a backup/recovery\n\
        cluster and renders them as a tree, JSON, or YAML.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Cluster profile to use
    #[arg(long, short = 'p', env = "BRS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "BRS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Service base URL (overrides profile)
    #[arg(long, short = 'e', env = "BRS_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// API key
    #[arg(long, env = "BRS_API_KEY", global = true, hide_env = true)]
    pub api_key: Option<String>,

    /// Tenant sent as X-IBM-Tenant-Id (overrides profile)
    #[arg(long, short = 't', env = "BRS_TENANT", global = true)]
    pub tenant: Option<String>,

    /// Output format (defaults to the config file's `defaults.output`)
    #[arg(long, short = 'o', env = "BRS_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "BRS_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "BRS_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented tree table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one source name per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List protection source trees
    #[command(alias = "src", alias = "s")]
    Sources(Box<SourcesArgs>),

    /// Print the data source schema as JSON
    Schema,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SOURCES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Filters for `brs sources`. Every flag maps onto one data source
/// argument; flags left off stay unset.
///
/// Boolean flags take an optional value: `--include-networks` means
/// true, `--include-networks false` sends an explicit false.
#[derive(Debug, Default, Args)]
pub struct SourcesArgs {
    /// Return only the source with this id
    #[arg(long = "id", value_name = "ID")]
    pub protection_source_id: Option<i64>,

    /// Only return sources of these environments (e.g. kPhysical,kSQL)
    #[arg(long, value_delimiter = ',', value_name = "ENV")]
    pub environments: Vec<String>,

    /// Only return sources of this environment (deprecated upstream)
    #[arg(long, value_name = "ENV")]
    pub environment: Option<String>,

    /// Depth of the returned trees
    #[arg(long, value_parser = parse_finite)]
    pub num_levels: Option<f64>,

    /// Node types to leave out
    #[arg(long, value_delimiter = ',', value_name = "TYPE")]
    pub exclude_types: Vec<String>,

    /// AWS node types to leave out
    #[arg(long, value_delimiter = ',', value_name = "TYPE")]
    pub exclude_aws_types: Vec<String>,

    /// Kubernetes node types to leave out
    #[arg(long, value_delimiter = ',', value_name = "TYPE")]
    pub exclude_kubernetes_types: Vec<String>,

    /// Office 365 node types to leave out
    #[arg(long = "exclude-office365-types", value_delimiter = ',', value_name = "TYPE")]
    pub exclude_office365_types: Vec<String>,

    /// Only return sources visible to these principals
    #[arg(long, value_delimiter = ',', value_name = "SID")]
    pub sids: Vec<String>,

    /// Node id to page under
    #[arg(long)]
    pub node_id: Option<i64>,

    /// Entities per page
    #[arg(long)]
    pub page_size: Option<i64>,

    /// Page cursor: entities after this id
    #[arg(long)]
    pub after_cursor_entity_id: Option<i64>,

    /// Page cursor: entities before this id
    #[arg(long)]
    pub before_cursor_entity_id: Option<i64>,

    /// Key used to encrypt returned source credentials
    #[arg(long, env = "BRS_ENCRYPTION_KEY", hide_env_values = true)]
    pub encryption_key: Option<String>,

    /// Caller identity reported to the service (UIUser, UIAuto, Helios)
    #[arg(long)]
    pub request_initiator_type: Option<String>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub get_teams_channels: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub has_valid_mailbox: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub has_valid_onedrive: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub is_security_group: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_datastores: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_networks: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_vm_folders: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_sfdc_fields: Option<bool>,

    #[arg(long = "include-system-v-apps", num_args = 0..=1, default_missing_value = "true")]
    pub include_system_v_apps: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_entity_permission_info: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_source_credentials: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_object_protection_info: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub prune_non_critical_info: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub prune_aggregation_info: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub use_cached_data: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub all_under_hierarchy: Option<bool>,
}

impl SourcesArgs {
    /// Build the argument object for a read. Flags left off are omitted.
    pub fn to_arguments(&self, tenant: &str) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert("x_ibm_tenant_id".into(), Value::from(tenant));

        let mut put = |key: &str, value: Option<Value>| {
            if let Some(value) = value {
                args.insert(key.into(), value);
            }
        };
        let list = |items: &[String]| (!items.is_empty()).then(|| Value::from(items.to_vec()));

        put("protection_source_id", self.protection_source_id.map(Value::from));
        put("environments", list(&self.environments));
        put("environment", self.environment.clone().map(Value::from));
        put("num_levels", self.num_levels.map(Value::from));
        put("exclude_types", list(&self.exclude_types));
        put("exclude_aws_types", list(&self.exclude_aws_types));
        put("exclude_kubernetes_types", list(&self.exclude_kubernetes_types));
        put("exclude_office365_types", list(&self.exclude_office365_types));
        put("sids", list(&self.sids));
        put("node_id", self.node_id.map(Value::from));
        put("page_size", self.page_size.map(Value::from));
        put("after_cursor_entity_id", self.after_cursor_entity_id.map(Value::from));
        put("before_cursor_entity_id", self.before_cursor_entity_id.map(Value::from));
        put("encryption_key", self.encryption_key.clone().map(Value::from));
        put(
            "request_initiator_type",
            self.request_initiator_type.clone().map(Value::from),
        );

        let flags = [
            ("get_teams_channels", self.get_teams_channels),
            ("has_valid_mailbox", self.has_valid_mailbox),
            ("has_valid_onedrive", self.has_valid_onedrive),
            ("is_security_group", self.is_security_group),
            ("include_datastores", self.include_datastores),
            ("include_networks", self.include_networks),
            ("include_vm_folders", self.include_vm_folders),
            ("include_sfdc_fields", self.include_sfdc_fields),
            ("include_system_v_apps", self.include_system_v_apps),
            ("include_entity_permission_info", self.include_entity_permission_info),
            ("include_source_credentials", self.include_source_credentials),
            ("include_object_protection_info", self.include_object_protection_info),
            ("prune_non_critical_info", self.prune_non_critical_info),
            ("prune_aggregation_info", self.prune_aggregation_info),
            ("use_cached_data", self.use_cached_data),
            ("all_under_hierarchy", self.all_under_hierarchy),
        ];
        for (key, flag) in flags {
            put(key, flag.map(Value::from));
        }

        args
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Store an API key in the system keyring
    SetKey {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

/// Parse an `f64`, rejecting `NaN` and infinities.
fn parse_finite(raw: &str) -> Result<f64, String> {
    let value = raw.parse::<f64>().map_err(|e| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("`{raw}` is not a finite number"))
    }
}
