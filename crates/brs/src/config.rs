//! CLI configuration: thin wrapper around `brs_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--endpoint, --api-key, --tenant, etc.).

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;

use brs_core::{ClientConfig, TlsVerification};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use brs_config::{Config, Profile, config_path, save_config_to};

/// Where a read goes: the client settings plus the tenant to send.
#[derive(Debug)]
pub struct Target {
    pub client: ClientConfig,
    pub tenant: String,
}

// ── CLI-specific helpers ────────────────────────────────────────────

/// The config file in effect: `--config` / `BRS_CONFIG`, else the platform path.
pub fn config_file(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load the config file in effect. A missing file yields the defaults.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(brs_config::load_config_from(&config_file(global))?)
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Error for a profile name missing from `cfg`, listing the ones it has.
pub fn profile_not_found(name: String, cfg: &Config) -> CliError {
    let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
    available.sort();
    CliError::ProfileNotFound {
        name,
        available: if available.is_empty() {
            "(none)".into()
        } else {
            available.join(", ")
        },
    }
}

/// Output format: flag > config default > table.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// Build the read target from the config file, profile, and CLI overrides.
pub fn resolve_target(global: &GlobalOpts, cfg: &Config) -> Result<Target, CliError> {
    let profile_name = active_profile_name(global, cfg);

    // An explicitly named profile must exist
    let profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => Some(profile),
        None if global.profile.is_some() => return Err(profile_not_found(profile_name, cfg)),
        None => None,
    };

    let client = match profile {
        Some(profile) => resolve_profile(profile, &profile_name, global, cfg)?,
        None => resolve_flags_only(&profile_name, global, cfg)?,
    };

    let tenant = global
        .tenant
        .clone()
        .or_else(|| profile.and_then(|p| p.tenant_id.clone()))
        .ok_or(CliError::NoTenant)?;

    Ok(Target { client, tenant })
}

/// Translate a `Profile` + global flags into a `ClientConfig`.
///
/// CLI flag overrides take priority over profile values.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<ClientConfig, CliError> {
    let mut effective = profile.clone();
    if let Some(ref endpoint) = global.endpoint {
        effective.endpoint.clone_from(endpoint);
    }
    if global.insecure {
        effective.insecure = Some(true);
    }
    if global.timeout.is_some() {
        effective.timeout = global.timeout;
    }

    // API key: flag > credential chain
    let api_key = match global.api_key {
        Some(ref key) => SecretString::from(key.clone()),
        None => brs_config::resolve_api_key(profile, profile_name)?,
    };

    Ok(brs_config::client_config_with_key(
        &effective,
        &cfg.defaults,
        api_key,
    )?)
}

/// No profile found: build from CLI flags / env vars alone.
fn resolve_flags_only(
    profile_name: &str,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<ClientConfig, CliError> {
    let raw = global.endpoint.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_file(global).display().to_string(),
    })?;
    let endpoint = brs_config::parse_endpoint(raw)?;

    let api_key = global
        .api_key
        .clone()
        .map(SecretString::from)
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.into(),
        })?;

    let mut client = ClientConfig::new(endpoint, api_key);
    if global.insecure || cfg.defaults.insecure {
        client.tls = TlsVerification::DangerAcceptInvalid;
    }
    client.timeout = Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout));
    Ok(client)
}
