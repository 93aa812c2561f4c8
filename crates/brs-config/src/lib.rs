//! Shared configuration for the brs CLI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `brs_core::ClientConfig`. The CLI layers its own
//! flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use brs_core::{ClientConfig, TlsVerification};

/// Keyring service name; entries are keyed `{profile}/api-key`.
pub const KEYRING_SERVICE: &str = "brs";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named cluster profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named cluster profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Service base URL (e.g., "https://cluster/irisservices/api/v1/public").
    pub endpoint: String,

    /// Tenant sent as `X-IBM-Tenant-Id` when no flag overrides it.
    pub tenant_id: Option<String>,

    /// API key (plaintext; prefer keyring or env var).
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "brs", "brs").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("brs");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from a file + environment.
///
/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("BRS_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it, creating parent directories.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve an API key from the credential chain (no CLI flag step).
pub fn resolve_api_key(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's api_key_env → env var lookup
    if let Some(ref env_name) = profile.api_key_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name)) {
        match entry.get_password() {
            Ok(secret) => return Ok(SecretString::from(secret)),
            Err(e) => debug!(profile = profile_name, error = %e, "no keyring entry"),
        }
    }

    // 3. Plaintext in config
    if let Some(ref key) = profile.api_key {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a profile's API key in the system keyring.
pub fn store_api_key(profile_name: &str, key: &SecretString) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name))?;
    entry.set_password(key.expose_secret())?;
    Ok(())
}

fn keyring_user(profile_name: &str) -> String {
    format!("{profile_name}/api-key")
}

/// Parse a profile's endpoint into a URL.
pub fn parse_endpoint(raw: &str) -> Result<url::Url, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Validation {
        field: "endpoint".into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Build a `ClientConfig` from a profile with no CLI flag overrides.
///
/// Unset profile fields fall back to `defaults`.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let api_key = resolve_api_key(profile, profile_name)?;
    client_config_with_key(profile, defaults, api_key)
}

/// Build a `ClientConfig` from a profile and an already resolved API key.
pub fn client_config_with_key(
    profile: &Profile,
    defaults: &Defaults,
    api_key: SecretString,
) -> Result<ClientConfig, ConfigError> {
    let endpoint = parse_endpoint(&profile.endpoint)?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(ClientConfig {
        endpoint,
        api_key,
        tls,
        timeout,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"
default_profile = "lab"

[defaults]
output = "json"
timeout = 45

[profiles.lab]
endpoint = "https://cluster.lab/irisservices/api/v1/public"
tenant_id = "tenant-a/"
api_key = "plain-key"
ca_cert = "/etc/ssl/lab-ca.pem"
"#;

    fn lab_profile() -> Profile {
        Profile {
            endpoint: "https://cluster.lab/irisservices/api/v1/public".into(),
            api_key: Some("plain-key".into()),
            ..Profile::default()
        }
    }

    #[test]
    fn loads_profiles_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("lab"));
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.defaults.timeout, 45);
        assert!(!cfg.defaults.insecure);

        let lab = &cfg.profiles["lab"];
        assert_eq!(lab.tenant_id.as_deref(), Some("tenant-a/"));
        assert_eq!(lab.ca_cert, Some(PathBuf::from("/etc/ssl/lab-ca.pem")));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.output, "table");
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.profiles.insert("lab".into(), lab_profile());

        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(
            loaded.profiles["lab"].endpoint,
            "https://cluster.lab/irisservices/api/v1/public"
        );
    }

    #[test]
    fn ca_cert_selects_custom_ca() {
        let profile = Profile {
            ca_cert: Some(PathBuf::from("/etc/ssl/lab-ca.pem")),
            timeout: Some(5),
            ..lab_profile()
        };
        let cfg = profile_to_client_config(&profile, "brs-test-ca", &Defaults::default()).unwrap();
        assert_eq!(
            cfg.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/ssl/lab-ca.pem"))
        );
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.endpoint.host_str(), Some("cluster.lab"));
    }

    #[test]
    fn insecure_default_wins_over_ca() {
        let defaults = Defaults {
            insecure: true,
            ..Defaults::default()
        };
        let profile = Profile {
            ca_cert: Some(PathBuf::from("/etc/ssl/lab-ca.pem")),
            ..lab_profile()
        };
        let cfg = profile_to_client_config(&profile, "brs-test-insecure", &defaults).unwrap();
        assert_eq!(cfg.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn bad_endpoint_is_a_validation_error() {
        let profile = Profile {
            endpoint: "not a url".into(),
            ..lab_profile()
        };
        let err = profile_to_client_config(&profile, "brs-test-url", &Defaults::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "endpoint"));
    }

    #[test]
    fn no_key_anywhere_is_no_credentials() {
        let profile = Profile {
            api_key: None,
            api_key_env: Some("BRS_TEST_UNSET_KEY_VARIABLE".into()),
            ..lab_profile()
        };
        let err = resolve_api_key(&profile, "brs-test-no-such-profile").unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { .. }));
    }
}
