// ── Runtime client configuration ──
//
// Describes *how* to reach the service. Carries credentials and
// transport tuning but never touches disk; brs-config builds one from a
// profile and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed on-prem clusters).
    DangerAcceptInvalid,
}

/// Everything needed to build a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL, e.g. `https://cluster/irisservices/api/v1/public`.
    pub endpoint: Url,
    pub api_key: SecretString,
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: Url, api_key: SecretString) -> Self {
        Self {
            endpoint,
            api_key,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}
