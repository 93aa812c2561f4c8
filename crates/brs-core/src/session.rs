// ── Client session ──
//
// Data sources never build HTTP clients themselves. They ask a session
// for one, and the session reports a construction failure at that point
// rather than when it was created.

use std::future::Future;

use brs_api::transport::{TlsMode, TransportConfig};
use brs_api::{BackupRecoveryClient, ListProtectionSourcesOptions, ProtectionSourceNode};
use tracing::debug;

use crate::config::{ClientConfig, TlsVerification};
use crate::error::CoreError;

/// The remote operations the protection sources data source needs.
pub trait ProtectionSourcesApi: Send + Sync {
    fn list_protection_sources(
        &self,
        options: &ListProtectionSourcesOptions,
    ) -> impl Future<Output = Result<Vec<ProtectionSourceNode>, brs_api::Error>> + Send;
}

impl ProtectionSourcesApi for BackupRecoveryClient {
    fn list_protection_sources(
        &self,
        options: &ListProtectionSourcesOptions,
    ) -> impl Future<Output = Result<Vec<ProtectionSourceNode>, brs_api::Error>> + Send {
        BackupRecoveryClient::list_protection_sources(self, options)
    }
}

/// Hands out the backend client to data sources.
pub trait ClientSession: Send + Sync {
    type Client: ProtectionSourcesApi;

    fn backup_recovery_client(&self) -> Result<&Self::Client, CoreError>;
}

/// Session backed by a real [`BackupRecoveryClient`].
#[derive(Debug)]
pub struct Session {
    client: Result<BackupRecoveryClient, String>,
}

impl Session {
    /// Build the client from `config`.
    ///
    /// Never fails; a construction error is kept and returned by
    /// [`ClientSession::backup_recovery_client`].
    pub fn connect(config: &ClientConfig) -> Self {
        let transport = TransportConfig {
            tls: match &config.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: config.timeout,
        };

        let client =
            BackupRecoveryClient::from_api_key(config.endpoint.as_str(), &config.api_key, &transport)
                .map_err(|e| e.to_string());
        if let Err(ref message) = client {
            debug!(endpoint = %config.endpoint, %message, "client construction failed");
        }
        Self { client }
    }
}

impl ClientSession for Session {
    type Client = BackupRecoveryClient;

    fn backup_recovery_client(&self) -> Result<&BackupRecoveryClient, CoreError> {
        self.client.as_ref().map_err(|message| CoreError::ClientInit {
            message: message.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn connect_builds_client() {
        let config = ClientConfig::new(
            "https://cluster.example/irisservices/api/v1/public"
                .parse()
                .unwrap(),
            SecretString::from("key".to_string()),
        );
        let session = Session::connect(&config);
        let client = session.backup_recovery_client().unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://cluster.example/irisservices/api/v1/public/"
        );
    }

    #[test]
    fn construction_failure_surfaces_on_use() {
        let mut config = ClientConfig::new(
            "https://cluster.example".parse().unwrap(),
            SecretString::from("key".to_string()),
        );
        config.tls = TlsVerification::CustomCa("/nonexistent/brs-ca.pem".into());
        let session = Session::connect(&config);
        assert!(matches!(
            session.backup_recovery_client(),
            Err(CoreError::ClientInit { ref message }) if message.contains("CA cert")
        ));
    }
}
