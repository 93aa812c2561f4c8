// Async HTTP client for the backup/recovery protection sources API.
//
// Base path: configured endpoint (e.g. `https://host/irisservices/api/v1/public/`)
// Auth: `Authorization: Bearer <api key>`, tenant via `X-IBM-Tenant-Id`

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::options::ListProtectionSourcesOptions;
use crate::transport::TransportConfig;
use crate::types::ProtectionSourceNode;

const TENANT_HEADER: &str = "X-IBM-Tenant-Id";

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the protection sources API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BackupRecoveryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackupRecoveryClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `Authorization: Bearer <key>` as a default header.
    pub fn from_api_key(
        base_url: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = transport.build_client(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base URL ends with `/` so relative joins append.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        tenant_id: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self
            .http
            .get(url)
            .header(TENANT_HEADER, tenant_id)
            .query(params)
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidApiKey;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
                code: err.error_code,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                code: None,
            }
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// List the protection source trees visible to the tenant.
    ///
    /// Returns the root nodes; children are nested in each node.
    pub async fn list_protection_sources(
        &self,
        options: &ListProtectionSourcesOptions,
    ) -> Result<Vec<ProtectionSourceNode>, Error> {
        self.get_with_params(
            "protectionSources",
            &options.x_ibm_tenant_id,
            &options.query_params(),
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = BackupRecoveryClient::from_reqwest(
            "https://cluster.example/irisservices/api/v1/public",
            reqwest::Client::new(),
        )
        .unwrap();
        assert_eq!(
            client.base_url().join("protectionSources").unwrap().as_str(),
            "https://cluster.example/irisservices/api/v1/public/protectionSources"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = BackupRecoveryClient::from_reqwest("not a url", reqwest::Client::new());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
