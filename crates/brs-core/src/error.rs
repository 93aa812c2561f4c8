// ── Core error types ──
//
// `CoreError` is what data sources work with; consumers never match on
// HTTP status codes or reqwest errors directly. `ReadError` wraps a
// `CoreError` with the data source, operation, and step it came from.

use std::fmt::Write as _;

use thiserror::Error;

use crate::schema::SchemaError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Client errors ────────────────────────────────────────────────
    #[error("Cannot initialize backup/recovery client: {message}")]
    ClientInit { message: String },

    #[error("Cannot connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out")]
    Timeout,

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Invalid value for argument `{name}`: {message}")]
    InvalidArgument { name: String, message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// Service error code, when the body carried one.
        code: Option<String>,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Unexpected response from service: {message}")]
    InvalidResponse { message: String },

    // ── Schema errors ────────────────────────────────────────────────
    #[error("Cannot flatten record: {0}")]
    Flatten(#[source] SchemaError),

    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaError),

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<brs_api::Error> for CoreError {
    fn from(err: brs_api::Error) -> Self {
        match err {
            brs_api::Error::Authentication { message } => CoreError::AuthenticationFailed { message },
            brs_api::Error::InvalidApiKey => CoreError::AuthenticationFailed {
                message: "Invalid API key".into(),
            },
            brs_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        code: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            brs_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            brs_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            brs_api::Error::Api {
                message,
                code,
                status,
            } => CoreError::Api {
                message,
                code,
                status: Some(status),
            },
            brs_api::Error::Deserialization { message, .. } => {
                CoreError::InvalidResponse { message }
            }
        }
    }
}

// ── Read diagnostics ─────────────────────────────────────────────────

/// A failed data-source read.
///
/// `step` names the stage that failed (`initialize-client`,
/// `build-request`, `protection_sources-to-map`, ...). The remote call
/// itself carries no step; its summary names the operation instead.
#[derive(Debug, Error)]
#[error("{summary}")]
pub struct ReadError {
    pub resource: &'static str,
    pub operation: &'static str,
    pub step: Option<&'static str>,
    pub summary: String,
    #[source]
    pub source: CoreError,
}

impl ReadError {
    pub fn new(
        resource: &'static str,
        operation: &'static str,
        step: Option<&'static str>,
        summary: impl Into<String>,
        source: CoreError,
    ) -> Self {
        Self {
            resource,
            operation,
            step,
            summary: summary.into(),
            source,
        }
    }

    /// Multi-line trace for debug logging.
    pub fn debug_message(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "---");
        let _ = writeln!(out, "id: {}", self.discriminator());
        let _ = writeln!(out, "summary: {}", self.summary);
        let _ = writeln!(out, "severity: error");
        let _ = writeln!(out, "resource: {}", self.resource);
        let _ = writeln!(out, "operation: {}", self.operation);
        let _ = writeln!(out, "cause: {}", self.source);
        out.push_str("---");
        out
    }

    /// Stable identifier for this failure site.
    pub fn discriminator(&self) -> String {
        let resource = self.resource.trim_start_matches("(Data) ");
        match self.step {
            Some(step) => format!("{resource}-{}-{step}", self.operation),
            None => format!("{resource}-{}", self.operation),
        }
    }
}
