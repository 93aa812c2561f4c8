use thiserror::Error;

/// Top-level error type for the `brs-api` crate.
///
/// Covers every failure mode of the HTTP surface: authentication,
/// transport, service-reported errors, and response decoding.
/// `brs-core` maps these into data-source diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The API key could not be turned into a request header.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Invalid or expired API key (rejected by the service).
    #[error("Invalid API key")]
    InvalidApiKey,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Service ─────────────────────────────────────────────────────
    /// Structured error reported by the service.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: u16,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}
