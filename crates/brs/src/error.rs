//! CLI error types with miette diagnostics.
//!
//! Maps read, config, and schema failures into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use brs_config::ConfigError;
use brs_core::{CoreError, ReadError, SchemaError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to {url}")]
    #[diagnostic(
        code(brs::connection_failed),
        help(
            "Check that the cluster is reachable: {reason}\n\
             Self-signed certificate? Try --insecure (-k) or set ca_cert in your profile."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Could not initialize the backup/recovery client")]
    #[diagnostic(
        code(brs::client_init),
        help("{message}\nCheck the endpoint URL, API key, and ca_cert of your profile.")
    )]
    ClientInit { message: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(brs::auth_failed),
        help(
            "{message}\n\
             Verify your API key. Run: brs config set-key --profile <name>"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(brs::no_credentials),
        help(
            "Configure credentials with: brs config init\n\
             Or set the BRS_API_KEY environment variable."
        )
    )]
    NoCredentials { profile: String },

    #[error("No tenant configured")]
    #[diagnostic(
        code(brs::no_tenant),
        help("Pass --tenant, set BRS_TENANT, or add tenant_id to your profile.")
    )]
    NoTenant,

    // ── API ──────────────────────────────────────────────────────────
    #[error("{summary}")]
    #[diagnostic(code(brs::api_error))]
    ApiError {
        summary: String,
        status: Option<u16>,
    },

    #[error("{summary}")]
    #[diagnostic(code(brs::read_failed), help("Rerun with -vv for the full error trace."))]
    ReadFailed {
        summary: String,
        #[source]
        source: CoreError,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(brs::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(brs::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: brs config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No endpoint configured")]
    #[diagnostic(
        code(brs::no_config),
        help(
            "Create a profile with: brs config init\n\
             Expected at: {path}\n\
             Or pass --endpoint and --api-key."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(brs::config))]
    Config(Box<ConfigError>),

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request timed out")]
    #[diagnostic(
        code(brs::timeout),
        help("Increase timeout with --timeout or check cluster responsiveness.")
    )]
    Timeout,

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON: {0}")]
    #[diagnostic(code(brs::json))]
    Json(#[from] serde_json::Error),

    #[error("Could not render YAML: {0}")]
    #[diagnostic(code(brs::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::ClientInit { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::ApiError {
                status: Some(403), ..
            } => exit_code::PERMISSION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::NoTenant
            | Self::NoConfig { .. }
            | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(Box::new(other)),
        }
    }
}

impl From<SchemaError> for CliError {
    fn from(err: SchemaError) -> Self {
        CliError::Validation {
            field: "arguments".into(),
            reason: err.to_string(),
        }
    }
}

// ── ReadError → CliError mapping ─────────────────────────────────────

impl From<ReadError> for CliError {
    fn from(err: ReadError) -> Self {
        let ReadError {
            summary, source, ..
        } = err;
        match source {
            CoreError::ClientInit { message } => CliError::ClientInit { message },

            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Timeout => CliError::Timeout,

            CoreError::InvalidArgument { name, message } => CliError::Validation {
                field: name,
                reason: message,
            },

            CoreError::Api { status, .. } => CliError::ApiError { summary, status },

            source => CliError::ReadFailed { summary, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_error(step: Option<&'static str>, source: CoreError) -> ReadError {
        ReadError::new("(Data) test", "read", step, "summary", source)
    }

    #[test]
    fn exit_codes_follow_the_cause() {
        let auth: CliError = read_error(
            None,
            CoreError::AuthenticationFailed {
                message: "Invalid API key".into(),
            },
        )
        .into();
        assert_eq!(auth.exit_code(), exit_code::AUTH);

        let usage: CliError = read_error(
            Some("build-request"),
            CoreError::InvalidArgument {
                name: "environment".into(),
                message: "unknown variant".into(),
            },
        )
        .into();
        assert_eq!(usage.exit_code(), exit_code::USAGE);

        let init: CliError = read_error(
            Some("initialize-client"),
            CoreError::ClientInit {
                message: "bad CA".into(),
            },
        )
        .into();
        assert_eq!(init.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn api_errors_keep_the_read_summary() {
        let err: CliError = ReadError::new(
            "(Data) test",
            "read",
            None,
            "ListProtectionSources failed: API error: down",
            CoreError::Api {
                message: "down".into(),
                code: None,
                status: Some(503),
            },
        )
        .into();
        assert_eq!(err.to_string(), "ListProtectionSources failed: API error: down");
        assert_eq!(err.exit_code(), exit_code::GENERAL);

        let forbidden: CliError = read_error(
            None,
            CoreError::Api {
                message: "not allowed".into(),
                code: Some("KPermissionDenied".into()),
                status: Some(403),
            },
        )
        .into();
        assert_eq!(forbidden.exit_code(), exit_code::PERMISSION);
    }
}
