//! Integration tests for the `brs` CLI binary.
//!
//! Argument parsing, help output, shell completions, and error handling
//! run without a cluster; the `sources` round trips run against wiremock.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOURCES_PATH: &str = "/irisservices/api/v1/public/protectionSources";

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `brs` binary with env isolation.
///
/// Clears all `BRS_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn brs_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("brs");
    cmd.env("HOME", "/tmp/brs-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/brs-cli-test-nonexistent")
        .env_remove("RUST_LOG")
        .env_remove("BRS_PROFILE")
        .env_remove("BRS_CONFIG")
        .env_remove("BRS_ENDPOINT")
        .env_remove("BRS_API_KEY")
        .env_remove("BRS_TENANT")
        .env_remove("BRS_OUTPUT")
        .env_remove("BRS_INSECURE")
        .env_remove("BRS_TIMEOUT")
        .env_remove("BRS_ENCRYPTION_KEY");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn base_url(server: &MockServer) -> String {
    format!("{}/irisservices/api/v1/public", server.uri())
}

fn two_hosts() -> Value {
    json!([
        {
            "protectionSource": {
                "id": 1,
                "name": "host1",
                "environment": "kPhysical",
                "physicalProtectionSource": { "hostName": "host1", "type": "kHost" }
            },
            "applicationNodes": [
                {
                    "protectionSource": {
                        "id": 2,
                        "name": "sales",
                        "environment": "kSQL",
                        "sqlProtectionSource": { "databaseName": "sales", "type": "kDatabase" }
                    }
                }
            ],
            "logicalSize": 4096
        },
        {
            "protectionSource": { "id": 3, "name": "host2", "environment": "kPhysical" }
        }
    ])
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = brs_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    brs_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("protection sources")
            .and(predicate::str::contains("sources"))
            .and(predicate::str::contains("schema"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    brs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brs"));
}

#[test]
fn test_invalid_subcommand() {
    let output = brs_cmd().arg("restore").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    brs_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    brs_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Schema ──────────────────────────────────────────────────────────

#[test]
fn test_schema_prints_exported_json() {
    let output = brs_cmd().arg("schema").output().unwrap();
    assert!(output.status.success());

    let schemas: Value = serde_json::from_slice(&output.stdout).unwrap();
    let block = &schemas["ibm_backup_recovery_protection_sources"]["block"];
    assert_eq!(block["attributes"]["x_ibm_tenant_id"]["required"], true);
    assert_eq!(block["attributes"]["encryption_key"]["sensitive"], true);
    assert!(block["block_types"]["protection_sources"].is_object());
}

// ── Config errors ───────────────────────────────────────────────────

#[test]
fn test_sources_without_config_is_a_usage_error() {
    let output = brs_cmd().args(["sources", "--tenant", "t1"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("No endpoint configured"), "{text}");
}

#[test]
fn test_sources_without_tenant_is_a_usage_error() {
    let output = brs_cmd()
        .args(["sources", "--endpoint", "https://cluster/api", "--api-key", "k"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("No tenant configured"));
}

#[test]
fn test_config_path_honors_flag() {
    brs_cmd()
        .args(["config", "path", "--config", "/tmp/brs-elsewhere.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/brs-elsewhere.toml"));
}

// ── End-to-end reads ────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_sources_json_from_flags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .and(header("X-IBM-Tenant-Id", "t1"))
        .and(header("Authorization", "Bearer test-key"))
        .and(query_param("environments", "kPhysical,kSQL"))
        .and(query_param("includeVMFolders", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_hosts()))
        .expect(1)
        .mount(&server)
        .await;

    let output = brs_cmd()
        .args(["--endpoint", &base_url(&server), "--api-key", "test-key"])
        .args(["--tenant", "t1", "-o", "json-compact", "sources"])
        .args(["--environments", "kPhysical,kSQL", "--include-vm-folders", "false"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let state: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(state["id"].as_str().is_some_and(|id| !id.is_empty()));

    let attributes = &state["attributes"];
    assert_eq!(attributes["x_ibm_tenant_id"], "t1");
    assert_eq!(attributes["environments"], json!(["kPhysical", "kSQL"]));
    assert_eq!(attributes["include_vm_folders"], false);

    let roots = attributes["protection_sources"].as_array().unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(
        roots[0]["protection_source"][0]["physical_protection_source"][0]["host_name"],
        "host1"
    );
    assert_eq!(
        roots[0]["application_nodes"][0]["protection_source"][0]["sql_protection_source"][0]
            ["database_name"],
        "sales"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sources_from_profile_renders_plain_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .and(header("X-IBM-Tenant-Id", "tenant-a/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_hosts()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "default_profile = \"cli-test\"\n\n\
             [profiles.cli-test]\n\
             endpoint = \"{}\"\n\
             tenant_id = \"tenant-a/\"\n\
             api_key = \"plain-key\"\n",
            base_url(&server)
        ),
    )
    .unwrap();

    brs_cmd()
        .arg("--config")
        .arg(&config)
        .args(["sources", "-o", "plain"])
        .assert()
        .success()
        .stdout("host1\nsales\nhost2\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sources_table_shows_the_tree() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_hosts()))
        .mount(&server)
        .await;

    brs_cmd()
        .args(["--endpoint", &base_url(&server), "--api-key", "k", "--tenant", "t1"])
        .args(["sources", "-o", "table"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Source")
                .and(predicate::str::contains("└ sales"))
                .and(predicate::str::contains("4096")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sensitive_values_are_masked_in_every_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .and(query_param("encryptionKey", "enc-key-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "protectionSource": { "id": 1, "name": "host1", "environment": "kPhysical" },
            "registrationInfo": {
                "username": "svc-backup",
                "password": "reg-pass-7",
                "physicalParams": { "username": "root", "password": "host-pass-9" }
            }
        }])))
        .mount(&server)
        .await;

    for format in ["json", "yaml"] {
        let output = brs_cmd()
            .args(["--endpoint", &base_url(&server), "--api-key", "k", "--tenant", "t1"])
            .args(["-o", format, "sources", "--encryption-key", "enc-key-42"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{}", combined_output(&output));

        let stdout = String::from_utf8_lossy(&output.stdout);
        for secret in ["enc-key-42", "reg-pass-7", "host-pass-9"] {
            assert!(!stdout.contains(secret), "{format} output leaked {secret}:\n{stdout}");
        }
        assert!(stdout.contains("(sensitive value)"), "{stdout}");
        assert!(stdout.contains("svc-backup"), "{stdout}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_key_exits_with_auth_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let output = brs_cmd()
        .args(["--endpoint", &base_url(&server), "--api-key", "bad", "--tenant", "t1"])
        .arg("sources")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("Authentication failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_environment_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let output = brs_cmd()
        .args(["--endpoint", &base_url(&server), "--api-key", "k", "--tenant", "t1"])
        .args(["sources", "--environment", "kMystery"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("environment"));
}
