#![allow(clippy::unwrap_used)]
// Integration tests for `BackupRecoveryClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brs_api::types::{Environment, PhysicalSourceType};
use brs_api::{BackupRecoveryClient, Error, ListProtectionSourcesOptions};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, BackupRecoveryClient) {
    let server = MockServer::start().await;
    let base = format!("{}/irisservices/api/v1/public", server.uri());
    let client = BackupRecoveryClient::from_reqwest(&base, reqwest::Client::new()).unwrap();
    (server, client)
}

const SOURCES_PATH: &str = "/irisservices/api/v1/public/protectionSources";

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_protection_sources_parses_tree() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "protectionSource": {
                "id": 1,
                "name": "Physical Servers",
                "environment": "kPhysical",
                "physicalProtectionSource": { "name": "Physical Servers", "type": "kGroup" }
            },
            "nodes": [
                {
                    "protectionSource": {
                        "id": 7,
                        "parentId": 1,
                        "name": "host1",
                        "environment": "kPhysical",
                        "physicalProtectionSource": {
                            "hostName": "host1",
                            "hostType": "kLinux",
                            "type": "kHost",
                            "vssWriters": [{ "isWriterExcluded": false, "writerName": "SqlServerWriter" }]
                        }
                    },
                    "logicalSize": 1024
                }
            ],
            "protectedSourcesSummary": [
                { "environment": "kPhysical", "leavesCount": 1, "totalLogicalSize": 1024 }
            ]
        }
    ]);

    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .and(header("X-IBM-Tenant-Id", "t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let nodes = client
        .list_protection_sources(&ListProtectionSourcesOptions::new("t1"))
        .await
        .unwrap();

    assert_eq!(nodes.len(), 1);
    let root = &nodes[0];
    let source = root.protection_source.as_ref().unwrap();
    assert_eq!(source.environment, Some(Environment::Physical));
    assert_eq!(
        source
            .physical_protection_source
            .as_ref()
            .unwrap()
            .source_type,
        Some(PhysicalSourceType::Group)
    );
    let children = root.nodes.as_ref().unwrap();
    assert_eq!(children.len(), 1);

    let host = children[0].protection_source.as_ref().unwrap();
    let physical = host.physical_protection_source.as_ref().unwrap();
    assert_eq!(physical.host_name.as_deref(), Some("host1"));
    assert_eq!(physical.vsswriters.as_ref().unwrap().len(), 1);
    assert!(host.sql_protection_source.is_none());
}

#[tokio::test]
async fn test_filters_are_sent_as_query_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .and(query_param("environments", "kPhysical,kSQL"))
        .and(query_param("includeEntityPermissionInfo", "true"))
        .and(query_param("pageSize", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let opts = ListProtectionSourcesOptions {
        environments: Some(vec![Environment::Physical, Environment::Sql]),
        include_entity_permission_info: Some(true),
        page_size: Some(50),
        ..ListProtectionSourcesOptions::new("t1")
    };
    let nodes = client.list_protection_sources(&opts).await.unwrap();
    assert!(nodes.is_empty());
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_maps_to_invalid_api_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client
        .list_protection_sources(&ListProtectionSourcesOptions::new("t1"))
        .await;
    assert!(
        matches!(result, Err(Error::InvalidApiKey)),
        "expected InvalidApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_service_error_carries_status_and_code() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errorCode": "KValidationError",
            "message": "tenant t1 does not exist"
        })))
        .mount(&server)
        .await;

    let err = client
        .list_protection_sources(&ListProtectionSourcesOptions::new("t1"))
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            message,
            code,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "tenant t1 does not exist");
            assert_eq!(code.as_deref(), Some("KValidationError"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client
        .list_protection_sources(&ListProtectionSourcesOptions::new("t1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 503, .. }));
    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_unlisted_environment_keeps_its_wire_string() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "protectionSource": { "id": 1, "name": "db", "environment": "kSAPHANA" } },
            { "protectionSource": { "id": 2, "name": "lake", "environment": "kDataLake" } }
        ])))
        .mount(&server)
        .await;

    let nodes = client
        .list_protection_sources(&ListProtectionSourcesOptions::new("t1"))
        .await
        .unwrap();
    let environments: Vec<_> = nodes
        .iter()
        .map(|n| n.protection_source.as_ref().unwrap().environment.clone().unwrap())
        .collect();
    assert_eq!(
        environments,
        vec![
            Environment::SapHana,
            Environment::Unrecognized("kDataLake".into())
        ]
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(SOURCES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "protectionSource": { "id": "not-a-number" } }
        ])))
        .mount(&server)
        .await;

    let err = client
        .list_protection_sources(&ListProtectionSourcesOptions::new("t1"))
        .await
        .unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert!(body.contains("not-a-number")),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}
