use httpmock::prelude::*;
use serde_json::json;

use super::{ApiClient, ClientSettings, EngineApi, normalize_host};
use crate::headers::{HeaderSet, client_user_agent};

fn client_for(server: &MockServer, configured: HeaderSet) -> ApiClient {
    ApiClient::new(ClientSettings {
        host: server.base_url(),
        timeout_secs: 5,
        configured_headers: configured,
    })
    .unwrap()
}

fn my_header() -> HeaderSet {
    [("MyHeader", "MyValue")].into_iter().collect()
}

#[tokio::test]
async fn ping_sends_identity_and_configured_headers() {
    let server = MockServer::start_async().await;
    let ua = client_user_agent();

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/_ping")
                .header("user-agent", ua.as_str())
                .header("myheader", "MyValue");
            then.status(200).body("OK");
        })
        .await;

    let client = client_for(&server, my_header());
    let body = client.ping().await.unwrap();

    assert_eq!(body, "OK");
    mock.assert_async().await;
}

#[tokio::test]
async fn every_request_carries_configured_headers() {
    let server = MockServer::start_async().await;

    let ping = server
        .mock_async(|when, then| {
            when.method(GET).path("/_ping").header("myheader", "MyValue");
            then.status(200).body("OK");
        })
        .await;
    let version = server
        .mock_async(|when, then| {
            when.method(GET).path("/version").header("myheader", "MyValue");
            then.status(200).json_body(json!({
                "Version": "24.0.7",
                "ApiVersion": "1.43",
                "Os": "linux",
                "Arch": "amd64"
            }));
        })
        .await;

    let client = client_for(&server, my_header());
    client.ping().await.unwrap();
    client.ping().await.unwrap();
    let info = client.server_version().await.unwrap();

    assert_eq!(ping.hits_async().await, 2);
    version.assert_async().await;
    assert_eq!(info.version, "24.0.7");
    assert_eq!(info.api_version, "1.43");
}

#[tokio::test]
async fn configured_user_agent_does_not_reach_the_wire() {
    let server = MockServer::start_async().await;
    let ua = client_user_agent();

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/_ping").header("user-agent", ua.as_str());
            then.status(200).body("OK");
        })
        .await;

    let configured: HeaderSet = [("User-Agent", "spoofed/1.0")].into_iter().collect();
    let client = client_for(&server, configured);
    client.ping().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn list_containers_passes_all_flag_and_parses() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/containers/json")
                .query_param("all", "1");
            then.status(200).json_body(json!([
                {
                    "Id": "8dfafdbc3a40aaaaaaaaaaaaaaaa",
                    "Image": "nginx:latest",
                    "Names": ["/web"],
                    "Status": "Up 2 minutes",
                    "State": "running"
                }
            ]));
        })
        .await;

    let client = client_for(&server, HeaderSet::new());
    let containers = client.list_containers(true).await.unwrap();

    mock.assert_async().await;
    assert_eq!(containers.len(), 1);
    assert_eq!(containers[0].short_id(), "8dfafdbc3a40");
    assert_eq!(containers[0].display_names(), "web");
}

#[tokio::test]
async fn server_error_is_reported() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/containers/json");
            then.status(500).body("daemon exploded");
        })
        .await;

    let client = client_for(&server, HeaderSet::new());
    let err = client.list_containers(false).await.unwrap_err();
    assert!(err.to_string().contains("daemon exploded"));
}

#[tokio::test]
async fn unknown_endpoint_is_reported() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/version");
            then.status(404);
        })
        .await;

    let client = client_for(&server, HeaderSet::new());
    let err = client.server_version().await.unwrap_err();
    assert!(err.to_string().contains("/version"));
}

#[test]
fn request_headers_merge_per_call() {
    let client = ApiClient::new(ClientSettings {
        host: "127.0.0.1:2375".to_string(),
        timeout_secs: 5,
        configured_headers: my_header(),
    })
    .unwrap();

    let first = client.request_headers();
    let second = client.request_headers();
    assert_eq!(first, second);
    assert_eq!(first.get("myheader"), Some("MyValue"));
    assert!(first.contains("User-Agent"));
}

#[test]
fn normalize_host_variants() {
    assert_eq!(
        normalize_host("tcp://127.0.0.1:2375").unwrap(),
        "http://127.0.0.1:2375"
    );
    assert_eq!(
        normalize_host("127.0.0.1:4243").unwrap(),
        "http://127.0.0.1:4243"
    );
    assert_eq!(
        normalize_host("https://engine.example.com/").unwrap(),
        "https://engine.example.com"
    );
}

#[test]
fn normalize_host_rejects_unsupported() {
    assert!(normalize_host("").is_err());
    assert!(normalize_host("tcp://").is_err());
    let err = normalize_host("unix:///var/run/docker.sock").unwrap_err();
    assert!(err.to_string().contains("unix://"));
}
