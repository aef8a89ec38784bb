//! End-to-end tests of the HTTP transport against a local mock server.

mod common;

use std::time::Duration;

use common::{ADDR_A, ADDR_B};
use confluxscan_sdk::queries::TopSpan;
use confluxscan_sdk::{HttpTransport, QueryParams, ScanConfig, ScanError, ScanSdk, Transport};
use httpmock::prelude::*;
use serde_json::json;

fn sdk_for(server: &MockServer, api_key: Option<&str>) -> ScanSdk {
    let mut builder = ScanSdk::builder()
        .host(server.base_url())
        .timeout(Duration::from_secs(5));
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    builder.build().unwrap()
}

#[test]
fn action_request_carries_module_action_and_key() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api")
            .query_param("module", "account")
            .query_param("action", "balance")
            .query_param("address", ADDR_A)
            .query_param("tag", "latest")
            .query_param("apikey", "secret");
        then.status(200).json_body(json!({
            "status": "1",
            "message": "OK",
            "result": "1500000000000000000"
        }));
    });

    let sdk = sdk_for(&server, Some("secret"));
    let balance = sdk.account().balance(ADDR_A, None).unwrap();

    mock.assert();
    assert_eq!(balance, json!("1.5 CFX"));
}

#[test]
fn rest_request_hits_its_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/statistics/top/cfx/sender")
            .query_param("spanType", "7d");
        then.status(200).json_body(json!({
            "status": 1,
            "message": "",
            "result": {
                "maxTime": "1677649200",
                "minTime": "1677044400",
                "list": [{"address": ADDR_B, "value": "1000000000000000000"}]
            }
        }));
    });

    let sdk = sdk_for(&server, None);
    let result = sdk.statistics().top_cfx_senders(TopSpan::Week).unwrap();

    mock.assert();
    assert_eq!(result["maxTime"], "2023-03-01");
    assert_eq!(result["list"][0]["value"], "1 CFX");
}

#[test]
fn no_api_key_means_no_apikey_param() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api").query_param_exists("apikey");
        then.status(200).json_body(json!({"status": "1", "message": "OK", "result": "0"}));
    });
    let fallback = server.mock(|when, then| {
        when.method(GET).path("/api");
        then.status(200).json_body(json!({"status": "1", "message": "OK", "result": "0"}));
    });

    let sdk = sdk_for(&server, None);
    sdk.token().raw().cfx_supply().unwrap();

    mock.assert_hits(0);
    fallback.assert();
}

#[test]
fn non_2xx_is_a_status_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api");
        then.status(429).body("rate limited");
    });

    let sdk = sdk_for(&server, None);
    match sdk.account().balance(ADDR_A, None) {
        Err(ScanError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[test]
fn failed_envelope_is_an_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api");
        then.status(200).json_body(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Error! Missing or invalid action name"
        }));
    });

    let sdk = sdk_for(&server, None);
    let err = sdk.block().reward(1).unwrap_err();
    match err {
        ScanError::Api { status, message } => {
            assert_eq!(status, "0");
            assert_eq!(message, "NOTOK");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[test]
fn malformed_body_is_a_json_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api");
        then.status(200).body("<html>maintenance</html>");
    });

    let sdk = sdk_for(&server, None);
    let err = sdk.token().cfx_supply().unwrap_err();
    assert!(matches!(err, ScanError::Json(_)));
}

#[test]
fn transport_used_directly() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/nft/preview").query_param("tokenId", "9");
        then.status(200).json_body(json!({"status": "1", "message": "OK", "result": {"name": "#9"}}));
    });

    let config = ScanConfig {
        host: Some(server.base_url()),
        ..Default::default()
    };
    let transport = HttpTransport::new(&config).unwrap();
    assert_eq!(
        transport.endpoint_url("/nft/preview").unwrap().as_str(),
        format!("{}/nft/preview", server.base_url())
    );

    let mut params = QueryParams::new();
    params.param("tokenId", "9");
    let envelope = transport.request("/nft/preview", &params).unwrap();

    mock.assert();
    assert!(envelope.is_success());
    assert_eq!(envelope.result, json!({"name": "#9"}));
}

#[test]
fn bad_host_fails_at_build() {
    let result = ScanSdk::builder().host("not a url").build();
    assert!(matches!(result, Err(ScanError::Url(_))));
}
