//! Raw and formatted output modes over the same responses.

mod common;

use common::{sdk_with, RecordingTransport, ADDR_A, ADDR_B};
use confluxscan_sdk::format::{FieldFormat, FieldRule};
use confluxscan_sdk::queries::{StatParams, TopSpan, TxListParams};
use confluxscan_sdk::{OutputMode, QueryParams};
use serde_json::{json, Value};

fn txlist() -> Value {
    json!([
        {"hash": "0x01", "value": "1000000000000000000", "gasPrice": "1000000000", "timeStamp": "1677649200", "nonce": "4"},
        {"hash": "0x02", "value": 0, "gasPrice": null, "timeStamp": "not a time", "input": "0x"}
    ])
}

fn keys(v: &Value) -> Vec<String> {
    v.as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn raw_mode_is_byte_identical_and_repeatable() {
    let t = RecordingTransport::new().ok("account/txlist", txlist());
    let sdk = sdk_with(&t);

    let first = sdk
        .account()
        .raw()
        .transactions(ADDR_A, &TxListParams::default())
        .unwrap();
    let second = sdk
        .account()
        .with_mode(OutputMode::Raw)
        .transactions(ADDR_A, &TxListParams::default())
        .unwrap();
    assert_eq!(first, txlist());
    assert_eq!(first, second);
}

#[test]
fn formatted_mode_keeps_every_key() {
    let t = RecordingTransport::new().ok("account/txlist", txlist());
    let sdk = sdk_with(&t);

    let formatted = sdk
        .account()
        .transactions(ADDR_A, &TxListParams::default())
        .unwrap();
    let raw = txlist();

    assert_eq!(formatted.as_array().unwrap().len(), 2);
    for (f, r) in formatted.as_array().unwrap().iter().zip(raw.as_array().unwrap()) {
        assert_eq!(keys(f), keys(r));
        assert_eq!(f["hash"], r["hash"]);
    }
    // unmapped fields are untouched
    assert_eq!(formatted[0]["nonce"], "4");
    assert_eq!(formatted[1]["input"], "0x");
}

#[test]
fn falsy_values_are_left_alone() {
    let t = RecordingTransport::new().ok("account/txlist", txlist());
    let sdk = sdk_with(&t);

    let formatted = sdk
        .account()
        .transactions(ADDR_A, &TxListParams::default())
        .unwrap();
    assert_eq!(formatted[0]["value"], "1 CFX");
    assert_eq!(formatted[0]["gasPrice"], "1 Gdrip");
    assert_eq!(formatted[1]["value"], 0);
    assert_eq!(formatted[1]["gasPrice"], Value::Null);
    // a present but unparseable timestamp renders as the fallback
    assert_eq!(formatted[1]["timeStamp"], "N/A");
}

#[test]
fn bool_selects_mode() {
    let t = RecordingTransport::new().ok("/statistics/supply", json!({"totalIssued": "1000000000000000000"}));
    let sdk = sdk_with(&t);

    let raw = sdk
        .statistics()
        .with_mode(OutputMode::from(true))
        .supply()
        .unwrap();
    let formatted = sdk
        .statistics()
        .with_mode(OutputMode::from(false))
        .supply()
        .unwrap();
    assert_eq!(raw["totalIssued"], "1000000000000000000");
    assert_eq!(formatted["totalIssued"], "1 CFX");
    assert_eq!(t.call_count(), 2);
}

#[test]
fn modes_send_identical_requests() {
    let body = json!({"maxTime": "1677649200", "minTime": "1677562800", "list": []});
    let t = RecordingTransport::new().ok("/statistics/top/token/sender", body);
    let sdk = sdk_with(&t);

    sdk.statistics().top_token_senders(TopSpan::Day).unwrap();
    sdk.statistics().raw().top_token_senders(TopSpan::Day).unwrap();

    let calls = t.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].endpoint, calls[1].endpoint);
    assert_eq!(calls[0].params, calls[1].params);
}

#[test]
fn formatted_series_rows_keep_counters() {
    let body = json!({"total": 1, "list": [{"statTime": "1677649200", "count": 17, "extra": {"nested": true}}]});
    let t = RecordingTransport::new().ok("/statistics/account/active", body);
    let sdk = sdk_with(&t);

    let result = sdk.statistics().active_accounts(&StatParams::default()).unwrap();
    assert_eq!(result["list"][0]["count"], 17);
    assert_eq!(result["list"][0]["extra"], json!({"nested": true}));
}

#[test]
fn escape_hatch_applies_caller_rules() {
    static RULES: &[FieldRule] = &[FieldRule::new("data.reward", FieldFormat::Cfx)];
    let t = RecordingTransport::new().ok(
        "/custom/endpoint",
        json!({"data": {"reward": "5000000000000000000", "owner": ADDR_B}}),
    );
    let sdk = sdk_with(&t);

    let mut params = QueryParams::new();
    params.param("owner", ADDR_B);
    let formatted = sdk
        .request("/custom/endpoint", &params, RULES, OutputMode::Formatted)
        .unwrap();
    let raw = sdk
        .request("/custom/endpoint", &params, RULES, OutputMode::Raw)
        .unwrap();

    assert_eq!(formatted["data"]["reward"], "5 CFX");
    assert_eq!(raw["data"]["reward"], "5000000000000000000");
    assert_eq!(formatted["data"]["owner"], ADDR_B);
}
