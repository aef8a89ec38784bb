//! Statistics series, supply and top-N ranking tests.

mod common;

use common::{sdk_with, RecordingTransport, ADDR_A, ADDR_B, BAD_ADDR};
use confluxscan_sdk::queries::{Sort, StatParams, TopSpan};
use serde_json::json;

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[test]
fn series_format_stat_time() {
    let t = RecordingTransport::new().ok(
        "/statistics/transaction",
        json!({
            "total": 2,
            "list": [
                {"statTime": "1677649200", "count": "52012"},
                {"statTime": 1677562800, "count": "48811"}
            ]
        }),
    );
    let sdk = sdk_with(&t);

    let params = StatParams {
        min_timestamp: Some(1677500000),
        max_timestamp: Some(1677700000),
        sort: Some(Sort::Asc),
        skip: Some(0),
        limit: Some(10),
    };
    let result = sdk.statistics().transactions(&params).unwrap();
    assert_eq!(result["total"], 2);
    assert_eq!(result["list"][0]["statTime"], "2023-03-01 05:40:00");
    assert_eq!(result["list"][1]["statTime"], "2023-02-28 05:40:00");
    assert_eq!(result["list"][0]["count"], "52012");

    let call = t.last_call();
    assert_eq!(call.endpoint, "/statistics/transaction");
    assert_eq!(call.params.get("minTimestamp"), Some("1677500000"));
    assert_eq!(call.params.get("maxTimestamp"), Some("1677700000"));
    assert_eq!(call.params.get("sort"), Some("asc"));
    assert_eq!(call.params.get("skip"), Some("0"));
    assert_eq!(call.params.get("limit"), Some("10"));
}

#[test]
fn series_without_params_sends_nothing_extra() {
    let t = RecordingTransport::new().ok("/statistics/tps", json!({"total": 0, "list": []}));
    let sdk = sdk_with(&t);

    let result = sdk.statistics().tps(&StatParams::default()).unwrap();
    assert_eq!(result, json!({"total": 0, "list": []}));
    assert!(t.last_call().params.is_empty());
}

#[test]
fn account_series_share_the_account_prefix() {
    let body = json!({"total": 0, "list": []});
    let t = RecordingTransport::new()
        .ok("/statistics/account/active", body.clone())
        .ok("/statistics/account/cfx/holder", body.clone())
        .ok("/statistics/account/growth", body);
    let sdk = sdk_with(&t);
    let stats = sdk.statistics();

    stats.active_accounts(&StatParams::default()).unwrap();
    stats.cfx_holders(&StatParams::default()).unwrap();
    stats.account_growth(&StatParams::default()).unwrap();

    let endpoints: Vec<String> = t.calls().into_iter().map(|c| c.endpoint).collect();
    assert_eq!(
        endpoints,
        vec![
            "/statistics/account/active",
            "/statistics/account/cfx/holder",
            "/statistics/account/growth",
        ]
    );
}

#[test]
fn series_validate_window() {
    let t = RecordingTransport::new();
    let sdk = sdk_with(&t);

    let inverted = StatParams {
        min_timestamp: Some(20),
        max_timestamp: Some(10),
        ..Default::default()
    };
    assert!(sdk.statistics().active_accounts(&inverted).is_err());

    let too_many = StatParams {
        limit: Some(101),
        ..Default::default()
    };
    assert!(sdk.statistics().cfx_holders(&too_many).is_err());

    let past_window = StatParams {
        skip: Some(9_990),
        limit: Some(20),
        ..Default::default()
    };
    assert!(sdk.statistics().contracts(&past_window).is_err());
    assert_eq!(t.call_count(), 0);
}

#[test]
fn cfx_transfer_volume_is_cfx() {
    let t = RecordingTransport::new().ok(
        "/statistics/cfx/transfer",
        json!({"total": 1, "list": [{"statTime": "1677649200", "transferCount": "10", "amount": "3000000000000000000000"}]}),
    );
    let sdk = sdk_with(&t);

    let result = sdk.statistics().cfx_transfers(&StatParams::default()).unwrap();
    assert_eq!(result["list"][0]["amount"], "3,000 CFX");
    assert_eq!(result["list"][0]["transferCount"], "10");
}

#[test]
fn gas_price_series_is_gdrip() {
    let t = RecordingTransport::new().ok(
        "/statistics/block/gasprice",
        json!({"total": 1, "list": [{
            "statTime": "1677649200",
            "gasPriceMin": "1000000000",
            "gasPriceAvg": "20000000000",
            "gasPriceMax": "1500000000000"
        }]}),
    );
    let sdk = sdk_with(&t);

    let result = sdk.statistics().gas_price(&StatParams::default()).unwrap();
    let row = &result["list"][0];
    assert_eq!(row["gasPriceMin"], "1 Gdrip");
    assert_eq!(row["gasPriceAvg"], "20 Gdrip");
    assert_eq!(row["gasPriceMax"], "1,500 Gdrip");
}

#[test]
fn token_transfer_series_checks_contract() {
    let t = RecordingTransport::new().ok(
        "/statistics/token/transfer",
        json!({"total": 1, "list": [{"statTime": "1677649200", "transferCount": "4"}]}),
    );
    let sdk = sdk_with(&t);

    assert!(sdk
        .statistics()
        .token_transfers(BAD_ADDR, &StatParams::default())
        .is_err());
    assert_eq!(t.call_count(), 0);

    let result = sdk
        .statistics()
        .token_transfers(ADDR_B, &StatParams::default())
        .unwrap();
    assert_eq!(result["list"][0]["statTime"], "2023-03-01 05:40:00");
    assert_eq!(t.last_call().params.get("contract"), Some(ADDR_B));
}

// ---------------------------------------------------------------------------
// Supply
// ---------------------------------------------------------------------------

#[test]
fn supply_fields_are_cfx() {
    let fixture = json!({
        "totalIssued": "5000000000000000000000000000",
        "totalCirculating": "2500000000000000000000000000",
        "totalStaking": "0",
        "totalCollateral": "",
        "nullAddressBalance": "123000000000000000"
    });
    let t = RecordingTransport::new().ok("/statistics/supply", fixture.clone());
    let sdk = sdk_with(&t);

    let result = sdk.statistics().supply().unwrap();
    assert_eq!(result["totalIssued"], "5,000,000,000 CFX");
    assert_eq!(result["totalCirculating"], "2,500,000,000 CFX");
    assert_eq!(result["totalStaking"], "0 CFX");
    assert_eq!(result["totalCollateral"], "");
    assert_eq!(result["nullAddressBalance"], "0.123 CFX");

    assert_eq!(sdk.statistics().raw().supply().unwrap(), fixture);
}

// ---------------------------------------------------------------------------
// Top-N
// ---------------------------------------------------------------------------

#[test]
fn top_bounds_are_dates_only() {
    let t = RecordingTransport::new().ok(
        "/statistics/top/transaction/sender",
        json!({
            "maxTime": "1677649200",
            "minTime": 1677562800,
            "list": [{"address": ADDR_A, "value": "120"}]
        }),
    );
    let sdk = sdk_with(&t);

    let result = sdk
        .statistics()
        .top_transaction_senders(TopSpan::Day)
        .unwrap();
    assert_eq!(result["maxTime"], "2023-03-01");
    assert_eq!(result["minTime"], "2023-02-28");
    // counts are not amounts
    assert_eq!(result["list"][0]["value"], "120");
    assert_eq!(t.last_call().params.get("spanType"), Some("24h"));
}

#[test]
fn top_cfx_rankings_format_value() {
    let body = json!({
        "maxTime": "1677649200",
        "minTime": "1677044400",
        "list": [{"address": ADDR_A, "value": "7000000000000000000000"}]
    });
    let t = RecordingTransport::new()
        .ok("/statistics/top/cfx/sender", body.clone())
        .ok("/statistics/top/cfx/receiver", body);
    let sdk = sdk_with(&t);

    let senders = sdk.statistics().top_cfx_senders(TopSpan::Week).unwrap();
    let receivers = sdk.statistics().top_cfx_receivers(TopSpan::Week).unwrap();
    for result in [senders, receivers] {
        assert_eq!(result["list"][0]["value"], "7,000 CFX");
        assert_eq!(result["minTime"], "2023-02-22");
    }
    assert!(t.calls().iter().all(|c| c.params.get("spanType") == Some("7d")));
}

#[test]
fn top_gas_used_is_gdrip() {
    let t = RecordingTransport::new().ok(
        "/statistics/top/gas/used",
        json!({"maxTime": "1677649200", "minTime": "1677390000", "list": [{"address": ADDR_A, "gas": "42000000000000"}]}),
    );
    let sdk = sdk_with(&t);

    let result = sdk.statistics().top_gas_used(TopSpan::ThreeDays).unwrap();
    assert_eq!(result["list"][0]["gas"], "42,000 Gdrip");
    assert_eq!(result["list"][0]["address"], ADDR_A);
    assert_eq!(t.last_call().params.get("spanType"), Some("3d"));
}

#[test]
fn token_rankings_hit_their_endpoints() {
    let body = json!({"maxTime": "1677649200", "minTime": "1677562800", "list": []});
    let t = RecordingTransport::new()
        .ok("/statistics/top/token/transfer", body.clone())
        .ok("/statistics/top/token/sender", body.clone())
        .ok("/statistics/top/token/receiver", body.clone())
        .ok("/statistics/top/token/participant", body.clone())
        .ok("/statistics/top/transaction/receiver", body);
    let sdk = sdk_with(&t);
    let stats = sdk.statistics();

    stats.top_token_transfers(TopSpan::Day).unwrap();
    stats.top_token_senders(TopSpan::Day).unwrap();
    stats.top_token_receivers(TopSpan::Day).unwrap();
    stats.top_token_participants(TopSpan::Day).unwrap();
    let last = stats.top_transaction_receivers(TopSpan::Day).unwrap();
    assert_eq!(last["maxTime"], "2023-03-01");

    let endpoints: Vec<String> = t.calls().into_iter().map(|c| c.endpoint).collect();
    assert_eq!(
        endpoints,
        vec![
            "/statistics/top/token/transfer",
            "/statistics/top/token/sender",
            "/statistics/top/token/receiver",
            "/statistics/top/token/participant",
            "/statistics/top/transaction/receiver",
        ]
    );
}
