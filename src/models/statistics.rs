use serde::{Deserialize, Serialize};

use super::de;

// ---------------------------------------------------------------------------
// Page: `{total, list}` wrapper of list endpoints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "de::u64_lenient")]
    pub total: u64,
    #[serde(default)]
    pub list: Vec<T>,
}

// ---------------------------------------------------------------------------
// StatPoint: one sample of a statistics series
// ---------------------------------------------------------------------------

/// Series rows carry `statTime` plus endpoint-specific counters, kept in `values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatPoint {
    #[serde(deserialize_with = "de::u64_lenient")]
    pub stat_time: u64,
    #[serde(flatten)]
    pub values: serde_json::Map<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// TopList / TopEntry: top-N ranking results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TopList<T> {
    #[serde(deserialize_with = "de::u64_lenient")]
    pub max_time: u64,
    #[serde(deserialize_with = "de::u64_lenient")]
    pub min_time: u64,
    #[serde(default)]
    pub list: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEntry {
    pub address: String,
    #[serde(default, deserialize_with = "de::amount_text")]
    pub value: String,
    #[serde(default)]
    pub gas: Option<String>,
}

// ---------------------------------------------------------------------------
// Supply: `/statistics/supply`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    #[serde(deserialize_with = "de::amount_text")]
    pub total_issued: String,
    #[serde(deserialize_with = "de::amount_text")]
    pub total_circulating: String,
    #[serde(default)]
    pub total_staking: Option<String>,
    #[serde(default)]
    pub total_collateral: Option<String>,
    #[serde(default)]
    pub null_address_balance: Option<String>,
}
