use serde::{Deserialize, Serialize};

use super::de;

// ---------------------------------------------------------------------------
// TokenHolding: `/account/tokens` list entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    #[serde(rename = "type")]
    pub type_field: String,
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u64_lenient")]
    pub decimals: Option<u64>,
    #[serde(deserialize_with = "de::amount_text")]
    pub amount: String,
    #[serde(default)]
    pub price_in_usdt: Option<String>,
}

// ---------------------------------------------------------------------------
// TokenInfo: `/token/tokeninfos` list entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub contract: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u64_lenient")]
    pub decimals: Option<u64>,
    #[serde(default)]
    pub total_supply: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}
