use serde::{Deserialize, Serialize};

use super::de;

// ---------------------------------------------------------------------------
// NftBalance: `/nft/balances` list entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftBalance {
    pub contract: String,
    #[serde(deserialize_with = "de::u64_lenient")]
    pub balance: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, rename = "type")]
    pub type_field: Option<String>,
}

// ---------------------------------------------------------------------------
// NftTransfer: `/nft/transfers` list entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTransfer {
    #[serde(deserialize_with = "de::u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "de::u64_lenient")]
    pub timestamp: u64,
    pub transaction_hash: String,
    pub contract: String,
    pub from: String,
    pub to: String,
    pub token_id: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default, rename = "transferType")]
    pub transfer_type: Option<String>,
}
