use serde::{Deserialize, Serialize};

use super::de;

// ---------------------------------------------------------------------------
// AccountBalance: one entry of `balancemulti`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account: String,
    #[serde(deserialize_with = "de::amount_text")]
    pub balance: String,
}

// ---------------------------------------------------------------------------
// Transaction: `txlist` row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(deserialize_with = "de::u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "de::u64_lenient")]
    pub time_stamp: u64,
    pub hash: String,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(deserialize_with = "de::amount_text")]
    pub value: String,
    #[serde(default, deserialize_with = "de::opt_u64_lenient")]
    pub nonce: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_u64_lenient")]
    pub gas: Option<u64>,
    #[serde(default)]
    pub gas_price: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u64_lenient")]
    pub gas_used: Option<u64>,
    #[serde(default)]
    pub is_error: Option<String>,
    #[serde(default, rename = "txreceipt_status")]
    pub txreceipt_status: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub method_id: Option<String>,
    #[serde(default)]
    pub function_name: Option<String>,
}

// ---------------------------------------------------------------------------
// InternalTransaction: `txlistinternal` row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransaction {
    #[serde(deserialize_with = "de::u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "de::u64_lenient")]
    pub time_stamp: u64,
    pub hash: String,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(deserialize_with = "de::amount_text")]
    pub value: String,
    #[serde(default, rename = "type")]
    pub type_field: Option<String>,
    #[serde(default)]
    pub is_error: Option<String>,
    #[serde(default)]
    pub err_code: Option<String>,
}

// ---------------------------------------------------------------------------
// TokenTransfer: `tokentx` / `tokennfttx` / `token1155tx` row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    #[serde(deserialize_with = "de::u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "de::u64_lenient")]
    pub time_stamp: u64,
    pub hash: String,
    pub from: String,
    pub to: String,
    pub contract_address: String,
    /// Absent on NFT transfers.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, rename = "tokenID")]
    pub token_id: Option<String>,
    #[serde(default)]
    pub token_value: Option<String>,
    #[serde(default)]
    pub token_name: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u64_lenient")]
    pub token_decimal: Option<u64>,
}

// ---------------------------------------------------------------------------
// MinedBlock: `getminedblocks` row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinedBlock {
    #[serde(deserialize_with = "de::u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "de::u64_lenient")]
    pub time_stamp: u64,
    #[serde(deserialize_with = "de::amount_text")]
    pub block_reward: String,
}
