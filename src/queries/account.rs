//! Account queries: balances, transaction lists, transfers and holdings.

use serde_json::Value;

use crate::address::{validate_address, validate_address_list};
use crate::client::ScanClient;
use crate::config::ACTION_PATH;
use crate::error::{Result, ScanError};
use crate::format::{FieldFormat, FieldRule};
use crate::query_builder::QueryParams;
use crate::queries::{check_list_len, check_page, check_range, BlockTag, Sort, TokenType};
use crate::response::OutputMode;

const TOKENS_PATH: &str = "/account/tokens";

/// At most this many addresses per `balancemulti` call.
pub const MAX_BALANCE_ADDRESSES: usize = 20;

const BALANCE_FIELDS: &[FieldRule] = &[FieldRule::new("", FieldFormat::Cfx)];

const BALANCE_MULTI_FIELDS: &[FieldRule] = &[FieldRule::new("[].balance", FieldFormat::Cfx)];

const TXLIST_FIELDS: &[FieldRule] = &[
    FieldRule::new("[].value", FieldFormat::Cfx),
    FieldRule::new("[].gasPrice", FieldFormat::Gdrip),
    FieldRule::new("[].timeStamp", FieldFormat::Timestamp),
];

const INTERNAL_TX_FIELDS: &[FieldRule] = &[
    FieldRule::new("[].value", FieldFormat::Cfx),
    FieldRule::new("[].timeStamp", FieldFormat::Timestamp),
];

const TOKEN_TX_FIELDS: &[FieldRule] = &[
    FieldRule::new("[].value", FieldFormat::TokenAmount { decimals: "tokenDecimal" }),
    FieldRule::new("[].timeStamp", FieldFormat::Timestamp),
];

const NFT_TX_FIELDS: &[FieldRule] = &[FieldRule::new("[].timeStamp", FieldFormat::Timestamp)];

const MINED_BLOCKS_FIELDS: &[FieldRule] = &[
    FieldRule::new("[].blockReward", FieldFormat::Cfx),
    FieldRule::new("[].timeStamp", FieldFormat::Timestamp),
];

const TOKENS_FIELDS: &[FieldRule] = &[FieldRule::new(
    "list[].amount",
    FieldFormat::TokenAmount { decimals: "decimals" },
)];

// ---------------------------------------------------------------------------
// Parameter structs
// ---------------------------------------------------------------------------

/// Paging and range options for `txlist`.
#[derive(Debug, Clone, Default)]
pub struct TxListParams {
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub page: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<Sort>,
}

/// Filters for `txlistinternal`. One of `address`, `txhash` or a block range is required.
#[derive(Debug, Clone, Default)]
pub struct InternalTxParams {
    pub address: Option<String>,
    pub txhash: Option<String>,
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub page: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<Sort>,
}

/// Filters for token transfer lists. One of `address` or `contract_address` is required.
#[derive(Debug, Clone, Default)]
pub struct TokenTxParams {
    pub address: Option<String>,
    pub contract_address: Option<String>,
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub page: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<Sort>,
}

// ---------------------------------------------------------------------------
// AccountQuery
// ---------------------------------------------------------------------------

/// Query interface for the `account` module and account holdings.
pub struct AccountQuery<'a> {
    client: &'a ScanClient,
    mode: OutputMode,
}

impl<'a> AccountQuery<'a> {
    /// Create a new `AccountQuery` bound to the given client, in formatted mode.
    pub fn new(client: &'a ScanClient) -> Self {
        Self {
            client,
            mode: OutputMode::Formatted,
        }
    }

    /// Return results exactly as the service sent them.
    pub fn raw(self) -> Self {
        self.with_mode(OutputMode::Raw)
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    // -- Balances ----------------------------------------------------------

    /// CFX balance of one address.
    pub fn balance(&self, address: &str, tag: Option<BlockTag>) -> Result<Value> {
        validate_address("address", address)?;

        let mut qb = QueryParams::action("account", "balance");
        qb.param("address", address).param("tag", tag.unwrap_or_default());

        self.client.fetch(ACTION_PATH, &qb, BALANCE_FIELDS, self.mode)
    }

    /// CFX balances of up to [`MAX_BALANCE_ADDRESSES`] addresses in one call.
    pub fn balance_multi(&self, addresses: &[&str], tag: Option<BlockTag>) -> Result<Value> {
        check_list_len("address", addresses.len(), MAX_BALANCE_ADDRESSES)?;
        validate_address_list("address", addresses)?;

        let mut qb = QueryParams::action("account", "balancemulti");
        qb.list("address", addresses).param("tag", tag.unwrap_or_default());

        self.client.fetch(ACTION_PATH, &qb, BALANCE_MULTI_FIELDS, self.mode)
    }

    /// Balance of a token contract held by an address, in the token's smallest unit.
    pub fn token_balance(
        &self,
        contract_address: &str,
        address: &str,
        tag: Option<BlockTag>,
    ) -> Result<Value> {
        validate_address("contractaddress", contract_address)?;
        validate_address("address", address)?;

        let mut qb = QueryParams::action("account", "tokenbalance");
        qb.param("contractaddress", contract_address)
            .param("address", address)
            .param("tag", tag.unwrap_or_default());

        self.client.fetch(ACTION_PATH, &qb, &[], self.mode)
    }

    /// Token holdings of an account, optionally limited to one token standard.
    pub fn tokens(&self, account: &str, token_type: Option<TokenType>) -> Result<Value> {
        validate_address("account", account)?;

        let mut qb = QueryParams::new();
        qb.param("account", account).opt("tokenType", token_type);

        self.client.fetch(TOKENS_PATH, &qb, TOKENS_FIELDS, self.mode)
    }

    // -- Transaction lists -------------------------------------------------

    /// Normal transactions sent from or to an address.
    pub fn transactions(&self, address: &str, params: &TxListParams) -> Result<Value> {
        validate_address("address", address)?;
        check_range("block", params.start_block, params.end_block)?;
        check_page(params.page, params.offset)?;

        let mut qb = QueryParams::action("account", "txlist");
        qb.param("address", address)
            .block_range(params.start_block, params.end_block)
            .page(params.page, params.offset)
            .sort(params.sort);

        self.client.fetch(ACTION_PATH, &qb, TXLIST_FIELDS, self.mode)
    }

    /// Internal (contract-initiated) transactions.
    pub fn internal_transactions(&self, params: &InternalTxParams) -> Result<Value> {
        if let Some(ref address) = params.address {
            validate_address("address", address)?;
        }
        if let Some(ref hash) = params.txhash {
            crate::queries::check_hash("txhash", hash)?;
        }
        let has_range = params.start_block.is_some() || params.end_block.is_some();
        if params.address.is_none() && params.txhash.is_none() && !has_range {
            return Err(ScanError::InvalidArgument(
                "internal transactions need an address, a txhash or a block range".to_string(),
            ));
        }
        check_range("block", params.start_block, params.end_block)?;
        check_page(params.page, params.offset)?;

        let mut qb = QueryParams::action("account", "txlistinternal");
        qb.opt("address", params.address.as_deref())
            .opt("txhash", params.txhash.as_deref())
            .block_range(params.start_block, params.end_block)
            .page(params.page, params.offset)
            .sort(params.sort);

        self.client.fetch(ACTION_PATH, &qb, INTERNAL_TX_FIELDS, self.mode)
    }

    /// CRC20 (ERC20) token transfers.
    pub fn token_transfers(&self, params: &TokenTxParams) -> Result<Value> {
        let qb = token_tx_params("tokentx", params)?;
        self.client.fetch(ACTION_PATH, &qb, TOKEN_TX_FIELDS, self.mode)
    }

    /// CRC721 (ERC721) token transfers.
    pub fn nft_transfers(&self, params: &TokenTxParams) -> Result<Value> {
        let qb = token_tx_params("tokennfttx", params)?;
        self.client.fetch(ACTION_PATH, &qb, NFT_TX_FIELDS, self.mode)
    }

    /// CRC1155 (ERC1155) token transfers.
    pub fn erc1155_transfers(&self, params: &TokenTxParams) -> Result<Value> {
        let qb = token_tx_params("token1155tx", params)?;
        self.client.fetch(ACTION_PATH, &qb, NFT_TX_FIELDS, self.mode)
    }

    /// Blocks mined by an address.
    pub fn mined_blocks(
        &self,
        address: &str,
        page: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        validate_address("address", address)?;
        check_page(page, offset)?;

        let mut qb = QueryParams::action("account", "getminedblocks");
        qb.param("address", address)
            .param("blocktype", "blocks")
            .page(page, offset);

        self.client.fetch(ACTION_PATH, &qb, MINED_BLOCKS_FIELDS, self.mode)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn token_tx_params(action: &str, params: &TokenTxParams) -> Result<QueryParams> {
    if params.address.is_none() && params.contract_address.is_none() {
        return Err(ScanError::InvalidArgument(format!(
            "'{}' needs an address or a contractaddress",
            action
        )));
    }
    if let Some(ref address) = params.address {
        validate_address("address", address)?;
    }
    if let Some(ref contract) = params.contract_address {
        validate_address("contractaddress", contract)?;
    }
    check_range("block", params.start_block, params.end_block)?;
    check_page(params.page, params.offset)?;

    let mut qb = QueryParams::action("account", action);
    qb.opt("address", params.address.as_deref())
        .opt("contractaddress", params.contract_address.as_deref())
        .block_range(params.start_block, params.end_block)
        .page(params.page, params.offset)
        .sort(params.sort);
    Ok(qb)
}
