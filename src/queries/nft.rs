//! NFT queries: holdings, token lists, metadata previews, owners and transfers.

use serde_json::Value;

use crate::address::validate_address;
use crate::client::ScanClient;
use crate::error::{Result, ScanError};
use crate::format::{FieldFormat, FieldRule};
use crate::query_builder::QueryParams;
use crate::queries::{check_not_empty, check_range, check_skip_limit, Sort};
use crate::response::OutputMode;

const BALANCES_PATH: &str = "/nft/balances";
const TOKENS_PATH: &str = "/nft/tokens";
const PREVIEW_PATH: &str = "/nft/preview";
const OWNERS_PATH: &str = "/nft/owners";
const TRANSFERS_PATH: &str = "/nft/transfers";

const TRANSFERS_FIELDS: &[FieldRule] = &[FieldRule::new("list[].timestamp", FieldFormat::Timestamp)];

// ---------------------------------------------------------------------------
// Parameter structs
// ---------------------------------------------------------------------------

/// Filters for the NFT token list. `contract` is required.
#[derive(Debug, Clone, Default)]
pub struct NftTokensParams {
    pub contract: String,
    pub owner: Option<String>,
    pub sort: Option<Sort>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub with_brief: Option<bool>,
    pub with_metadata: Option<bool>,
    pub suppress_metadata_error: Option<bool>,
}

/// Filters for NFT transfers. At least one of `contract` or `address` is required.
#[derive(Debug, Clone, Default)]
pub struct NftTransfersParams {
    pub contract: Option<String>,
    pub address: Option<String>,
    pub token_id: Option<String>,
    pub min_timestamp: Option<u64>,
    pub max_timestamp: Option<u64>,
    pub sort: Option<Sort>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// NftQuery
// ---------------------------------------------------------------------------

/// Query interface for NFT data.
pub struct NftQuery<'a> {
    client: &'a ScanClient,
    mode: OutputMode,
}

impl<'a> NftQuery<'a> {
    /// Create a new `NftQuery` bound to the given client, in formatted mode.
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

    /// NFT collections held by an owner, with per-collection counts.
    pub fn balances(&self, owner: &str, skip: Option<u32>, limit: Option<u32>) -> Result<Value> {
        validate_address("owner", owner)?;
        check_skip_limit(skip, limit)?;

        let mut qb = QueryParams::new();
        qb.param("owner", owner).skip_limit(skip, limit);

        self.client.fetch(BALANCES_PATH, &qb, &[], self.mode)
    }

    /// Tokens of a collection, optionally limited to one owner.
    pub fn tokens(&self, params: &NftTokensParams) -> Result<Value> {
        validate_address("contract", &params.contract)?;
        if let Some(ref owner) = params.owner {
            validate_address("owner", owner)?;
        }
        check_skip_limit(params.skip, params.limit)?;

        let mut qb = QueryParams::new();
        qb.param("contract", &params.contract)
            .opt("owner", params.owner.as_deref())
            .sort(params.sort)
            .skip_limit(params.skip, params.limit)
            .flag("withBrief", params.with_brief)
            .flag("withMetadata", params.with_metadata)
            .flag("suppressMetadataError", params.suppress_metadata_error);

        self.client.fetch(TOKENS_PATH, &qb, &[], self.mode)
    }

    /// Metadata preview of a single token.
    pub fn preview(&self, contract: &str, token_id: &str, with_metadata: Option<bool>) -> Result<Value> {
        validate_address("contract", contract)?;
        check_not_empty("tokenId", token_id)?;

        let mut qb = QueryParams::new();
        qb.param("contract", contract)
            .param("tokenId", token_id)
            .flag("withMetadata", with_metadata);

        self.client.fetch(PREVIEW_PATH, &qb, &[], self.mode)
    }

    /// Owners of a token (several for ERC1155).
    pub fn owners(
        &self,
        contract: &str,
        token_id: &str,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        validate_address("contract", contract)?;
        check_not_empty("tokenId", token_id)?;
        check_skip_limit(skip, limit)?;

        let mut qb = QueryParams::new();
        qb.param("contract", contract)
            .param("tokenId", token_id)
            .skip_limit(skip, limit);

        self.client.fetch(OWNERS_PATH, &qb, &[], self.mode)
    }

    /// Transfers of a collection, an address, or a single token.
    pub fn transfers(&self, params: &NftTransfersParams) -> Result<Value> {
        if params.contract.is_none() && params.address.is_none() {
            return Err(ScanError::InvalidArgument(
                "NFT transfers need a contract or an address".to_string(),
            ));
        }
        if let Some(ref contract) = params.contract {
            validate_address("contract", contract)?;
        }
        if let Some(ref address) = params.address {
            validate_address("address", address)?;
        }
        if params.token_id.is_some() && params.contract.is_none() {
            return Err(ScanError::InvalidArgument(
                "'tokenId' can only be used together with 'contract'".to_string(),
            ));
        }
        check_range("timestamp", params.min_timestamp, params.max_timestamp)?;
        check_skip_limit(params.skip, params.limit)?;

        let mut qb = QueryParams::new();
        qb.opt("contract", params.contract.as_deref())
            .opt("address", params.address.as_deref())
            .opt("tokenId", params.token_id.as_deref())
            .time_range(params.min_timestamp, params.max_timestamp)
            .sort(params.sort)
            .skip_limit(params.skip, params.limit);

        self.client.fetch(TRANSFERS_PATH, &qb, TRANSFERS_FIELDS, self.mode)
    }
}
