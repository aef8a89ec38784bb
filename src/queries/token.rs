//! Token supply and metadata queries.

use serde_json::Value;

use crate::address::{validate_address, validate_address_list};
use crate::client::ScanClient;
use crate::config::ACTION_PATH;
use crate::error::Result;
use crate::format::{FieldFormat, FieldRule};
use crate::query_builder::QueryParams;
use crate::queries::check_list_len;
use crate::response::OutputMode;

const TOKEN_INFOS_PATH: &str = "/token/tokeninfos";

/// At most this many contracts per token info call.
pub const MAX_TOKEN_INFO_CONTRACTS: usize = 30;

const CFX_SUPPLY_FIELDS: &[FieldRule] = &[FieldRule::new("", FieldFormat::Cfx)];

const TOKEN_INFOS_FIELDS: &[FieldRule] = &[FieldRule::new(
    "list[].totalSupply",
    FieldFormat::TokenAmount { decimals: "decimals" },
)];

/// Query interface for supply figures and token metadata.
pub struct TokenQuery<'a> {
    client: &'a ScanClient,
    mode: OutputMode,
}

impl<'a> TokenQuery<'a> {
    /// Create a new `TokenQuery` bound to the given client, in formatted mode.
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

    /// Total CFX supply in eSpace.
    pub fn cfx_supply(&self) -> Result<Value> {
        let qb = QueryParams::action("stats", "cfxsupply");
        self.client.fetch(ACTION_PATH, &qb, CFX_SUPPLY_FIELDS, self.mode)
    }

    /// Total supply of a token contract, in the token's smallest unit.
    ///
    /// The endpoint does not report decimals, so the formatted result is the
    /// same integer; use [`infos`](Self::infos) for a scaled supply.
    pub fn supply(&self, contract_address: &str) -> Result<Value> {
        validate_address("contractaddress", contract_address)?;

        let mut qb = QueryParams::action("stats", "tokensupply");
        qb.param("contractaddress", contract_address);

        self.client.fetch(ACTION_PATH, &qb, &[], self.mode)
    }

    /// Name, symbol, decimals and total supply of up to thirty tokens.
    pub fn infos(&self, contracts: &[&str]) -> Result<Value> {
        check_list_len("contracts", contracts.len(), MAX_TOKEN_INFO_CONTRACTS)?;
        validate_address_list("contracts", contracts)?;

        let mut qb = QueryParams::new();
        qb.list("contracts", contracts);

        self.client.fetch(TOKEN_INFOS_PATH, &qb, TOKEN_INFOS_FIELDS, self.mode)
    }
}
