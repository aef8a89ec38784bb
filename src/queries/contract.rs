//! Contract queries: ABI, verified source and creation info.

use serde_json::Value;

use crate::address::{validate_address, validate_address_list};
use crate::client::ScanClient;
use crate::config::ACTION_PATH;
use crate::error::Result;
use crate::format::{FieldFormat, FieldRule};
use crate::query_builder::QueryParams;
use crate::queries::check_list_len;
use crate::response::OutputMode;

/// At most this many contracts per `getcontractcreation` call.
pub const MAX_CREATION_ADDRESSES: usize = 5;

const CREATION_FIELDS: &[FieldRule] = &[FieldRule::new("[].timestamp", FieldFormat::Timestamp)];

/// Query interface for the `contract` module.
pub struct ContractQuery<'a> {
    client: &'a ScanClient,
    mode: OutputMode,
}

impl<'a> ContractQuery<'a> {
    /// Create a new `ContractQuery` bound to the given client, in formatted mode.
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

    /// ABI of a verified contract, as the JSON-encoded string the service returns.
    pub fn abi(&self, address: &str) -> Result<Value> {
        validate_address("address", address)?;

        let mut qb = QueryParams::action("contract", "getabi");
        qb.param("address", address);

        self.client.fetch(ACTION_PATH, &qb, &[], self.mode)
    }

    /// Verified source code and compiler settings of a contract.
    pub fn source_code(&self, address: &str) -> Result<Value> {
        validate_address("address", address)?;

        let mut qb = QueryParams::action("contract", "getsourcecode");
        qb.param("address", address);

        self.client.fetch(ACTION_PATH, &qb, &[], self.mode)
    }

    /// Creator address and creation transaction of up to five contracts.
    pub fn creation(&self, addresses: &[&str]) -> Result<Value> {
        check_list_len("contractaddresses", addresses.len(), MAX_CREATION_ADDRESSES)?;
        validate_address_list("contractaddresses", addresses)?;

        let mut qb = QueryParams::action("contract", "getcontractcreation");
        qb.list("contractaddresses", addresses);

        self.client.fetch(ACTION_PATH, &qb, CREATION_FIELDS, self.mode)
    }
}
