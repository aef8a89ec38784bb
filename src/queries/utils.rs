//! Calldata decoding helpers.

use serde_json::Value;

use crate::address::validate_address_list;
use crate::client::ScanClient;
use crate::error::{Result, ScanError};
use crate::query_builder::QueryParams;
use crate::queries::{check_hash, check_list_len};
use crate::response::OutputMode;

const DECODE_METHOD_PATH: &str = "/util/decode/method";
const DECODE_METHOD_RAW_PATH: &str = "/util/decode/method/raw";

/// At most this many items per decode call.
pub const MAX_DECODE_ITEMS: usize = 10;

/// Query interface for the decoding utilities.
pub struct UtilsQuery<'a> {
    client: &'a ScanClient,
    mode: OutputMode,
}

impl<'a> UtilsQuery<'a> {
    /// Create a new `UtilsQuery` bound to the given client, in formatted mode.
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

    /// Decode the method call of already-mined transactions.
    pub fn decode_method(&self, hashes: &[&str]) -> Result<Value> {
        check_list_len("hashes", hashes.len(), MAX_DECODE_ITEMS)?;
        for hash in hashes {
            check_hash("hashes", hash)?;
        }

        let mut qb = QueryParams::new();
        qb.list("hashes", hashes);

        self.client.fetch(DECODE_METHOD_PATH, &qb, &[], self.mode)
    }

    /// Decode raw calldata against the ABI of the given contracts.
    ///
    /// `contracts` and `inputs` are paired by position.
    pub fn decode_method_raw(&self, contracts: &[&str], inputs: &[&str]) -> Result<Value> {
        check_list_len("contracts", contracts.len(), MAX_DECODE_ITEMS)?;
        validate_address_list("contracts", contracts)?;
        if contracts.len() != inputs.len() {
            return Err(ScanError::InvalidArgument(format!(
                "'contracts' and 'inputs' must have the same length, got {} and {}",
                contracts.len(),
                inputs.len()
            )));
        }
        for input in inputs {
            let is_hex = input
                .strip_prefix("0x")
                .map(|h| h.len() % 2 == 0 && h.bytes().all(|b| b.is_ascii_hexdigit()))
                .unwrap_or(false);
            if !is_hex {
                return Err(ScanError::InvalidArgument(format!(
                    "Invalid calldata for 'inputs': {}",
                    input
                )));
            }
        }

        let mut qb = QueryParams::new();
        qb.list("contracts", contracts).list("inputs", inputs);

        self.client.fetch(DECODE_METHOD_RAW_PATH, &qb, &[], self.mode)
    }
}
