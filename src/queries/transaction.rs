//! Transaction status queries.

use serde_json::Value;

use crate::client::ScanClient;
use crate::config::ACTION_PATH;
use crate::error::Result;
use crate::query_builder::QueryParams;
use crate::queries::check_hash;
use crate::response::OutputMode;

/// Query interface for the `transaction` module.
///
/// Neither endpoint carries amounts or timestamps, so both modes return the
/// same value; the mode switch is kept for a uniform call surface.
pub struct TransactionQuery<'a> {
    client: &'a ScanClient,
    mode: OutputMode,
}

impl<'a> TransactionQuery<'a> {
    /// Create a new `TransactionQuery` bound to the given client, in formatted mode.
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

    /// Execution status (`isError`, `errDescription`) of a transaction.
    pub fn status(&self, txhash: &str) -> Result<Value> {
        check_hash("txhash", txhash)?;

        let mut qb = QueryParams::action("transaction", "getstatus");
        qb.param("txhash", txhash);

        self.client.fetch(ACTION_PATH, &qb, &[], self.mode)
    }

    /// Receipt status (`status` of `"1"` for success) of a transaction.
    pub fn receipt_status(&self, txhash: &str) -> Result<Value> {
        check_hash("txhash", txhash)?;

        let mut qb = QueryParams::action("transaction", "gettxreceiptstatus");
        qb.param("txhash", txhash);

        self.client.fetch(ACTION_PATH, &qb, &[], self.mode)
    }
}
