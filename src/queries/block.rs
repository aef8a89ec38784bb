//! Block queries.

use serde_json::Value;

use crate::client::ScanClient;
use crate::config::ACTION_PATH;
use crate::error::Result;
use crate::format::{FieldFormat, FieldRule};
use crate::query_builder::QueryParams;
use crate::queries::Closest;
use crate::response::OutputMode;

const REWARD_FIELDS: &[FieldRule] = &[
    FieldRule::new("blockReward", FieldFormat::Cfx),
    FieldRule::new("timeStamp", FieldFormat::Timestamp),
];

/// Query interface for the `block` module.
pub struct BlockQuery<'a> {
    client: &'a ScanClient,
    mode: OutputMode,
}

impl<'a> BlockQuery<'a> {
    /// Create a new `BlockQuery` bound to the given client, in formatted mode.
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

    /// Number of the block produced closest to a UNIX timestamp.
    pub fn number_by_time(&self, timestamp: u64, closest: Closest) -> Result<Value> {
        let mut qb = QueryParams::action("block", "getblocknobytime");
        qb.param("timestamp", timestamp).param("closest", closest);

        self.client.fetch(ACTION_PATH, &qb, &[], self.mode)
    }

    /// Reward paid for a block.
    pub fn reward(&self, block_number: u64) -> Result<Value> {
        let mut qb = QueryParams::action("block", "getblockreward");
        qb.param("blockno", block_number);

        self.client.fetch(ACTION_PATH, &qb, REWARD_FIELDS, self.mode)
    }
}
