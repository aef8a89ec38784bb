//! Network statistics: daily series, supply figures and top-N rankings.
//!
//! Series endpoints share one parameter shape ([`StatParams`]) and return
//! `{total, list}` pages keyed by `statTime`. Ranking endpoints take a
//! [`TopSpan`] and return `{maxTime, minTime, list}`, with the window bounds
//! rendered as dates only.

use serde_json::Value;

use crate::address::validate_address;
use crate::client::ScanClient;
use crate::error::Result;
use crate::format::{FieldFormat, FieldRule};
use crate::query_builder::QueryParams;
use crate::queries::{check_range, check_skip_limit, Sort, TopSpan};
use crate::response::OutputMode;

const ACTIVE_ACCOUNTS_PATH: &str = "/statistics/account/active";
const CFX_HOLDERS_PATH: &str = "/statistics/account/cfx/holder";
const ACCOUNT_GROWTH_PATH: &str = "/statistics/account/growth";
const CONTRACTS_PATH: &str = "/statistics/contract";
const TRANSACTIONS_PATH: &str = "/statistics/transaction";
const CFX_TRANSFERS_PATH: &str = "/statistics/cfx/transfer";
const TPS_PATH: &str = "/statistics/tps";
const TOKEN_TRANSFERS_PATH: &str = "/statistics/token/transfer";
const GAS_PRICE_PATH: &str = "/statistics/block/gasprice";
const SUPPLY_PATH: &str = "/statistics/supply";

const TOP_GAS_USED_PATH: &str = "/statistics/top/gas/used";
const TOP_CFX_SENDER_PATH: &str = "/statistics/top/cfx/sender";
const TOP_CFX_RECEIVER_PATH: &str = "/statistics/top/cfx/receiver";
const TOP_TX_SENDER_PATH: &str = "/statistics/top/transaction/sender";
const TOP_TX_RECEIVER_PATH: &str = "/statistics/top/transaction/receiver";
const TOP_TOKEN_TRANSFER_PATH: &str = "/statistics/top/token/transfer";
const TOP_TOKEN_SENDER_PATH: &str = "/statistics/top/token/sender";
const TOP_TOKEN_RECEIVER_PATH: &str = "/statistics/top/token/receiver";
const TOP_TOKEN_PARTICIPANT_PATH: &str = "/statistics/top/token/participant";

const SERIES_FIELDS: &[FieldRule] = &[FieldRule::new("list[].statTime", FieldFormat::Timestamp)];

const CFX_TRANSFER_FIELDS: &[FieldRule] = &[
    FieldRule::new("list[].statTime", FieldFormat::Timestamp),
    FieldRule::new("list[].amount", FieldFormat::Cfx),
];

const GAS_PRICE_FIELDS: &[FieldRule] = &[
    FieldRule::new("list[].statTime", FieldFormat::Timestamp),
    FieldRule::new("list[].gasPriceMin", FieldFormat::Gdrip),
    FieldRule::new("list[].gasPriceAvg", FieldFormat::Gdrip),
    FieldRule::new("list[].gasPriceMax", FieldFormat::Gdrip),
];

const SUPPLY_FIELDS: &[FieldRule] = &[
    FieldRule::new("totalIssued", FieldFormat::Cfx),
    FieldRule::new("totalCirculating", FieldFormat::Cfx),
    FieldRule::new("totalStaking", FieldFormat::Cfx),
    FieldRule::new("totalCollateral", FieldFormat::Cfx),
    FieldRule::new("nullAddressBalance", FieldFormat::Cfx),
];

const TOP_FIELDS: &[FieldRule] = &[
    FieldRule::new("maxTime", FieldFormat::Date),
    FieldRule::new("minTime", FieldFormat::Date),
];

const TOP_GAS_FIELDS: &[FieldRule] = &[
    FieldRule::new("maxTime", FieldFormat::Date),
    FieldRule::new("minTime", FieldFormat::Date),
    FieldRule::new("list[].gas", FieldFormat::Gdrip),
];

const TOP_CFX_FIELDS: &[FieldRule] = &[
    FieldRule::new("maxTime", FieldFormat::Date),
    FieldRule::new("minTime", FieldFormat::Date),
    FieldRule::new("list[].value", FieldFormat::Cfx),
];

// ---------------------------------------------------------------------------
// StatParams
// ---------------------------------------------------------------------------

/// Time window and paging shared by every statistics series.
///
/// All fields are optional; the service defaults to the most recent page.
#[derive(Debug, Clone, Default)]
pub struct StatParams {
    pub min_timestamp: Option<u64>,
    pub max_timestamp: Option<u64>,
    pub sort: Option<Sort>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl StatParams {
    fn query(&self) -> Result<QueryParams> {
        check_range("timestamp", self.min_timestamp, self.max_timestamp)?;
        check_skip_limit(self.skip, self.limit)?;

        let mut qb = QueryParams::new();
        qb.time_range(self.min_timestamp, self.max_timestamp)
            .sort(self.sort)
            .skip_limit(self.skip, self.limit);
        Ok(qb)
    }
}

// ---------------------------------------------------------------------------
// StatisticsQuery
// ---------------------------------------------------------------------------

/// Query interface for network statistics.
pub struct StatisticsQuery<'a> {
    client: &'a ScanClient,
    mode: OutputMode,
}

impl<'a> StatisticsQuery<'a> {
    /// Create a new `StatisticsQuery` bound to the given client, in formatted mode.
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

    fn series(&self, path: &str, rules: &[FieldRule], params: &StatParams) -> Result<Value> {
        let qb = params.query()?;
        self.client.fetch(path, &qb, rules, self.mode)
    }

    fn top(&self, path: &str, rules: &[FieldRule], span: TopSpan) -> Result<Value> {
        let mut qb = QueryParams::new();
        qb.param("spanType", span);
        self.client.fetch(path, &qb, rules, self.mode)
    }

    // -- Daily series ------------------------------------------------------

    /// Daily count of accounts that sent at least one transaction.
    pub fn active_accounts(&self, params: &StatParams) -> Result<Value> {
        self.series(ACTIVE_ACCOUNTS_PATH, SERIES_FIELDS, params)
    }

    /// Daily count of accounts holding CFX.
    pub fn cfx_holders(&self, params: &StatParams) -> Result<Value> {
        self.series(CFX_HOLDERS_PATH, SERIES_FIELDS, params)
    }

    /// Daily count of newly seen accounts.
    pub fn account_growth(&self, params: &StatParams) -> Result<Value> {
        self.series(ACCOUNT_GROWTH_PATH, SERIES_FIELDS, params)
    }

    /// Daily contract deployments and running total.
    pub fn contracts(&self, params: &StatParams) -> Result<Value> {
        self.series(CONTRACTS_PATH, SERIES_FIELDS, params)
    }

    /// Daily transaction counts.
    pub fn transactions(&self, params: &StatParams) -> Result<Value> {
        self.series(TRANSACTIONS_PATH, SERIES_FIELDS, params)
    }

    /// Daily CFX transfer counts, participants and volume.
    pub fn cfx_transfers(&self, params: &StatParams) -> Result<Value> {
        self.series(CFX_TRANSFERS_PATH, CFX_TRANSFER_FIELDS, params)
    }

    /// Transactions per second samples.
    pub fn tps(&self, params: &StatParams) -> Result<Value> {
        self.series(TPS_PATH, SERIES_FIELDS, params)
    }

    /// Daily transfer figures of one token contract.
    pub fn token_transfers(&self, contract: &str, params: &StatParams) -> Result<Value> {
        validate_address("contract", contract)?;
        let mut qb = params.query()?;
        qb.param("contract", contract);
        self.client.fetch(TOKEN_TRANSFERS_PATH, &qb, SERIES_FIELDS, self.mode)
    }

    /// Daily minimum, average and maximum gas price.
    pub fn gas_price(&self, params: &StatParams) -> Result<Value> {
        self.series(GAS_PRICE_PATH, GAS_PRICE_FIELDS, params)
    }

    /// Current issued, circulating, staked and collateral CFX.
    pub fn supply(&self) -> Result<Value> {
        self.client
            .fetch(SUPPLY_PATH, &QueryParams::new(), SUPPLY_FIELDS, self.mode)
    }

    // -- Top-N rankings ----------------------------------------------------

    /// Accounts that paid the most gas in the window.
    pub fn top_gas_used(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_GAS_USED_PATH, TOP_GAS_FIELDS, span)
    }

    /// Accounts that sent the most CFX in the window.
    pub fn top_cfx_senders(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_CFX_SENDER_PATH, TOP_CFX_FIELDS, span)
    }

    /// Accounts that received the most CFX in the window.
    pub fn top_cfx_receivers(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_CFX_RECEIVER_PATH, TOP_CFX_FIELDS, span)
    }

    /// Accounts that sent the most transactions in the window.
    pub fn top_transaction_senders(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_TX_SENDER_PATH, TOP_FIELDS, span)
    }

    /// Accounts that received the most transactions in the window.
    pub fn top_transaction_receivers(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_TX_RECEIVER_PATH, TOP_FIELDS, span)
    }

    /// Tokens with the most transfers in the window.
    pub fn top_token_transfers(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_TOKEN_TRANSFER_PATH, TOP_FIELDS, span)
    }

    /// Accounts with the most outgoing token transfers in the window.
    pub fn top_token_senders(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_TOKEN_SENDER_PATH, TOP_FIELDS, span)
    }

    /// Accounts with the most incoming token transfers in the window.
    pub fn top_token_receivers(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_TOKEN_RECEIVER_PATH, TOP_FIELDS, span)
    }

    /// Accounts taking part in the most token transfers in the window.
    pub fn top_token_participants(&self, span: TopSpan) -> Result<Value> {
        self.top(TOP_TOKEN_PARTICIPANT_PATH, TOP_FIELDS, span)
    }
}
