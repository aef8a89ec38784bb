//! Conflux eSpace scan SDK for Rust.
//!
//! Provides a blocking client for the Conflux eSpace scan API (accounts,
//! transactions, tokens, NFTs, contracts and network statistics). Arguments are
//! validated locally before any request is sent, and every data-returning
//! operation can hand back either the service's raw `result` or a copy with
//! drip amounts, gas prices, token amounts and timestamps rendered for display.
//!
//! # Quick start
//!
//! ```no_run
//! use confluxscan_sdk::ScanSdk;
//!
//! let sdk = ScanSdk::builder().api_key("my-key").build().unwrap();
//!
//! // "1,234.5 CFX"
//! let balance = sdk
//!     .account()
//!     .balance("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", None)
//!     .unwrap();
//!
//! // "1234500000000000000000", exactly as sent
//! let raw = sdk
//!     .account()
//!     .raw()
//!     .balance("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", None)
//!     .unwrap();
//! ```

pub mod address;
#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod queries;
pub mod query_builder;
pub mod response;
pub mod transport;

pub use address::{is_valid_address, is_valid_address_list, to_checksum_address};
#[cfg(feature = "async")]
pub use async_client::AsyncScanSdk;
pub use client::ScanClient;
pub use config::{Network, ScanConfig};
pub use error::{Result, ScanError};
pub use query_builder::QueryParams;
pub use response::{Envelope, OutputMode};
pub use transport::{HttpTransport, Transport};

use std::fmt;
use std::time::Duration;

use format::FieldRule;
use serde_json::Value;

// ---------------------------------------------------------------------------
// ScanSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ScanSdk`] instance.
///
/// Use [`ScanSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ScanSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct ScanSdkBuilder {
    config: ScanConfig,
    transport: Option<Box<dyn Transport>>,
}

impl ScanSdkBuilder {
    /// Replace the whole configuration, e.g. with [`ScanConfig::from_env()`].
    pub fn config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Select mainnet or testnet. Defaults to mainnet.
    pub fn network(mut self, network: Network) -> Self {
        self.config.network = network;
        self
    }

    /// Set the API key sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Send requests to this host instead of the network's default.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = Some(host.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Use a custom transport instead of the built-in HTTP one.
    ///
    /// Network, host, API key and timeout are then the transport's concern.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the SDK.
    ///
    /// No request is made here; the HTTP client is only configured.
    pub fn build(self) -> Result<ScanSdk> {
        let transport = match self.transport {
            Some(t) => t,
            None => Box::new(HttpTransport::new(&self.config)?),
        };
        Ok(ScanSdk {
            client: ScanClient::new(transport),
            config: self.config,
        })
    }
}

// ---------------------------------------------------------------------------
// ScanSdk
// ---------------------------------------------------------------------------

/// The main entry point for the scan SDK.
///
/// Wraps a [`ScanClient`] and exposes domain-specific query interfaces as
/// lightweight borrowing wrappers. Each wrapper starts in
/// [`OutputMode::Formatted`]; call `.raw()` on it for the unmodified results.
///
/// Created via [`ScanSdk::builder()`].
pub struct ScanSdk {
    client: ScanClient,
    config: ScanConfig,
}

impl ScanSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> ScanSdkBuilder {
        ScanSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the account query interface (balances, transaction lists, transfers).
    pub fn account(&self) -> queries::account::AccountQuery<'_> {
        queries::account::AccountQuery::new(&self.client)
    }

    /// Access the contract query interface.
    pub fn contract(&self) -> queries::contract::ContractQuery<'_> {
        queries::contract::ContractQuery::new(&self.client)
    }

    /// Access the block query interface.
    pub fn block(&self) -> queries::block::BlockQuery<'_> {
        queries::block::BlockQuery::new(&self.client)
    }

    /// Access the transaction status interface.
    pub fn transaction(&self) -> queries::transaction::TransactionQuery<'_> {
        queries::transaction::TransactionQuery::new(&self.client)
    }

    /// Access the supply and token metadata interface.
    pub fn token(&self) -> queries::token::TokenQuery<'_> {
        queries::token::TokenQuery::new(&self.client)
    }

    /// Access the NFT query interface.
    pub fn nft(&self) -> queries::nft::NftQuery<'_> {
        queries::nft::NftQuery::new(&self.client)
    }

    /// Access the network statistics interface.
    pub fn statistics(&self) -> queries::statistics::StatisticsQuery<'_> {
        queries::statistics::StatisticsQuery::new(&self.client)
    }

    /// Access the calldata decoding interface.
    pub fn utils(&self) -> queries::utils::UtilsQuery<'_> {
        queries::utils::UtilsQuery::new(&self.client)
    }

    // -- Escape hatch ------------------------------------------------------

    /// Call an endpoint not covered by the query interfaces.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Path relative to the host, e.g. `"/api"` or `"/statistics/tps"`.
    /// * `params` - Query parameters.
    /// * `rules` - Field map to apply in formatted mode (may be empty).
    /// * `mode` - Raw or formatted output.
    pub fn request(
        &self,
        endpoint: &str,
        params: &QueryParams,
        rules: &[FieldRule],
        mode: OutputMode,
    ) -> Result<Value> {
        self.client.fetch(endpoint, params, rules, mode)
    }

    /// Return the configuration the SDK was built with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Return a reference to the underlying [`ScanClient`] for advanced usage.
    pub fn client(&self) -> &ScanClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for ScanSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self
            .config
            .host
            .as_deref()
            .unwrap_or_else(|| self.config.network.default_host());
        write!(
            f,
            "ScanSdk(network={}, host={}, api_key={})",
            self.config.network,
            host,
            if self.config.api_key.is_some() { "set" } else { "none" }
        )
    }
}
