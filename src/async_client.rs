//! Async wrapper around [`ScanSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs SDK operations on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! HTTP request is the only part that waits; formatting is synchronous.
//!
//! # Example
//!
//! ```no_run
//! use confluxscan_sdk::{AsyncScanSdk, queries::TopSpan};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncScanSdk::builder().api_key("my-key").build().await.unwrap();
//!
//!     let top = sdk
//!         .run(|s| s.statistics().top_cfx_senders(TopSpan::Week))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::config::{Network, ScanConfig};
use crate::error::{Result, ScanError};
use crate::format::FieldRule;
use crate::query_builder::QueryParams;
use crate::response::OutputMode;
use crate::ScanSdk;

fn join_error(e: tokio::task::JoinError) -> ScanError {
    ScanError::InvalidArgument(format!("Task join error: {e}"))
}

// ---------------------------------------------------------------------------
// AsyncScanSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncScanSdk`] instance.
#[derive(Default)]
pub struct AsyncScanSdkBuilder {
    config: ScanConfig,
}

impl AsyncScanSdkBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Select mainnet or testnet.
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
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is created on the blocking pool, since it
    /// must not be constructed inside an async context.
    pub async fn build(self) -> Result<AsyncScanSdk> {
        tokio::task::spawn_blocking(move || {
            let sdk = ScanSdk::builder().config(self.config).build()?;
            Ok(AsyncScanSdk::from_sdk(sdk))
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncScanSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`ScanSdk`].
///
/// The SDK holds no mutable state, so it is shared behind an [`Arc`] and
/// concurrent calls proceed independently. When the last handle goes away
/// the SDK itself is dropped on the blocking pool, since the blocking HTTP
/// client panics if torn down on a runtime thread.
#[derive(Clone)]
pub struct AsyncScanSdk {
    // `None` only once `drop` has taken it.
    inner: Option<Arc<ScanSdk>>,
}

impl AsyncScanSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncScanSdkBuilder {
        AsyncScanSdkBuilder::default()
    }

    /// Wrap an already-built SDK.
    pub fn from_sdk(sdk: ScanSdk) -> Self {
        Self {
            inner: Some(Arc::new(sdk)),
        }
    }

    fn shared(&self) -> Result<Arc<ScanSdk>> {
        self.inner
            .clone()
            .ok_or_else(|| ScanError::InvalidArgument("SDK has been shut down".to_string()))
    }

    /// Run a blocking SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&ScanSdk` and should return a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ScanSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.shared()?;
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(join_error)?
    }

    /// Call an arbitrary endpoint asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for [`ScanSdk::request()`].
    pub async fn request(
        &self,
        endpoint: &str,
        params: QueryParams,
        rules: &'static [FieldRule],
        mode: OutputMode,
    ) -> Result<Value> {
        let endpoint = endpoint.to_string();
        self.run(move |s| s.request(&endpoint, &params, rules, mode))
            .await
    }
}

impl Drop for AsyncScanSdk {
    fn drop(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        // Only the last handle gets the SDK back; other holders keep it alive.
        let Some(sdk) = Arc::into_inner(inner) else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || drop(sdk));
            }
            Err(_) => drop(sdk),
        }
    }
}
