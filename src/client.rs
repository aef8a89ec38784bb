//! Request dispatch shared by every query interface.
//!
//! Owns the [`Transport`] and implements the fetch / branch / map sequence:
//! one request, then either the raw `result` or the result with the
//! endpoint's field map applied.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::format::{apply_rules, FieldRule};
use crate::query_builder::QueryParams;
use crate::response::OutputMode;
use crate::transport::Transport;

/// Wraps a transport and turns envelopes into results.
pub struct ScanClient {
    transport: Box<dyn Transport>,
}

impl ScanClient {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Issue one request and return its `result`, raw or formatted.
    ///
    /// A non-success envelope becomes [`ScanError::Api`](crate::ScanError::Api)
    /// and no formatter runs.
    pub fn fetch(
        &self,
        endpoint: &str,
        params: &QueryParams,
        rules: &[FieldRule],
        mode: OutputMode,
    ) -> Result<Value> {
        let result = self.fetch_raw(endpoint, params)?;
        match mode {
            OutputMode::Raw => Ok(result),
            OutputMode::Formatted => Ok(apply_rules(result, rules)),
        }
    }

    /// Issue one request and return the unmodified `result`.
    pub fn fetch_raw(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        let envelope = self.transport.request(endpoint, params)?;
        if !envelope.is_success() {
            tracing::warn!(
                endpoint,
                status = %envelope.status,
                message = %envelope.message,
                "scan API returned an error status"
            );
        }
        envelope.into_result()
    }

    /// Issue one request and decode the raw `result` into `T`.
    pub fn fetch_into<T: DeserializeOwned>(&self, endpoint: &str, params: &QueryParams) -> Result<T> {
        let result = self.fetch_raw(endpoint, params)?;
        Ok(serde_json::from_value(result)?)
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
