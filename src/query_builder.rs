//! Query-string builder for the scan API.
//!
//! Parameters are kept as ordered `(key, value)` pairs and URL-encoded by the
//! transport, never concatenated into the URL by hand. Builder methods return
//! `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use confluxscan_sdk::QueryParams;
//! let params = QueryParams::action("account", "txlist")
//!     .param("address", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
//!     .page(Some(1), Some(10))
//!     .build();
//! assert_eq!(params[0], ("module".to_string(), "account".to_string()));
//! ```

use std::fmt::Display;

use crate::queries::Sort;

/// Ordered set of query-string parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set (REST-style endpoints).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter set for a `module`/`action` style endpoint.
    pub fn action(module: &str, action: &str) -> Self {
        let mut params = Self::new();
        params.param("module", module).param("action", action);
        params
    }

    /// Set a parameter, replacing an earlier value for the same key.
    pub fn param(&mut self, key: &str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Set a parameter only when a value is present.
    pub fn opt<T: Display>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.param(key, v);
        }
        self
    }

    /// Set a comma-joined list parameter.
    ///
    /// An empty list adds nothing.
    pub fn list(&mut self, key: &str, values: &[&str]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        self.param(key, values.join(","))
    }

    /// Set a boolean flag as `true`/`false`, only when given.
    pub fn flag(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        self.opt(key, value)
    }

    /// Set the `sort` parameter.
    pub fn sort(&mut self, sort: Option<Sort>) -> &mut Self {
        self.opt("sort", sort)
    }

    /// Set `page`/`offset` pagination (module/action endpoints).
    pub fn page(&mut self, page: Option<u32>, offset: Option<u32>) -> &mut Self {
        self.opt("page", page).opt("offset", offset)
    }

    /// Set `skip`/`limit` pagination (REST endpoints).
    pub fn skip_limit(&mut self, skip: Option<u32>, limit: Option<u32>) -> &mut Self {
        self.opt("skip", skip).opt("limit", limit)
    }

    /// Set a `minTimestamp`/`maxTimestamp` range in epoch seconds.
    pub fn time_range(&mut self, min: Option<u64>, max: Option<u64>) -> &mut Self {
        self.opt("minTimestamp", min).opt("maxTimestamp", max)
    }

    /// Set a `startblock`/`endblock` range.
    pub fn block_range(&mut self, start: Option<u64>, end: Option<u64>) -> &mut Self {
        self.opt("startblock", start).opt("endblock", end)
    }

    /// Look up the value set for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return the final list of `(key, value)` pairs.
    pub fn build(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }
}
