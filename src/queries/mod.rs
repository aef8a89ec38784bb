//! Query modules for the scan SDK.
//!
//! Each module provides a query struct that borrows the [`ScanClient`](crate::client::ScanClient),
//! validates its arguments before any request is made, and returns `Result<Value>`
//! payloads in the struct's [`OutputMode`](crate::OutputMode).

use std::fmt;

use crate::error::{Result, ScanError};

pub mod account;
pub mod block;
pub mod contract;
pub mod nft;
pub mod statistics;
pub mod token;
pub mod transaction;
pub mod utils;

pub use account::{AccountQuery, InternalTxParams, TokenTxParams, TxListParams};
pub use block::BlockQuery;
pub use contract::ContractQuery;
pub use nft::{NftQuery, NftTokensParams, NftTransfersParams};
pub use statistics::{StatParams, StatisticsQuery};
pub use token::TokenQuery;
pub use transaction::TransactionQuery;
pub use utils::UtilsQuery;

// ---------------------------------------------------------------------------
// Shared parameter types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Asc,
    Desc,
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sort::Asc => "asc",
            Sort::Desc => "desc",
        })
    }
}

/// Block or epoch a state query is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockTag {
    #[default]
    Latest,
    LatestState,
    LatestMined,
    LatestFinalized,
    LatestConfirmed,
    LatestCheckpoint,
    Earliest,
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockTag::Latest => "latest",
            BlockTag::LatestState => "latest_state",
            BlockTag::LatestMined => "latest_mined",
            BlockTag::LatestFinalized => "latest_finalized",
            BlockTag::LatestConfirmed => "latest_confirmed",
            BlockTag::LatestCheckpoint => "latest_checkpoint",
            BlockTag::Earliest => "earliest",
        })
    }
}

/// Which side of a timestamp to pick a block from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closest {
    Before,
    After,
}

impl fmt::Display for Closest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Closest::Before => "before",
            Closest::After => "after",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Erc20,
    Erc721,
    Erc1155,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenType::Erc20 => "ERC20",
            TokenType::Erc721 => "ERC721",
            TokenType::Erc1155 => "ERC1155",
        })
    }
}

/// Time window of a top-N ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopSpan {
    #[default]
    Day,
    ThreeDays,
    Week,
}

impl fmt::Display for TopSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TopSpan::Day => "24h",
            TopSpan::ThreeDays => "3d",
            TopSpan::Week => "7d",
        })
    }
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

pub(crate) const MAX_OFFSET: u32 = 10_000;
pub(crate) const MAX_LIMIT: u32 = 100;
pub(crate) const MAX_SKIP_WINDOW: u32 = 10_000;

fn invalid(msg: String) -> ScanError {
    ScanError::InvalidArgument(msg)
}

/// `0x` followed by 64 hex digits.
pub fn is_valid_hash(text: &str) -> bool {
    text.strip_prefix("0x")
        .map(|h| h.len() == 64 && h.bytes().all(|b| b.is_ascii_hexdigit()))
        .unwrap_or(false)
}

pub(crate) fn check_hash(field: &str, value: &str) -> Result<()> {
    if is_valid_hash(value) {
        Ok(())
    } else {
        Err(invalid(format!("Invalid transaction hash for '{}': {}", field, value)))
    }
}

pub(crate) fn check_page(page: Option<u32>, offset: Option<u32>) -> Result<()> {
    if let Some(p) = page {
        if p == 0 {
            return Err(invalid("'page' must be at least 1, got 0".to_string()));
        }
    }
    if let Some(o) = offset {
        if o == 0 || o > MAX_OFFSET {
            return Err(invalid(format!(
                "'offset' must be between 1 and {}, got {}",
                MAX_OFFSET, o
            )));
        }
    }
    Ok(())
}

pub(crate) fn check_skip_limit(skip: Option<u32>, limit: Option<u32>) -> Result<()> {
    if let Some(l) = limit {
        if l == 0 || l > MAX_LIMIT {
            return Err(invalid(format!(
                "'limit' must be between 1 and {}, got {}",
                MAX_LIMIT, l
            )));
        }
    }
    let window = skip.unwrap_or(0) as u64 + limit.unwrap_or(0) as u64;
    if window > MAX_SKIP_WINDOW as u64 {
        return Err(invalid(format!(
            "'skip' + 'limit' must not exceed {}, got {}",
            MAX_SKIP_WINDOW, window
        )));
    }
    Ok(())
}

pub(crate) fn check_range(what: &str, min: Option<u64>, max: Option<u64>) -> Result<()> {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(invalid(format!(
                "{} range is inverted: {} > {}",
                what, lo, hi
            )));
        }
    }
    Ok(())
}

pub(crate) fn check_list_len(field: &str, len: usize, max: usize) -> Result<()> {
    if len == 0 {
        return Err(invalid(format!("'{}' must not be empty", field)));
    }
    if len > max {
        return Err(invalid(format!(
            "'{}' accepts at most {} entries, got {}",
            field, max, len
        )));
    }
    Ok(())
}

pub(crate) fn check_not_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(format!("'{}' must not be empty", field)));
    }
    Ok(())
}
