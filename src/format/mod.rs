//! Unit-aware formatting of raw scan API values.
//!
//! The functions here are pure: integer amounts become exact decimal text,
//! epoch seconds become UTC calendar strings, and [`apply_rules`] maps an
//! endpoint's field table over a raw JSON result.

pub mod fields;
pub mod time;
pub mod units;

pub use fields::{apply_rules, is_falsy, FieldFormat, FieldRule};
pub use time::{format_date, format_timestamp, EpochSeconds, TIMESTAMP_FALLBACK};
pub use units::{
    format_cfx, format_gdrip, format_token_amount, group_number, scale_amount, unscale_amount,
    CFX_DECIMALS, CFX_UNIT, GDRIP_DECIMALS, GDRIP_UNIT,
};
