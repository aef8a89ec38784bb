//! Typed shapes of raw (unformatted) scan API results.
//!
//! Decode with [`ScanClient::fetch_into`](crate::client::ScanClient::fetch_into).
//! Amounts stay as integer text; counters and timestamps accept either JSON
//! numbers or numeric strings, since the service uses both.

pub mod account;
pub mod nft;
pub mod statistics;
pub mod token;

pub use account::*;
pub use nft::*;
pub use statistics::*;
pub use token::*;

pub(crate) mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn to_u64<E: serde::de::Error>(value: Value) -> Result<Option<u64>, E> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_u64()
                .map(Some)
                .ok_or_else(|| E::custom(format!("expected unsigned integer, got {}", n))),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| E::custom(format!("expected unsigned integer, got '{}'", s))),
            other => Err(E::custom(format!("expected unsigned integer, got {}", other))),
        }
    }

    pub fn u64_lenient<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        Ok(to_u64::<D::Error>(Value::deserialize(d)?)?.unwrap_or_default())
    }

    pub fn opt_u64_lenient<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        to_u64::<D::Error>(Value::deserialize(d)?)
    }

    /// Integer amounts as text, whether sent as a string or a number.
    pub fn amount_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        match Value::deserialize(d)? {
            Value::Null => Ok("0".to_string()),
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected amount, got {}",
                other
            ))),
        }
    }
}
