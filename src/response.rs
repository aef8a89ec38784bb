//! The `{status, message, result}` envelope and the raw/formatted output switch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, ScanError};

/// Status value the service uses for success.
pub const STATUS_OK: &str = "1";

/// Wrapper every scan API response arrives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(deserialize_with = "status_text")]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

// The service has sent both `"1"` and `1`.
fn status_text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl Envelope {
    /// Build a successful envelope around a result.
    pub fn ok(result: Value) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            message: "OK".to_string(),
            result,
        }
    }

    /// Build a failed envelope with the given message.
    pub fn error(status: &str, message: &str) -> Self {
        Self {
            status: status.to_string(),
            message: message.to_string(),
            result: Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.trim() == STATUS_OK
    }

    /// Unwrap the result, turning a non-success status into [`ScanError::Api`].
    pub fn into_result(self) -> Result<Value> {
        if self.is_success() {
            Ok(self.result)
        } else {
            Err(ScanError::Api {
                status: self.status,
                message: self.message,
            })
        }
    }
}

/// Shape a data-returning operation hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Amounts and timestamps rewritten as display text.
    #[default]
    Formatted,
    /// The `result` exactly as the service sent it.
    Raw,
}

impl OutputMode {
    pub fn is_raw(&self) -> bool {
        matches!(self, OutputMode::Raw)
    }
}

/// `true` selects raw mode.
impl From<bool> for OutputMode {
    fn from(raw: bool) -> Self {
        if raw {
            OutputMode::Raw
        } else {
            OutputMode::Formatted
        }
    }
}
