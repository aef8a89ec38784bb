//! Declarative field maps applied to raw API results.
//!
//! Each endpoint declares a `&'static [FieldRule]` naming which fields of its
//! result get which formatter. [`apply_rules`] walks the JSON once per rule and
//! replaces the matching values in place; every other field is left exactly as
//! the service sent it.
//!
//! Rule paths are dot-separated keys where `[]` steps into every element of an
//! array:
//!
//! | Path | Targets |
//! |---|---|
//! | `""` | the result itself (scalar results) |
//! | `"[].value"` | `value` of every element of an array result |
//! | `"list[].gasPrice"` | `gasPrice` of every element of `result.list` |
//! | `"maxTime"` | `result.maxTime` |

use serde_json::Value;

use super::time::{format_date, format_timestamp};
use super::units::{format_cfx, format_gdrip, format_token_amount};

/// Which formatter a field goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Drip amount rendered as grouped CFX.
    Cfx,
    /// Drip gas amount rendered as grouped Gdrip.
    Gdrip,
    /// Epoch seconds rendered as `YYYY-MM-DD HH:MM:SS`.
    Timestamp,
    /// Epoch seconds rendered as `YYYY-MM-DD`.
    Date,
    /// Token amount scaled by the decimals found in the named sibling field.
    TokenAmount { decimals: &'static str },
}

/// One `path -> format` entry of an endpoint's field map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub path: &'static str,
    pub format: FieldFormat,
}

impl FieldRule {
    pub const fn new(path: &'static str, format: FieldFormat) -> Self {
        Self { path, format }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'p> {
    Key(&'p str),
    Each,
}

fn parse_path(path: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    for part in path.split('.').filter(|p| !p.is_empty()) {
        let mut key = part;
        let mut each = 0;
        while let Some(rest) = key.strip_suffix("[]") {
            key = rest;
            each += 1;
        }
        if !key.is_empty() {
            segments.push(Segment::Key(key));
        }
        segments.extend(std::iter::repeat(Segment::Each).take(each));
    }
    segments
}

/// Whether a value counts as "nothing to format".
///
/// Mirrors loose truthiness: `null`, `false`, numeric zero and the empty
/// string are skipped, while the string `"0"` is a real value and is formatted.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0 || f.is_nan()).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Apply every rule of a field map to a raw result.
pub fn apply_rules(mut value: Value, rules: &[FieldRule]) -> Value {
    for rule in rules {
        let segments = parse_path(rule.path);
        visit(&mut value, &segments, rule);
    }
    value
}

fn visit(node: &mut Value, path: &[Segment<'_>], rule: &FieldRule) {
    match path {
        [] => format_field(node, None, rule),
        [Segment::Each, rest @ ..] => {
            if let Value::Array(items) = node {
                for item in items {
                    visit(item, rest, rule);
                }
            }
        }
        [Segment::Key(key)] => {
            if let Value::Object(map) = node {
                let decimals = match rule.format {
                    FieldFormat::TokenAmount { decimals } => map.get(decimals).and_then(decimals_of),
                    _ => None,
                };
                if let Some(field) = map.get_mut(*key) {
                    format_field(field, decimals, rule);
                }
            }
        }
        [Segment::Key(key), rest @ ..] => {
            if let Some(child) = node.get_mut(*key) {
                visit(child, rest, rule);
            }
        }
    }
}

/// Token decimals are a `uint8` on chain; anything larger is garbage.
const MAX_TOKEN_DECIMALS: u32 = u8::MAX as u32;

fn decimals_of(value: &Value) -> Option<u32> {
    let decimals = match value {
        Value::Number(n) => n.as_u64().and_then(|d| u32::try_from(d).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    (decimals <= MAX_TOKEN_DECIMALS).then_some(decimals)
}

fn amount_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => n.as_u64().map(|u| u.to_string()),
        _ => None,
    }
}

fn format_field(field: &mut Value, decimals: Option<u32>, rule: &FieldRule) {
    if is_falsy(field) {
        return;
    }

    let formatted = match rule.format {
        FieldFormat::Timestamp => Some(format_timestamp(&*field)),
        FieldFormat::Date => Some(format_date(&*field)),
        FieldFormat::Cfx => amount_text(field).and_then(|t| format_cfx(&t).ok()),
        FieldFormat::Gdrip => amount_text(field).and_then(|t| format_gdrip(&t).ok()),
        FieldFormat::TokenAmount { .. } => decimals.and_then(|d| {
            amount_text(field).and_then(|t| format_token_amount(&t, d).ok())
        }),
    };

    match formatted {
        Some(text) => *field = Value::String(text),
        None => tracing::warn!(
            path = rule.path,
            value = %field,
            "field could not be formatted; leaving raw value"
        ),
    }
}
