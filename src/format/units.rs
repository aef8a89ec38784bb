//! Exact integer-to-decimal scaling and digit grouping.
//!
//! Amounts arrive as decimal integer text of arbitrary magnitude (18-decimal
//! CFX balances overflow `u64` quickly), so every operation here works on the
//! digit string itself. Nothing goes through floating point.

use std::fmt::Display;

use crate::error::{Result, ScanError};

/// Decimal places of the native currency (1 CFX = 10^18 drip).
pub const CFX_DECIMALS: u32 = 18;
/// Decimal places of the gas presentation unit (1 Gdrip = 10^9 drip).
pub const GDRIP_DECIMALS: u32 = 9;

pub const CFX_UNIT: &str = "CFX";
pub const GDRIP_UNIT: &str = "Gdrip";

fn check_digits(raw: &str) -> Result<()> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScanError::InvalidAmount(format!(
            "expected a non-negative integer, got '{}'",
            raw
        )));
    }
    Ok(())
}

fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Place a decimal point `decimals` digits from the right of an integer amount.
///
/// Trailing fractional zeros are trimmed and the point is dropped when the
/// fraction is empty, so `"1000000000000000000"` at 18 decimals is `"1"`.
///
/// ```rust
/// use confluxscan_sdk::format::scale_amount;
/// assert_eq!(scale_amount("1500000000000000000", 18).unwrap(), "1.5");
/// assert_eq!(scale_amount("42", 4).unwrap(), "0.0042");
/// ```
pub fn scale_amount(raw: &str, decimals: u32) -> Result<String> {
    check_digits(raw)?;
    let digits = strip_leading_zeros(raw);
    if decimals == 0 || digits == "0" {
        return Ok(digits.to_string());
    }

    let decimals = decimals as usize;
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits.to_string()
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        Ok(int_part.to_string())
    } else {
        Ok(format!("{}.{}", int_part, frac_part))
    }
}

/// Inverse of [`scale_amount`]: turn a decimal string back into the integer amount.
///
/// Rejects inputs with more fractional digits than `decimals`, since they
/// cannot be represented in the smallest unit.
pub fn unscale_amount(scaled: &str, decimals: u32) -> Result<String> {
    let (int_part, frac_part) = match scaled.split_once('.') {
        Some((i, f)) => (i, f),
        None => (scaled, ""),
    };
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    check_digits(int_part)?;
    if !frac_part.is_empty() {
        check_digits(frac_part)?;
    }

    let decimals = decimals as usize;
    if frac_part.len() > decimals {
        return Err(ScanError::InvalidAmount(format!(
            "'{}' has more than {} fractional digits",
            scaled, decimals
        )));
    }

    let joined = format!(
        "{}{}{}",
        int_part,
        frac_part,
        "0".repeat(decimals - frac_part.len())
    );
    Ok(strip_leading_zeros(&joined).to_string())
}

/// Insert a `,` every three digits in the integer part of a numeric value.
///
/// The fractional part and a leading `-` are kept as they are.
///
/// ```rust
/// use confluxscan_sdk::format::group_number;
/// assert_eq!(group_number("1000000"), "1,000,000");
/// assert_eq!(group_number(1234.5), "1,234.5");
/// ```
pub fn group_number(value: impl Display) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a drip amount as grouped CFX, e.g. `"1,234.5 CFX"`.
pub fn format_cfx(raw: &str) -> Result<String> {
    Ok(format!(
        "{} {}",
        group_number(scale_amount(raw, CFX_DECIMALS)?),
        CFX_UNIT
    ))
}

/// Format a drip gas amount as grouped Gdrip, e.g. `"21,000 Gdrip"`.
pub fn format_gdrip(raw: &str) -> Result<String> {
    Ok(format!(
        "{} {}",
        group_number(scale_amount(raw, GDRIP_DECIMALS)?),
        GDRIP_UNIT
    ))
}

/// Scale a token amount by the token's own decimals.
///
/// No grouping and no unit: the symbol depends on the token and is attached by
/// the caller.
pub fn format_token_amount(raw: &str, decimals: u32) -> Result<String> {
    scale_amount(raw, decimals)
}
