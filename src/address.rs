//! Address validation for Conflux eSpace (`0x`-prefixed, EIP-55 checksummed).

use std::str::FromStr;

use alloy_primitives::Address;

use crate::error::{Result, ScanError};

fn hex_body(text: &str) -> Option<&str> {
    let body = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))?;
    if body.len() == 40 && body.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(body)
    } else {
        None
    }
}

/// Check that `text` is a well-formed eSpace address.
///
/// All-lowercase and all-uppercase hex are accepted as unchecksummed; mixed
/// case must match the EIP-55 checksum exactly.
pub fn is_valid_address(text: &str) -> bool {
    let Some(body) = hex_body(text) else {
        return false;
    };
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }
    Address::parse_checksummed(format!("0x{}", body), None).is_ok()
}

/// True iff every element is a valid address. An empty list is vacuously valid;
/// endpoints that need at least one address check that separately.
pub fn is_valid_address_list(addresses: &[&str]) -> bool {
    addresses.iter().all(|a| is_valid_address(a))
}

/// Validate a caller-supplied address, naming the parameter in the error.
pub fn validate_address(field: &str, value: &str) -> Result<()> {
    if is_valid_address(value) {
        Ok(())
    } else {
        Err(ScanError::InvalidArgument(format!(
            "Invalid address for '{}': {}",
            field, value
        )))
    }
}

/// Validate a list of addresses, naming the first offender.
pub fn validate_address_list(field: &str, values: &[&str]) -> Result<()> {
    if values.is_empty() {
        return Err(ScanError::InvalidArgument(format!(
            "'{}' needs at least one address",
            field
        )));
    }
    for value in values {
        validate_address(field, value)?;
    }
    Ok(())
}

/// Re-encode a valid address with its EIP-55 checksum casing.
pub fn to_checksum_address(text: &str) -> Result<String> {
    let Some(body) = hex_body(text) else {
        return Err(ScanError::InvalidArgument(format!("Invalid address: {}", text)));
    };
    let address = Address::from_str(&format!("0x{}", body))
        .map_err(|e| ScanError::InvalidArgument(format!("Invalid address {}: {}", text, e)))?;
    Ok(address.to_checksum(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn accepts_checksummed_and_single_case() {
        assert!(is_valid_address(CHECKSUMMED));
        assert!(is_valid_address(&CHECKSUMMED.to_lowercase()));
        assert!(is_valid_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"));
    }

    #[test]
    fn rejects_bad_checksum_and_shape() {
        assert!(!is_valid_address("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!is_valid_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!is_valid_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe"));
        assert!(!is_valid_address("0xZZAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!is_valid_address("cfx:aak2rra2njvd77ezwjvx04kkds9fzagfe6ku8scz91"));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn list_requires_every_element() {
        assert!(is_valid_address_list(&[CHECKSUMMED]));
        assert!(!is_valid_address_list(&[CHECKSUMMED, "0x123"]));
    }

    #[test]
    fn empty_list_is_valid_but_rejected_by_validation() {
        assert!(is_valid_address_list(&[]));
        assert!(validate_address_list("address", &[]).is_err());
    }

    #[test]
    fn validate_names_field_and_value() {
        let err = validate_address("address", "0x123").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("address"));
        assert!(msg.contains("0x123"));
    }

    #[test]
    fn checksum_round_trip() {
        assert_eq!(to_checksum_address(&CHECKSUMMED.to_lowercase()).unwrap(), CHECKSUMMED);
        assert!(to_checksum_address("0x12").is_err());
    }
}
