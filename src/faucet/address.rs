//! Recipient address validation.
//!
//! Accepts exactly `0x` followed by 40 hex characters, in any letter case,
//! and normalizes to the EIP-55 checksummed form.

use alloy::primitives::Address;

use crate::faucet::error::{FaucetError, FaucetResult};

const ADDRESS_HEX_LEN: usize = 40;

/// Validate `input` and parse it into an address.
///
/// The checksum embedded in mixed-case input is not enforced; the result is
/// re-encoded instead.
pub fn parse_address(input: &str) -> FaucetResult<Address> {
    let hex = input
        .strip_prefix("0x")
        .ok_or_else(|| invalid(input))?;

    if hex.len() != ADDRESS_HEX_LEN || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(input));
    }

    input.parse::<Address>().map_err(|_| invalid(input))
}

/// Validate `input` and return its checksummed representation.
pub fn checksum_address(input: &str) -> FaucetResult<String> {
    parse_address(input).map(|address| address.to_checksum(None))
}

fn invalid(input: &str) -> FaucetError {
    FaucetError::InvalidAddress(format!("Invalid Ethereum address format: '{}'", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
    const CHECKSUMMED: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_checksum_normalization() {
        assert_eq!(checksum_address(LOWER).unwrap(), CHECKSUMMED);
        assert_eq!(checksum_address(&LOWER.to_uppercase().replacen("0X", "0x", 1)).unwrap(), CHECKSUMMED);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for input in [
            LOWER,
            CHECKSUMMED,
            "0x0000000000000000000000000000000000000000",
            "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
            "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
        ] {
            let once = checksum_address(input).unwrap();
            let twice = checksum_address(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {}", input);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "",
            "0x",
            "f39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "0Xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb9226",
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb922666",
            "0xg39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            " 0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb9226é",
        ] {
            assert!(
                matches!(parse_address(input), Err(FaucetError::InvalidAddress(_))),
                "accepted {:?}",
                input
            );
        }
    }
}
