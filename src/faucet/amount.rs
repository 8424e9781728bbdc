//! Native currency amounts.

use alloy::primitives::utils::{format_ether, parse_units, ParseUnits};
use alloy::primitives::U256;

/// The fixed amount sent per drip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DripAmount {
    wei: U256,
}

impl DripAmount {
    /// Parse a decimal ether amount such as `"1.0"` or `"0.25"`.
    ///
    /// Zero and negative amounts are rejected.
    pub fn parse(ether: &str) -> Option<Self> {
        match parse_units(ether.trim(), "ether").ok()? {
            ParseUnits::U256(wei) if !wei.is_zero() => Some(Self { wei }),
            _ => None,
        }
    }

    /// Value in wei.
    pub fn wei(&self) -> U256 {
        self.wei
    }

    /// Display form in ether, e.g. `"1.0"`.
    pub fn ether(&self) -> String {
        display_ether(self.wei)
    }

    /// How many whole drips `balance` can still pay for.
    pub fn remaining_drips(&self, balance: U256) -> u64 {
        (balance / self.wei).saturating_to::<u64>()
    }
}

/// Render a wei amount in ether with trailing zeros trimmed (`1.500` → `1.5`, `2` → `2.0`).
pub fn display_ether(wei: U256) -> String {
    let formatted = format_ether(wei);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => format!("{}.0", formatted),
    }
}
