use super::strings::encode_hex;
use alloy::primitives::{Address, B256};

/// A convenience trait which formats a given EVM type as a prefixed,
/// lowercase hex string.
pub trait ToLowerHex {
    /// Returns the value as a `0x`-prefixed lowercase hex string.
    fn to_lower_hex(&self) -> String;
}

impl ToLowerHex for B256 {
    fn to_lower_hex(&self) -> String {
        format!("{self:#x}")
    }
}

impl ToLowerHex for Address {
    fn to_lower_hex(&self) -> String {
        format!("{self:#x}")
    }
}

impl ToLowerHex for Vec<u8> {
    fn to_lower_hex(&self) -> String {
        format!("0x{}", encode_hex(self))
    }
}
