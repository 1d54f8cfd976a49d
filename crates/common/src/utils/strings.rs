use eyre::{bail, eyre, Result};
use std::fmt::Write;

/// Decodes a hex string into a vector of bytes. A leading `0x` prefix is
/// accepted and ignored.
///
/// ```
/// use bifrost_common::utils::strings::decode_hex;
///
/// let hex = "48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
/// ```
pub fn decode_hex(mut s: &str) -> Result<Vec<u8>> {
    // normalize
    s = s.trim_start_matches("0x").trim();

    if s.is_empty() {
        return Ok(vec![]);
    }

    if s.len() % 2 != 0 {
        bail!("odd-length hex string: {}", s);
    }

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| eyre!("invalid hex string: {}", s))
}

/// Encodes a slice of bytes into a bare hex string, with no `0x` prefix.
///
/// ```
/// use bifrost_common::utils::strings::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(s: &[u8]) -> String {
    s.iter().fold(String::new(), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Ensures a hex string carries the `0x` prefix the ABI codec expects.
/// Already-prefixed input is returned unchanged, so the function is
/// idempotent.
///
/// ```
/// use bifrost_common::utils::strings::ensure_hex_prefix;
///
/// assert_eq!(ensure_hex_prefix("deadbeef"), "0xdeadbeef");
/// assert_eq!(ensure_hex_prefix("0xdeadbeef"), "0xdeadbeef");
/// ```
pub fn ensure_hex_prefix(s: &str) -> String {
    if s.starts_with("0x") {
        s.to_string()
    } else {
        format!("0x{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex_with_prefix() {
        let result = decode_hex("0x0001ff").expect("failed to decode hex");
        assert_eq!(result, vec![0x00, 0x01, 0xff]);
    }

    #[test]
    fn test_decode_hex_empty() {
        let result = decode_hex("").expect("failed to decode hex");
        assert_eq!(result, Vec::<u8>::new());

        let result = decode_hex("0x").expect("failed to decode hex");
        assert_eq!(result, Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hex_invalid() {
        assert!(decode_hex("zz").is_err());
        assert!(decode_hex("abc").is_err());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let bytes = vec![0xde, 0xad, 0xbe, 0xef];
        let encoded = encode_hex(&bytes);
        assert_eq!(encoded, "deadbeef");
        assert_eq!(decode_hex(&encoded).expect("failed to decode hex"), bytes);
    }

    #[test]
    fn test_ensure_hex_prefix_adds_prefix() {
        assert_eq!(ensure_hex_prefix("abc123"), "0xabc123");
    }

    #[test]
    fn test_ensure_hex_prefix_idempotent() {
        let once = ensure_hex_prefix("abc123");
        let twice = ensure_hex_prefix(&once);
        assert_eq!(once, twice);
        assert_eq!(ensure_hex_prefix("0xabc123"), "0xabc123");
    }
}
