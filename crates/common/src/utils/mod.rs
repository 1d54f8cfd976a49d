/// Hexadecimal formatting helpers for EVM primitive types.
pub mod hex;

/// String manipulation and hex codec utilities.
pub mod strings;
