//! Conversion layer between application-level call values and the contract
//! VM's ABI wire encoding.
//!
//! The crate exposes three stateless operations over caller-supplied
//! interface descriptors: [`encode_inputs`] turns an argument list into hex
//! calldata, [`decode_outputs`] turns raw return data into typed values, and
//! [`decode_logs`] re-associates emitted event logs with their descriptors
//! and decodes them into named parameter maps. All type-aware encoding
//! arithmetic is delegated to the `alloy` ABI codec.

pub mod error;

mod core;
mod interfaces;
mod utils;

// re-export the public interface
pub use core::{decode_logs, decode_outputs, encode_inputs};
pub use error::Error;
pub use interfaces::{DecodedLog, TransactionLog};
pub use utils::{LogDecoder, ParsedLog};
