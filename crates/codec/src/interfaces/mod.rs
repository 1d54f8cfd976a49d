mod logs;

pub use logs::{DecodedLog, TransactionLog};
