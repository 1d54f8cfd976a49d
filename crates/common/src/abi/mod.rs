/// Descriptor types for contract methods and events, plus helpers for
/// rendering decoded values.
pub mod types;
