/// Errors produced while converting between call values and ABI payloads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A decoded log's event has no corresponding descriptor in the supplied
    /// interface. Carries the event name when known, otherwise the event's
    /// signature topic hash.
    #[error("cannot find ABI for event type: {0}")]
    MissingEventAbi(String),
    /// An error raised by the underlying ABI codec, passed through
    /// unmodified.
    #[error("ABI codec error: {0}")]
    Abi(#[from] alloy_dyn_abi::Error),
    /// Internal error.
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
